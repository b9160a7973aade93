use clap::ArgMatches;
use tracing::info;

use comanda_core::HealthReport;
use comanda_core::health;

use super::helpers::Context;
use crate::color;
use crate::table::{format_rows, truncate};

pub(crate) async fn handle_health_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.health_started", json_output = json_output);

    let report = health::check_all(ctx.dashboard.backend()).await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_health_report(&report);
    }

    info!(
        event = "cli.health_completed",
        online = report.online_count(),
        total = report.total()
    );
    Ok(())
}

fn print_health_report(report: &HealthReport) {
    let rows: Vec<Vec<String>> = report
        .statuses
        .iter()
        .map(|status| {
            let (state, detail) = if status.online {
                (
                    "Online",
                    status
                        .online_detail()
                        .unwrap_or_else(|| "Operational".to_string()),
                )
            } else {
                (
                    "Offline",
                    status.error.as_deref().map_or_else(String::new, |e| truncate(e, 60)),
                )
            };
            vec![
                status.kind.display_name().to_string(),
                state.to_string(),
                detail,
            ]
        })
        .collect();

    let lines = format_rows(&["Service", "Status", "Detail"], &rows);
    if let Some((header, body)) = lines.split_first() {
        println!("{}", color::bold(header));
        for (line, status) in body.iter().zip(&report.statuses) {
            if status.online {
                println!("{}", color::success(line));
            } else {
                println!("{}", color::danger(line));
            }
        }
    }

    println!();
    println!("{}", report.summary_line());
}
