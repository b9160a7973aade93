use std::io::{self, Write};

use clap::ArgMatches;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use comanda_core::models::NotificationType;
use comanda_core::LiveDashboard;
use comanda_core::state::NotificationFilter;

use super::helpers::{Context, print_json, print_view};
use crate::color;
use crate::render;

pub(crate) async fn handle_notifications_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub)) => handle_list(ctx, sub).await,
        Some(("summary", sub)) if sub.get_flag("json") => print_json(
            "Failed to get notification summary",
            ctx.dashboard.backend().notification_summary().await,
        ),
        Some(("summary", _)) => print_view(ctx.dashboard.show_notification_summary().await),
        Some(("live", _)) => run_live(ctx).await,
        _ => {
            error!(event = "cli.notifications.subcommand_unknown");
            Err("Unknown notifications command".into())
        }
    }
}

async fn handle_list(ctx: &Context, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let kind = match matches.get_one::<String>("type") {
        None => None,
        Some(raw) => match raw.parse::<NotificationType>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                eprintln!("{}", color::error(&format!("❌ {}", e)));
                error!(event = "cli.notifications.invalid_type", value = %raw);
                return Err(e.into());
            }
        },
    };
    let order_id = matches.get_one::<String>("order-id").map(String::as_str);

    if matches.get_flag("json") {
        let query = NotificationFilter::new(kind, order_id).to_query();
        return print_json(
            "Failed to load notifications",
            ctx.dashboard.backend().notifications(&query).await,
        );
    }

    if kind.is_none() && order_id.is_none() {
        print_view(ctx.dashboard.reset_and_show_all().await)
    } else {
        print_view(ctx.dashboard.apply_filter(kind, order_id).await)
    }
}

/// Follow the live view in the foreground until Ctrl+C or expiry.
async fn run_live(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let refresh = &ctx.config.refresh;
    let token = CancellationToken::new();
    let live = LiveDashboard::new(
        ctx.dashboard.clone(),
        refresh.live_interval(),
        refresh.live_max_duration(),
        token.clone(),
    );
    let changed = ctx.dashboard.changed();

    info!(event = "cli.live.started", limit = refresh.live_limit());
    live.start().await;

    loop {
        let focus = ctx.dashboard.take_focus().await;
        let state = ctx.dashboard.snapshot().await;
        {
            let mut stdout = io::stdout().lock();
            write!(
                stdout,
                "{}",
                if focus {
                    render::CLEAR_SCREEN
                } else {
                    render::REPAINT
                }
            )?;
            for line in render::panel_lines(state.panel.panel()) {
                writeln!(stdout, "{}", line)?;
            }
            writeln!(stdout)?;
            writeln!(stdout, "{}", color::muted("Press Ctrl+C to stop."))?;
            stdout.flush()?;
        }

        if !state.live_running {
            break;
        }

        tokio::select! {
            _ = changed.notified() => {}
            _ = tokio::signal::ctrl_c() => {
                live.stop().await;
                break;
            }
        }
    }

    token.cancel();
    let state = ctx.dashboard.snapshot().await;
    render::print_alerts(state.alerts.all());
    info!(event = "cli.live.completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::models::NotificationQuery;

    #[test]
    fn test_filter_query_from_flags() {
        let query =
            NotificationFilter::new(Some(NotificationType::OrderRefused), Some(" PED3 ")).to_query();
        assert_eq!(
            query.params(),
            vec![
                ("tipo", "pedido_recusado".to_string()),
                ("pedido_id", "PED3".to_string())
            ]
        );
        assert_eq!(NotificationQuery::all().params(), Vec::new());
    }
}
