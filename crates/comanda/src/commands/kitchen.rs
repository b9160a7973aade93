use clap::ArgMatches;
use tracing::error;

use super::helpers::{
    Context, order_form, print_alerts, print_json, print_view, report_action_error,
};

pub(crate) async fn handle_kitchen_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = ctx.dashboard.backend();
    match matches.subcommand() {
        Some(("status", sub)) if sub.get_flag("json") => {
            print_json("Failed to get kitchen status", backend.kitchen_status().await)
        }
        Some(("status", _)) => print_view(ctx.dashboard.show_kitchen_status().await),
        Some(("active", sub)) if sub.get_flag("json") => {
            print_json("Failed to get active orders", backend.active_orders().await)
        }
        Some(("active", _)) => print_view(ctx.dashboard.show_active_orders().await),
        Some(("prepare", sub)) => match ctx.dashboard.prepare_order(&order_form(sub)).await {
            Ok(_) => {
                print_alerts(&ctx.dashboard).await;
                Ok(())
            }
            Err(e) => {
                report_action_error(&e);
                Err(e.into())
            }
        },
        _ => {
            error!(event = "cli.kitchen.subcommand_unknown");
            Err("Unknown kitchen command".into())
        }
    }
}
