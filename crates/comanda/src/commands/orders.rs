use clap::ArgMatches;
use tracing::{error, info};

use comanda_core::{ViewKind, tracking_query};

use super::helpers::{
    Context, order_form, print_alerts, print_json, print_view, report_action_error,
};
use crate::render;

pub(crate) async fn handle_orders_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub)) if sub.get_flag("json") => print_json(
            "Failed to load orders",
            ctx.dashboard.backend().list_orders().await,
        ),
        Some(("list", _)) => print_view(ctx.dashboard.show_orders().await),
        Some(("create", sub)) => handle_create(ctx, sub).await,
        Some(("track", sub)) => {
            let order_id = sub
                .get_one::<String>("order_id")
                .map(String::as_str)
                .unwrap_or_default();
            if sub.get_flag("json") {
                let query = match tracking_query(order_id) {
                    Ok(query) => query,
                    Err(e) => {
                        report_action_error(&e);
                        return Err(e.into());
                    }
                };
                print_json(
                    "Failed to track order",
                    ctx.dashboard.backend().notifications(&query).await,
                )
            } else {
                print_view(ctx.dashboard.track_order(order_id).await)
            }
        }
        _ => {
            error!(event = "cli.orders.subcommand_unknown");
            Err("Unknown orders command".into())
        }
    }
}

async fn handle_create(ctx: &Context, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let form = order_form(matches);
    info!(event = "cli.orders.create_started", order_id = %form.order_id);

    match ctx.dashboard.create_order(&form).await {
        Ok(_) => {
            print_alerts(&ctx.dashboard).await;
            let state = ctx.dashboard.snapshot().await;
            if state.panel.is_showing(&ViewKind::Orders) {
                println!();
                render::print_panel(state.panel.panel());
            }
            Ok(())
        }
        Err(e) => {
            report_action_error(&e);
            Err(e.into())
        }
    }
}
