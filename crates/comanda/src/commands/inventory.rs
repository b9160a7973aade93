use clap::ArgMatches;
use tracing::error;

use comanda_core::{ServiceKind, StockForm};

use super::helpers::{Context, print_alerts, print_json, print_view, report_action_error};

pub(crate) async fn handle_inventory_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub)) => {
            if sub.get_flag("json") {
                print_json(
                    "Failed to load inventory",
                    ctx.dashboard.backend().list_inventory().await,
                )
            } else {
                print_view(ctx.dashboard.show_inventory().await)
            }
        }
        Some(("add", sub)) => {
            let form = StockForm {
                product: sub.get_one::<String>("product").cloned().unwrap_or_default(),
                quantity: sub
                    .get_one::<String>("quantity")
                    .cloned()
                    .unwrap_or_default(),
            };
            match ctx.dashboard.add_stock(&form).await {
                Ok(_) => {
                    print_alerts(&ctx.dashboard).await;
                    let state = ctx.dashboard.snapshot().await;
                    if let Some(card) = state.board.card(ServiceKind::Inventory) {
                        println!("  {} ({})", card.headline, card.detail);
                    }
                    Ok(())
                }
                Err(e) => {
                    report_action_error(&e);
                    Err(e.into())
                }
            }
        }
        _ => {
            error!(event = "cli.inventory.subcommand_unknown");
            Err("Unknown inventory command".into())
        }
    }
}
