use clap::ArgMatches;
use tracing::error;

use comanda_core::events;

mod health;
mod helpers;
mod inventory;
mod kitchen;
mod notifications;
mod orders;
mod staff;
mod watch;

use helpers::Context;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let ctx = Context::from_matches(matches)?;

    let result = match matches.subcommand() {
        Some(("health", sub_matches)) => health::handle_health_command(&ctx, sub_matches).await,
        Some(("staff", sub_matches)) => staff::handle_staff_command(&ctx, sub_matches).await,
        Some(("inventory", sub_matches)) => {
            inventory::handle_inventory_command(&ctx, sub_matches).await
        }
        Some(("kitchen", sub_matches)) => kitchen::handle_kitchen_command(&ctx, sub_matches).await,
        Some(("orders", sub_matches)) => orders::handle_orders_command(&ctx, sub_matches).await,
        Some(("notifications", sub_matches)) => {
            notifications::handle_notifications_command(&ctx, sub_matches).await
        }
        Some(("watch", sub_matches)) => watch::handle_watch_command(&ctx, sub_matches).await,
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
