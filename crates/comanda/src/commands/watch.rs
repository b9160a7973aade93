use std::io;

use clap::ArgMatches;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::task::JoinSet;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use comanda_core::{
    ActionError, AlertLevel, Dashboard, LiveDashboard, Panel, PanelLine, RefreshIntervals,
    Scheduler, Tone, ViewKind,
};

use super::helpers::Context;
use crate::render;
use crate::repl::{self, HELP, ReplCommand};

type Input = Lines<BufReader<Stdin>>;

async fn next_line(input: &mut Option<Input>) -> io::Result<Option<String>> {
    match input {
        Some(lines) => lines.next_line().await,
        None => std::future::pending().await,
    }
}

fn help_panel() -> Panel {
    let mut panel = Panel::new("⌨️  Commands");
    panel.extend(
        HELP.iter()
            .map(|(usage, what)| PanelLine::new(Tone::Normal, format!("{:<44} {}", usage, what))),
    );
    panel
}

/// Errors were already raised as alerts by the dashboard.
fn settle<T>(result: Result<T, ActionError>) {
    if let Err(e) = result {
        debug!(event = "cli.watch.command_failed", error = %e);
    }
}

/// Run one command to completion. Runs on its own task so the watch loop
/// keeps reading input and repainting while a request is in flight.
async fn execute(dashboard: Dashboard, live: LiveDashboard, command: ReplCommand) {
    match command {
        ReplCommand::Quit => {}
        ReplCommand::Help => {
            dashboard
                .update(|s| s.panel.show(ViewKind::Empty, help_panel()))
                .await;
        }
        ReplCommand::Health => {
            dashboard.check_all_services().await;
        }
        ReplCommand::Availability => settle(dashboard.show_staff_availability().await),
        ReplCommand::Inventory => settle(dashboard.show_inventory().await),
        ReplCommand::Kitchen => settle(dashboard.show_kitchen_status().await),
        ReplCommand::ActiveOrders => settle(dashboard.show_active_orders().await),
        ReplCommand::Orders => settle(dashboard.show_orders().await),
        ReplCommand::Filter { kind, order_id } => {
            settle(dashboard.apply_filter(kind, order_id.as_deref()).await)
        }
        ReplCommand::AllNotifications => settle(dashboard.reset_and_show_all().await),
        ReplCommand::Summary => settle(dashboard.show_notification_summary().await),
        ReplCommand::Track(order_id) => settle(dashboard.track_order(&order_id).await),
        ReplCommand::LiveStart => live.start().await,
        ReplCommand::LiveStop => {
            if !live.stop().await {
                dashboard
                    .alert(AlertLevel::Info, "Live dashboard is not running")
                    .await;
            }
        }
        ReplCommand::Employee(form) => settle(dashboard.create_employee(&form).await),
        ReplCommand::Stock(form) => settle(dashboard.add_stock(&form).await),
        ReplCommand::Order(form) => settle(dashboard.create_order(&form).await),
        ReplCommand::Prepare(form) => settle(dashboard.prepare_order(&form).await),
        ReplCommand::Dismiss(id) => {
            dashboard.dismiss_alert(id).await;
        }
    }
}

/// Repaint and report when the next alert expires.
async fn repaint(dashboard: &Dashboard) -> io::Result<Option<Instant>> {
    let focus = dashboard.take_focus().await;
    let state = dashboard.snapshot().await;
    render::paint(&state, focus)?;
    Ok(state.alerts.next_expiry())
}

pub(crate) async fn handle_watch_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = ctx.dashboard.clone();
    let changed = dashboard.changed();
    let mut input: Option<Input> = if matches.get_flag("no-input") {
        None
    } else {
        Some(BufReader::new(tokio::io::stdin()).lines())
    };

    info!(event = "cli.watch.started");
    render::paint(&dashboard.snapshot().await, true)?;
    dashboard.check_all_services().await;

    let scheduler = Scheduler::start(
        dashboard.clone(),
        RefreshIntervals::from_config(&ctx.config.refresh),
    );
    let mut next_expiry = repaint(&dashboard).await?;

    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = changed.notified() => {}
            _ = sleep_until(next_expiry.unwrap_or_else(Instant::now)), if next_expiry.is_some() => {
                dashboard.prune_alerts().await;
            }
            Some(done) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = done {
                    warn!(event = "cli.watch.command_panicked", error = %e);
                }
            }
            line = next_line(&mut input) => match line? {
                None => break,
                Some(line) => match repl::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(ReplCommand::Quit)) => break,
                    Ok(Some(command)) => {
                        debug!(event = "cli.watch.command_started", in_flight = in_flight.len());
                        in_flight.spawn(execute(
                            dashboard.clone(),
                            scheduler.live().clone(),
                            command,
                        ));
                    }
                    Err(message) => {
                        dashboard.alert(AlertLevel::Warning, message).await;
                    }
                },
            },
        }
        next_expiry = repaint(&dashboard).await?;
    }

    in_flight.shutdown().await;
    scheduler.shutdown().await;
    println!();
    info!(event = "cli.watch.completed");
    Ok(())
}
