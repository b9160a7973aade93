mod global;
mod services;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(services::health_command())
        .subcommand(services::staff_command())
        .subcommand(services::inventory_command())
        .subcommand(services::kitchen_command())
        .subcommand(services::orders_command())
        .subcommand(services::notifications_command())
        .subcommand(services::watch_command())
}
