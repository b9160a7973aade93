use clap::{Arg, ArgAction, Command};

use super::global::{item_arg, json_arg};

pub fn health_command() -> Command {
    Command::new("health")
        .about("Probe every service through the gateway")
        .arg(json_arg())
}

pub fn staff_command() -> Command {
    Command::new("staff")
        .about("Employees and staff availability")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List registered employees")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Register a new employee")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("availability")
                .about("Check whether enough staff is available")
                .arg(json_arg()),
        )
}

pub fn inventory_command() -> Command {
    Command::new("inventory")
        .about("Stock levels")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("Show current inventory")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("add")
                .about("Add stock for a product")
                .arg(Arg::new("product").long("product").required(true))
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .short('q')
                        .required(true),
                ),
        )
}

fn order_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("id")
                .long("id")
                .value_name("ORDER_ID")
                .help("Order id (default: PED<unix millis>)"),
        )
        .arg(Arg::new("table").long("table").short('t').value_name("TABLE"))
        .arg(
            Arg::new("customer")
                .long("customer")
                .value_name("CUSTOMER_ID"),
        )
        .arg(item_arg())
}

pub fn kitchen_command() -> Command {
    Command::new("kitchen")
        .about("Kitchen status and preparation")
        .subcommand_required(true)
        .subcommand(
            Command::new("status")
                .about("Show kitchen status")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("active")
                .about("Show orders in preparation")
                .arg(json_arg()),
        )
        .subcommand(order_args(
            Command::new("prepare").about("Send an order straight to the kitchen"),
        ))
}

pub fn orders_command() -> Command {
    Command::new("orders")
        .about("Orders")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("Show recent orders")
                .arg(json_arg()),
        )
        .subcommand(order_args(Command::new("create").about("Create an order")))
        .subcommand(
            Command::new("track")
                .about("Show the notification timeline of one order")
                .arg(Arg::new("order_id").index(1).required(true))
                .arg(json_arg()),
        )
}

pub fn notifications_command() -> Command {
    Command::new("notifications")
        .about("Notification center")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List notifications, optionally filtered")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("TYPE")
                        .help("pedido_criado, pedido_aceito, pedido_recusado, pedido_finalizado or sistema"),
                )
                .arg(Arg::new("order-id").long("order-id").value_name("ORDER_ID"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Per-type notification counts")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("live")
                .about("Follow the latest notifications until stopped or expired"),
        )
}

pub fn watch_command() -> Command {
    Command::new("watch")
        .about("Interactive dashboard with scheduled refreshes")
        .arg(
            Arg::new("no-input")
                .long("no-input")
                .help("Do not read commands from stdin")
                .action(ArgAction::SetTrue),
        )
}
