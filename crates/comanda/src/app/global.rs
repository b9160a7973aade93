use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("comanda")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monitor and operate the restaurant services from the terminal")
        .long_about("comanda talks to the staff, inventory, kitchen, orders and notifications services through the API gateway. One-shot subcommands print a single view; 'comanda watch' keeps a live dashboard on screen and refreshes it on a schedule.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("gateway")
                .long("gateway")
                .value_name("URL")
                .help("API gateway base URL (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

/// Repeatable `--item name:qty:price`.
pub fn item_arg() -> Arg {
    Arg::new("item")
        .long("item")
        .short('i')
        .value_name("NAME:QTY:PRICE")
        .help("Order line, e.g. 'Pizza:2:39.90' (repeatable)")
        .action(ArgAction::Append)
}
