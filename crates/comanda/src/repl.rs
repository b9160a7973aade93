//! Command line parsing for `comanda watch`.

use comanda_core::models::NotificationType;
use comanda_core::{EmployeeForm, OrderForm, OrderItemInput, StockForm, generate_order_id};

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Quit,
    Health,
    Availability,
    Inventory,
    Kitchen,
    ActiveOrders,
    Orders,
    Filter {
        kind: Option<NotificationType>,
        order_id: Option<String>,
    },
    AllNotifications,
    Summary,
    Track(String),
    LiveStart,
    LiveStop,
    Employee(EmployeeForm),
    Stock(StockForm),
    Order(OrderForm),
    Prepare(OrderForm),
    Dismiss(u64),
}

pub const HELP: &[(&str, &str)] = &[
    ("health", "probe every service"),
    ("staff", "staff availability"),
    ("inventory", "current inventory"),
    ("kitchen", "kitchen status"),
    ("active", "orders in preparation"),
    ("orders", "recent orders"),
    ("filter <type|-> [order_id]", "filter notifications"),
    ("all", "clear the filter and show every notification"),
    ("summary", "notification counts by type"),
    ("track <order_id>", "notification timeline of one order"),
    ("live [start|stop]", "live notifications dashboard"),
    ("employee <name> <email> <password>", "register an employee"),
    ("stock <product> <quantity>", "add stock"),
    ("order <id|-> <table|-> <name:qty:price>...", "create an order"),
    ("prepare <id> <name:qty:price>...", "send an order to the kitchen"),
    ("dismiss <alert_id>", "dismiss an alert"),
    ("quit", "exit"),
];

/// `name:qty:price`; the name may itself contain colons. Missing parts stay
/// empty and fail order validation.
pub fn parse_item(spec: &str) -> OrderItemInput {
    let mut parts: Vec<&str> = spec.rsplitn(3, ':').collect();
    parts.reverse();
    match parts.as_slice() {
        [name, quantity, price] => OrderItemInput {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        },
        [name, quantity] => OrderItemInput {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: String::new(),
        },
        _ => OrderItemInput {
            name: spec.to_string(),
            ..OrderItemInput::default()
        },
    }
}

fn placeholder(token: &str) -> Option<&str> {
    (token != "-").then_some(token)
}

fn parse_filter(args: &[&str]) -> Result<ReplCommand, String> {
    let kind = match args.first().copied().and_then(placeholder) {
        None | Some("all") => None,
        Some(raw) => Some(raw.parse::<NotificationType>()?),
    };
    Ok(ReplCommand::Filter {
        kind,
        order_id: args.get(1).map(|s| s.to_string()),
    })
}

fn parse_order(args: &[&str]) -> Result<ReplCommand, String> {
    let [id, table, items @ ..] = args else {
        return Err("usage: order <id|-> <table|-> <name:qty:price>...".to_string());
    };
    Ok(ReplCommand::Order(OrderForm {
        order_id: placeholder(id).map_or_else(generate_order_id, str::to_string),
        table: placeholder(table).unwrap_or_default().to_string(),
        customer_id: String::new(),
        items: items.iter().map(|s| parse_item(s)).collect(),
    }))
}

pub fn parse(line: &str) -> Result<Option<ReplCommand>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (head.to_lowercase().as_str(), args) {
        ("help" | "?", _) => ReplCommand::Help,
        ("quit" | "exit" | "q", _) => ReplCommand::Quit,
        ("health", _) => ReplCommand::Health,
        ("staff" | "availability", _) => ReplCommand::Availability,
        ("inventory" | "stock", []) => ReplCommand::Inventory,
        ("kitchen", _) => ReplCommand::Kitchen,
        ("active", _) => ReplCommand::ActiveOrders,
        ("orders", _) => ReplCommand::Orders,
        ("filter" | "notifications", args) => parse_filter(args)?,
        ("all", _) => ReplCommand::AllNotifications,
        ("summary", _) => ReplCommand::Summary,
        ("track", [order_id]) => ReplCommand::Track(order_id.to_string()),
        ("track", _) => return Err("usage: track <order_id>".to_string()),
        ("live", [] | ["start"]) => ReplCommand::LiveStart,
        ("live", ["stop"]) => ReplCommand::LiveStop,
        ("employee", [name @ .., email, password]) if !name.is_empty() => {
            ReplCommand::Employee(EmployeeForm {
                name: name.join(" "),
                email: email.to_string(),
                password: password.to_string(),
            })
        }
        ("employee", _) => return Err("usage: employee <name> <email> <password>".to_string()),
        ("stock", [product @ .., quantity]) if !product.is_empty() => {
            ReplCommand::Stock(StockForm {
                product: product.join(" "),
                quantity: quantity.to_string(),
            })
        }
        ("stock", _) => return Err("usage: stock <product> <quantity>".to_string()),
        ("order", args) => parse_order(args)?,
        ("prepare", [id, items @ ..]) => ReplCommand::Prepare(OrderForm {
            order_id: id.to_string(),
            items: items.iter().map(|s| parse_item(s)).collect(),
            ..OrderForm::default()
        }),
        ("prepare", _) => return Err("usage: prepare <id> <name:qty:price>...".to_string()),
        ("dismiss", [id]) => ReplCommand::Dismiss(
            id.parse()
                .map_err(|_| format!("alert id must be a number, got '{}'", id))?,
        ),
        (other, _) => return Err(format!("unknown command '{}'; type 'help'", other)),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("inventory"), Ok(Some(ReplCommand::Inventory)));
        assert_eq!(parse("Kitchen"), Ok(Some(ReplCommand::Kitchen)));
        assert_eq!(parse("live"), Ok(Some(ReplCommand::LiveStart)));
        assert_eq!(parse("live stop"), Ok(Some(ReplCommand::LiveStop)));
        assert_eq!(parse("quit"), Ok(Some(ReplCommand::Quit)));
    }

    #[test]
    fn test_filter_variants() {
        assert_eq!(
            parse("filter sistema"),
            Ok(Some(ReplCommand::Filter {
                kind: Some(NotificationType::System),
                order_id: None
            }))
        );
        assert_eq!(
            parse("filter - PED1"),
            Ok(Some(ReplCommand::Filter {
                kind: None,
                order_id: Some("PED1".to_string())
            }))
        );
        assert!(parse("filter bogus").is_err());
    }

    #[test]
    fn test_employee_name_may_have_spaces() {
        let Ok(Some(ReplCommand::Employee(form))) =
            parse("employee Ana Maria ana@example.com s3cret")
        else {
            panic!("expected employee command");
        };
        assert_eq!(form.name, "Ana Maria");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.password, "s3cret");
        assert!(parse("employee ana@example.com").is_err());
    }

    #[test]
    fn test_stock_command() {
        assert_eq!(
            parse("stock Arroz integral 5"),
            Ok(Some(ReplCommand::Stock(StockForm {
                product: "Arroz integral".to_string(),
                quantity: "5".to_string(),
            })))
        );
        assert_eq!(parse("stock"), Ok(Some(ReplCommand::Inventory)));
    }

    #[test]
    fn test_order_with_generated_id() {
        let Ok(Some(ReplCommand::Order(form))) = parse("order - 4 Pizza:2:39.90 Suco:1:8.5")
        else {
            panic!("expected order command");
        };
        assert!(form.order_id.starts_with("PED"));
        assert_eq!(form.table, "4");
        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[1].price, "8.5");
    }

    #[test]
    fn test_order_without_table() {
        let Ok(Some(ReplCommand::Order(form))) = parse("order PED9 - Pizza:1:30") else {
            panic!("expected order command");
        };
        assert_eq!(form.order_id, "PED9");
        assert_eq!(form.table, "");
    }

    #[test]
    fn test_parse_item_shapes() {
        let item = parse_item("Combo: burger:1:25.5");
        assert_eq!(item.name, "Combo: burger");
        assert_eq!(item.quantity, "1");
        assert_eq!(item.price, "25.5");

        let partial = parse_item("Pizza");
        assert_eq!(partial.name, "Pizza");
        assert!(partial.to_item().is_none());
    }

    #[test]
    fn test_unknown_and_bad_args() {
        assert!(parse("launch").unwrap_err().contains("unknown command"));
        assert!(parse("dismiss x").is_err());
        assert_eq!(parse("dismiss 3"), Ok(Some(ReplCommand::Dismiss(3))));
        assert!(parse("track").is_err());
    }
}
