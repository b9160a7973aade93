use crate::models::Order;
use crate::state::{Panel, PanelLine, Tone};

pub const ORDERS_TITLE: &str = "🧾 Recent Orders";

pub fn orders(orders: &[Order]) -> Panel {
    let mut panel = Panel::new(ORDERS_TITLE);
    if orders.is_empty() {
        panel.push(PanelLine::muted("No orders found"));
        return panel;
    }

    for order in orders {
        let table = order
            .table
            .map(|t| format!("  [Table {}]", t))
            .unwrap_or_default();
        panel.push(PanelLine::plain(format!("Order #{}{}", order.order_id, table)));
        panel.push(PanelLine::muted(format!(
            "  {} item(s) - Total: R$ {:.2}",
            order.items.len(),
            order.total.unwrap_or(0.0)
        )));
        panel.push(PanelLine::new(
            Tone::Info,
            format!("  {}", order.status.as_deref().unwrap_or("Processing")),
        ));
    }
    panel
}
