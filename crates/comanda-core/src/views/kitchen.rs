use chrono::{DateTime, Utc};

use crate::models::time::{format_local, seconds_since};
use crate::models::{ActiveOrders, KitchenStatus};
use crate::state::{Panel, PanelLine, Tone};

pub const KITCHEN_STATUS_TITLE: &str = "🍳 Kitchen Status";
pub const ACTIVE_ORDERS_TITLE: &str = "🍳 Active Kitchen Orders";

/// `25`, `23.5`: one decimal at most, none when whole.
fn format_minutes(minutes: f64) -> String {
    let rounded = format!("{:.1}", minutes);
    rounded
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(rounded)
}

pub fn kitchen_status(status: &KitchenStatus) -> Panel {
    Panel::new(KITCHEN_STATUS_TITLE)
        .line(PanelLine::new(
            Tone::Accent,
            format!("{} orders in preparation", status.in_preparation),
        ))
        .line(PanelLine::new(
            Tone::Accent,
            format!(
                "{} min average preparation time",
                format_minutes(status.average_prep_minutes)
            ),
        ))
        .line(PanelLine::new(
            Tone::Info,
            format!("Status: {}", status.status),
        ))
}

pub fn active_orders(active: &ActiveOrders, now: DateTime<Utc>) -> Panel {
    let mut panel = Panel::new(ACTIVE_ORDERS_TITLE);
    if active.total == 0 {
        panel.push(PanelLine::new(Tone::Success, "✓ No orders in preparation"));
        return panel;
    }

    panel.push(PanelLine::new(
        Tone::Warning,
        format!("Orders in preparation: {}", active.total),
    ));
    for order in &active.orders {
        let elapsed = seconds_since(&order.started_at, now)
            .map(|secs| format!("{} min", (secs as f64 / 60.0).round() as i64))
            .unwrap_or_else(|| "? min".to_string());
        panel.push(PanelLine::blank());
        panel.push(PanelLine::new(
            Tone::Warning,
            format!("Order #{}  [IN PREPARATION]  ⏱ {}", order.order_id, elapsed),
        ));
        panel.push(PanelLine::muted(format!(
            "  Started: {}",
            format_local(&order.started_at)
        )));
        panel.push(PanelLine::muted(format!(
            "  Estimated time: {} min",
            order.estimated_minutes
        )));
    }
    panel
}
