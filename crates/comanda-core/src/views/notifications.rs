use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::notifications::{type_badge, type_icon};
use crate::models::time::{age_label, format_local, format_local_time, parse_timestamp, seconds_since};
use crate::models::{Notification, NotificationDetails, NotificationList, NotificationSummary};
use crate::state::{NotificationFilter, Panel, PanelLine, Tone};

pub const NOTIFICATIONS_TITLE: &str = "🔔 Notification Center";
pub const SUMMARY_TITLE: &str = "📊 Notification Summary";
pub const LIVE_TITLE: &str = "📡 Live Notification Dashboard";

/// Entries shown in the notification center.
pub const NOTIFICATION_CENTER_LIMIT: usize = 15;

/// Live entries younger than this get a `NEW` badge.
pub const NEW_BADGE_SECS: i64 = 30;

fn type_tone(raw: &str) -> Tone {
    match raw {
        "pedido_criado" => Tone::Accent,
        "pedido_aceito" => Tone::Success,
        "pedido_recusado" => Tone::Danger,
        "pedido_finalizado" => Tone::Warning,
        "sistema" => Tone::Info,
        _ => Tone::Muted,
    }
}

fn detail_line(notification: &Notification) -> Option<PanelLine> {
    match notification.decoded_details() {
        NotificationDetails::None => None,
        NotificationDetails::Pairs(pairs) => Some(PanelLine::muted(format!(
            "   {}",
            pairs
                .iter()
                .map(|(k, v)| format!("[{}: {}]", k, v))
                .collect::<Vec<_>>()
                .join(" ")
        ))),
        NotificationDetails::Raw(text) => Some(PanelLine::muted(format!("   {}", text))),
    }
}

pub fn notifications(list: &NotificationList, filter: &NotificationFilter) -> Panel {
    let mut panel = Panel::new(NOTIFICATIONS_TITLE)
        .line(PanelLine::new(Tone::Info, filter.describe()))
        .line(PanelLine::muted("🔄 Notifications refresh automatically"))
        .line(PanelLine::blank());

    if list.items.is_empty() {
        panel.push(PanelLine::muted("No notifications found"));
        return panel;
    }

    for notification in list.items.iter().take(NOTIFICATION_CENTER_LIMIT) {
        panel.push(PanelLine::new(
            type_tone(&notification.kind_raw),
            format!(
                "{} Order #{}  [{}]  {}",
                type_icon(&notification.kind_raw),
                notification.order_id,
                type_badge(&notification.kind_raw),
                format_local(&notification.created_at)
            ),
        ));
        panel.push(PanelLine::plain(format!("   {}", notification.message)));
        panel.extend(detail_line(notification));
    }

    if list.items.len() > NOTIFICATION_CENTER_LIMIT {
        panel.push(PanelLine::muted(format!(
            "… {} more not shown",
            list.items.len() - NOTIFICATION_CENTER_LIMIT
        )));
    }
    panel
}

pub fn notification_summary(summary: &NotificationSummary) -> Panel {
    let mut panel = Panel::new(SUMMARY_TITLE);
    for (kind, count) in &summary.by_type {
        panel.push(PanelLine::new(
            type_tone(kind),
            format!("{} {:>5}  {}", type_icon(kind), count, type_badge(kind)),
        ));
    }
    panel.push(PanelLine::blank());
    panel.push(PanelLine::new(
        Tone::Info,
        format!("Total notifications: {}", summary.total),
    ));
    panel
}

pub fn tracking_title(order_id: &str) -> String {
    format!("🔍 Tracking Order #{}", order_id)
}

/// Timeline of one order's notifications, oldest first.
pub fn order_tracking(order_id: &str, list: &NotificationList) -> Panel {
    let mut panel = Panel::new(tracking_title(order_id));
    if list.items.is_empty() {
        panel.push(PanelLine::muted("No notifications found for this order"));
        return panel;
    }

    let mut timeline: Vec<&Notification> = list.items.iter().collect();
    timeline.sort_by_key(|n| parse_timestamp(&n.created_at));

    let last = timeline.len() - 1;
    for (index, notification) in timeline.into_iter().enumerate() {
        let current = index == last;
        let (marker, tone) = if current {
            ("●", Tone::Success)
        } else {
            ("○", Tone::Muted)
        };
        panel.push(PanelLine::new(
            tone,
            format!(
                "{} {}  {}{}",
                marker,
                type_badge(&notification.kind_raw),
                format_local_time(&notification.created_at),
                if current { "  (current)" } else { "" }
            ),
        ));
        panel.push(PanelLine::plain(format!("│  {}", notification.message)));
        if let Some(line) = detail_line(notification) {
            panel.push(PanelLine::muted(format!("│{}", line.text)));
        }
    }
    panel
}

fn live_header(interval: Duration) -> Panel {
    Panel::new(LIVE_TITLE)
        .line(PanelLine::new(
            Tone::Success,
            format!(
                "📡 Dashboard active: updates every {}s",
                interval.as_secs().max(1)
            ),
        ))
        .line(PanelLine::blank())
}

/// Live dashboard before its first tick.
pub fn live_loading(interval: Duration) -> Panel {
    live_header(interval).line(PanelLine::muted("Loading notifications..."))
}

pub fn live_dashboard(
    list: &NotificationList,
    interval: Duration,
    limit: usize,
    now: DateTime<Utc>,
) -> Panel {
    let mut panel = live_header(interval);
    if list.items.is_empty() {
        panel.push(PanelLine::muted("No notifications found"));
        return panel;
    }

    for notification in list.items.iter().take(limit) {
        let age = seconds_since(&notification.created_at, now);
        let is_new = age.is_some_and(|secs| secs < NEW_BADGE_SECS);
        let age_text = age.map(age_label).unwrap_or_else(|| "unknown".to_string());

        panel.push(PanelLine::new(
            if is_new { Tone::Success } else { Tone::Normal },
            format!(
                "{}  Order #{}  {}{}",
                notification.kind_raw.to_uppercase(),
                notification.order_id,
                age_text,
                if is_new { "  NEW" } else { "" }
            ),
        ));
        panel.push(PanelLine::muted(format!("   {}", notification.message)));
    }
    panel
}
