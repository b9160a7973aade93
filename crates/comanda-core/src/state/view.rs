use std::fmt;

use serde::Serialize;

/// Which command's output the result panel holds.
///
/// Set on every render and consulted by background refreshes, so no
/// component ever inspects rendered text to learn what is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "order_id", rename_all = "snake_case")]
pub enum ViewKind {
    Empty,
    StaffAvailability,
    Inventory,
    KitchenStatus,
    ActiveOrders,
    Orders,
    Notifications,
    NotificationSummary,
    OrderTracking(String),
    LiveDashboard,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Empty => f.write_str("empty"),
            ViewKind::StaffAvailability => f.write_str("staff_availability"),
            ViewKind::Inventory => f.write_str("inventory"),
            ViewKind::KitchenStatus => f.write_str("kitchen_status"),
            ViewKind::ActiveOrders => f.write_str("active_orders"),
            ViewKind::Orders => f.write_str("orders"),
            ViewKind::Notifications => f.write_str("notifications"),
            ViewKind::NotificationSummary => f.write_str("notification_summary"),
            ViewKind::OrderTracking(id) => write!(f, "order_tracking:{}", id),
            ViewKind::LiveDashboard => f.write_str("live_dashboard"),
        }
    }
}

/// Semantic colour of a panel line; the front-end maps it to a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Normal,
    Muted,
    Accent,
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelLine {
    pub tone: Tone,
    pub text: String,
}

impl PanelLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Normal, text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(Tone::Muted, text)
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

/// A titled block of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub title: String,
    pub lines: Vec<PanelLine>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: PanelLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn push(&mut self, line: PanelLine) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = PanelLine>) {
        self.lines.extend(lines);
    }

    /// Title and lines joined with newlines, without styling.
    pub fn plain_text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.text);
        }
        out
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.lines.iter().any(|l| l.text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_joins_lines() {
        let panel = Panel::new("📦 Current Inventory")
            .line(PanelLine::plain("Arroz"))
            .line(PanelLine::muted("0 units"));
        assert_eq!(panel.plain_text(), "📦 Current Inventory\nArroz\n0 units");
        assert!(panel.contains("0 units"));
        assert!(!panel.contains("Frango"));
    }

    #[test]
    fn test_view_kind_identity_includes_order_id() {
        assert_ne!(
            ViewKind::OrderTracking("PED1".to_string()),
            ViewKind::OrderTracking("PED2".to_string())
        );
        assert_eq!(
            ViewKind::OrderTracking("PED1".to_string()).to_string(),
            "order_tracking:PED1"
        );
    }
}
