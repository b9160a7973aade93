use serde::Serialize;

use crate::models::{NotificationQuery, NotificationType};

/// Process-wide notification filter shared by manual filtering and the
/// background notifications refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationFilter {
    pub kind: Option<NotificationType>,
    pub order_id: Option<String>,
}

impl NotificationFilter {
    /// Blank or whitespace-only order ids mean "any order".
    pub fn new(kind: Option<NotificationType>, order_id: Option<&str>) -> Self {
        Self {
            kind,
            order_id: order_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.order_id.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_query(&self) -> NotificationQuery {
        NotificationQuery {
            kind: self.kind,
            order_id: self.order_id.clone(),
            limit: None,
        }
    }

    /// One-line description for the notifications view header.
    pub fn describe(&self) -> String {
        match (&self.kind, &self.order_id) {
            (None, None) => "Filter: all types, all orders".to_string(),
            (Some(kind), None) => format!("Filter: {} {}", kind.icon(), kind.label()),
            (None, Some(id)) => format!("Filter: order #{}", id),
            (Some(kind), Some(id)) => {
                format!("Filter: {} {}, order #{}", kind.icon(), kind.label(), id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_order_id_is_no_filter() {
        let filter = NotificationFilter::new(None, Some("   "));
        assert!(filter.is_empty());
        assert!(filter.to_query().params().is_empty());
    }

    #[test]
    fn test_filter_becomes_query() {
        let filter = NotificationFilter::new(Some(NotificationType::OrderRefused), Some(" PED9 "));
        assert_eq!(
            filter.to_query().params(),
            vec![
                ("tipo", "pedido_recusado".to_string()),
                ("pedido_id", "PED9".to_string())
            ]
        );
        assert_eq!(filter.describe(), "Filter: ❌ Orders refused, order #PED9");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = NotificationFilter::new(Some(NotificationType::System), Some("A"));
        filter.clear();
        assert_eq!(filter, NotificationFilter::default());
        assert_eq!(filter.describe(), "Filter: all types, all orders");
    }
}
