//! Status card text written by the data loaders.

use crate::models::InventorySummary;

pub fn staff_card(employee_count: usize) -> (String, String) {
    (
        format!("{} employees registered", employee_count),
        "Authentication system active".to_string(),
    )
}

pub fn inventory_card(summary: InventorySummary) -> (String, String) {
    (
        format!("{} items in stock", summary.total),
        format!("{} items available", summary.available),
    )
}

pub fn notifications_card(total: u64) -> (String, String) {
    (
        format!("{} notifications", total),
        "Alert system active".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_card_text() {
        let (headline, detail) = inventory_card(InventorySummary {
            total: 2,
            available: 1,
        });
        assert_eq!(headline, "2 items in stock");
        assert_eq!(detail, "1 items available");
    }
}
