use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `GET /estoque/listar`: product name to quantity on hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(pub BTreeMap<String, i64>);

impl Inventory {
    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total: self.0.len(),
            available: self.0.values().filter(|qty| **qty > 0).count(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Derived counts shown on the inventory status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total: usize,
    /// Products with a positive quantity.
    pub available: usize,
}

/// Badge shown next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    High,
    Low,
    Out,
}

impl StockLevel {
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity > 10 {
            StockLevel::High
        } else if quantity > 0 {
            StockLevel::Low
        } else {
            StockLevel::Out
        }
    }
}

/// Body of `POST /estoque/cadastrar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStockEntry {
    #[serde(rename = "produto")]
    pub product: String,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockReceipt {
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    #[serde(rename = "estoque", default)]
    pub inventory: Option<Inventory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_positive_quantities() {
        let inventory: Inventory = serde_json::from_str(r#"{"Frango":10,"Arroz":0}"#).unwrap();
        let summary = inventory.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.available, 1);
    }

    #[test]
    fn test_summary_empty_inventory() {
        let summary = Inventory::default().summary();
        assert_eq!(summary, InventorySummary { total: 0, available: 0 });
    }

    #[test]
    fn test_stock_level_thresholds() {
        assert_eq!(StockLevel::for_quantity(11), StockLevel::High);
        assert_eq!(StockLevel::for_quantity(10), StockLevel::Low);
        assert_eq!(StockLevel::for_quantity(1), StockLevel::Low);
        assert_eq!(StockLevel::for_quantity(0), StockLevel::Out);
        assert_eq!(StockLevel::for_quantity(-2), StockLevel::Out);
    }

    #[test]
    fn test_new_stock_entry_wire_names() {
        let entry = NewStockEntry {
            product: "Arroz".to_string(),
            quantity: 5,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"produto": "Arroz", "quantidade": 5}));
    }
}
