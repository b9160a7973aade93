//! Wire types consumed from the backend collaborators.
//!
//! Field names follow the services' JSON (mostly Portuguese); Rust-side
//! names are English and mapped with `#[serde(rename)]`.

pub mod health;
pub mod inventory;
pub mod kitchen;
pub mod notifications;
pub mod orders;
pub mod staff;
pub mod time;

pub use health::HealthPayload;
pub use inventory::{Inventory, InventorySummary, NewStockEntry, StockLevel, StockReceipt};
pub use kitchen::{ActiveOrder, ActiveOrders, KitchenStatus, PrepareOutcome, PrepareReply};
pub use notifications::{
    Notification, NotificationDetails, NotificationList, NotificationQuery, NotificationSummary,
    NotificationType,
};
pub use orders::{NewOrder, Order, OrderItem, OrderReceipt};
pub use staff::{ActiveEmployee, Employee, NewEmployee, StaffAvailability};

/// Order ids arrive as strings from most services and as numbers from some.
pub(crate) mod lenient_id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Int(n) => n.to_string(),
            Raw::Float(n) => n.to_string(),
        })
    }
}
