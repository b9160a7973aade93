//! Pure renderers from service payloads to text panels.

pub mod cards;
pub mod inventory;
pub mod kitchen;
pub mod notifications;
pub mod orders;
pub mod staff;

pub use inventory::inventory;
pub use kitchen::{active_orders, kitchen_status};
pub use notifications::{
    live_dashboard, live_loading, notification_summary, notifications, order_tracking,
};
pub use orders::orders;
pub use staff::staff_availability;
