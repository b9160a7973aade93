//! Built-in fallback values for every optional config field.

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_HEALTH_SECS: u64 = 30;
pub const DEFAULT_NOTIFICATIONS_SECS: u64 = 5;
pub const DEFAULT_KITCHEN_TRIGGER_SECS: u64 = 10;
pub const DEFAULT_ACTIVE_ORDERS_SECS: u64 = 15;

pub const DEFAULT_LIVE_SECS: u64 = 3;
/// The live dashboard never outlives this cap.
pub const DEFAULT_LIVE_MAX_SECS: u64 = 300;
pub const DEFAULT_LIVE_LIMIT: usize = 10;

pub const DEFAULT_ALERT_SECS: u64 = 5;
