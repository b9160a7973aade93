pub mod operations;
pub mod types;

pub use operations::{check_all, check_health};
pub use types::{HealthReport, ServiceStatus};
