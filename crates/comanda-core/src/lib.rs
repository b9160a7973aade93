//! comanda-core: Core library for the restaurant management dashboard
//!
//! This library polls the five restaurant services (staff, inventory,
//! kitchen, orders, notifications) through the API gateway, renders their
//! data into text panels, and keeps the dashboard fresh on a schedule. It is
//! used by the `comanda` CLI.
//!
//! # Main Entry Points
//!
//! - [`dashboard`] - User commands, background loaders, and shared state
//! - [`scheduler`] - Periodic refresh tasks and the live notifications view
//! - [`client`] - HTTP access to the services
//! - [`views`] - Pure renderers from payloads to panels

pub mod client;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod health;
pub mod logging;
pub mod models;
pub mod registry;
pub mod scheduler;
pub mod state;
pub mod views;

pub use client::{ApiError, GatewayClient, RestaurantBackend};
pub use dashboard::{
    ActionError, Dashboard, DashboardSettings, EmployeeForm, OrderForm, OrderItemInput, StockForm,
    generate_order_id, tracking_query,
};
pub use errors::{ComandaError, ComandaResult};
pub use health::{HealthReport, ServiceStatus};
pub use registry::{ServiceEndpoint, ServiceKind, ServiceRegistry};
pub use scheduler::{LiveDashboard, LiveState, RefreshIntervals, Scheduler};
pub use state::{AlertLevel, AppState, Panel, PanelLine, Tone, ViewKind};

// Re-export config types from comanda-config
pub use comanda_config::{
    ComandaConfig, ConfigError, GatewayConfig, RefreshConfig, ServiceOverrides, UiConfig,
};

// Re-export logging initialization
pub use logging::init_logging;
