//! Shared dashboard state: status cards, the result panel, the
//! notification filter, and alerts.

pub mod alerts;
pub mod app_state;
pub mod board;
pub mod filter;
pub mod panel;
pub mod view;

pub use alerts::{Alert, AlertCenter, AlertLevel};
pub use app_state::AppState;
pub use board::{Connectivity, ServiceCard, StatusBoard};
pub use filter::NotificationFilter;
pub use panel::{RenderMode, RequestTicket, ResultPanel};
pub use view::{Panel, PanelLine, Tone, ViewKind};
