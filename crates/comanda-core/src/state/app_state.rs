use std::time::Duration;

use crate::state::alerts::{AlertCenter, AlertLevel};
use crate::state::board::StatusBoard;
use crate::state::filter::NotificationFilter;
use crate::state::panel::ResultPanel;

/// Everything the front-end draws, shared between user commands and the
/// scheduler's tasks.
///
/// Lives behind a `tokio::sync::RwLock`; callers copy what they need out and
/// release the lock before any network await.
#[derive(Debug, Clone)]
pub struct AppState {
    pub board: StatusBoard,
    pub panel: ResultPanel,
    pub filter: NotificationFilter,
    pub alerts: AlertCenter,
    /// Whether a live dashboard session is currently running.
    pub live_running: bool,
}

impl AppState {
    pub fn new(alert_ttl: Duration) -> Self {
        Self {
            board: StatusBoard::default(),
            panel: ResultPanel::default(),
            filter: NotificationFilter::default(),
            alerts: AlertCenter::new(alert_ttl),
            live_running: false,
        }
    }

    pub fn alert(&mut self, level: AlertLevel, message: impl Into<String>) -> u64 {
        self.alerts.push(level, message)
    }
}
