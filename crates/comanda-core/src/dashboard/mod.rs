//! The dashboard controller: every user command and background load goes
//! through here, mutating [`AppState`] and signalling the front-end.

pub mod actions;
pub mod errors;
pub mod health;
pub mod loaders;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};
use tracing::debug;

use comanda_config::ComandaConfig;

use crate::client::RestaurantBackend;
use crate::state::{AlertLevel, AppState, Panel, RequestTicket};

pub use actions::{EmployeeForm, OrderForm, OrderItemInput, StockForm, generate_order_id};
pub use errors::ActionError;
pub use views::tracking_query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub alert_ttl: Duration,
    pub live_interval: Duration,
    pub live_limit: usize,
}

impl DashboardSettings {
    pub fn from_config(config: &ComandaConfig) -> Self {
        Self {
            alert_ttl: config.ui.alert_duration(),
            live_interval: config.refresh.live_interval(),
            live_limit: config.refresh.live_limit(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self::from_config(&ComandaConfig::default())
    }
}

/// Cheap to clone; clones share state and backend.
#[derive(Clone)]
pub struct Dashboard {
    backend: Arc<dyn RestaurantBackend>,
    state: Arc<RwLock<AppState>>,
    changed: Arc<Notify>,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn RestaurantBackend>, settings: DashboardSettings) -> Self {
        Self {
            backend,
            state: Arc::new(RwLock::new(AppState::new(settings.alert_ttl))),
            changed: Arc::new(Notify::new()),
            settings,
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn backend(&self) -> &dyn RestaurantBackend {
        self.backend.as_ref()
    }

    /// Signalled after every state mutation.
    pub fn changed(&self) -> Arc<Notify> {
        Arc::clone(&self.changed)
    }

    /// Copy of the current state, taken under the read lock.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Run `f` under the write lock, then wake the front-end.
    ///
    /// `f` is synchronous, so the lock can never be held across a network
    /// await.
    pub async fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = {
            let mut state = self.state.write().await;
            f(&mut state)
        };
        self.changed.notify_one();
        result
    }

    pub async fn alert(&self, level: AlertLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        self.update(move |s| s.alert(level, message)).await
    }

    pub async fn dismiss_alert(&self, id: u64) -> bool {
        self.update(|s| s.alerts.dismiss(id)).await
    }

    /// Drop expired alerts. Only signals when something changed.
    pub async fn prune_alerts(&self) -> bool {
        let now = tokio::time::Instant::now();
        let pruned = self.state.write().await.alerts.prune(now);
        if pruned {
            self.changed.notify_one();
        }
        pruned
    }

    /// Consume the pending focus flag. Does not signal, so a front-end can
    /// call it while repainting.
    pub async fn take_focus(&self) -> bool {
        self.state.write().await.panel.take_focus()
    }

    /// Surface a user-facing failure as an alert and hand it back.
    async fn fail<T>(&self, error: ActionError) -> Result<T, ActionError> {
        let level = if error.is_validation() {
            AlertLevel::Warning
        } else {
            AlertLevel::Danger
        };
        self.alert(level, error.to_string()).await;
        Err(error)
    }

    async fn commit(&self, ticket: RequestTicket, panel: Panel) -> bool {
        let view = ticket.view().clone();
        let mode = ticket.mode();
        let accepted = self.update(move |s| s.panel.commit(ticket, panel)).await;
        if !accepted {
            debug!(
                event = "core.panel.stale_discarded",
                view = %view,
                mode = ?mode
            );
        }
        accepted
    }
}
