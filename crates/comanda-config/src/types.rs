//! Configuration type definitions for comanda.
//!
//! These types are deserialized from TOML config files. Every field is
//! `Option<T>` so the config hierarchy can merge only explicitly-set values;
//! accessor methods resolve the built-in defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [gateway]
//! base_url = "http://localhost:8080"
//! timeout_secs = 10
//!
//! [services]
//! kitchen = "http://localhost:8083"
//!
//! [refresh]
//! notifications_secs = 5
//! live_max_secs = 300
//!
//! [ui]
//! alert_secs = 5
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::defaults::*;

/// Main configuration loaded from TOML config files.
///
/// Loaded from `~/.comanda/config.toml` then `./.comanda/config.toml`;
/// project values override user values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComandaConfig {
    /// API gateway all collaborators are reached through.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Per-service base URL overrides that bypass the gateway.
    #[serde(default)]
    pub services: ServiceOverrides,
    /// Polling intervals for the refresh scheduler.
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Terminal front-end settings.
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Default: `http://localhost:8080`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Per-request timeout. Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl GatewayConfig {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_GATEWAY_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            base_url: override_config
                .base_url
                .clone()
                .or_else(|| base.base_url.clone()),
            timeout_secs: override_config.timeout_secs.or(base.timeout_secs),
        }
    }
}

/// Full base URLs for individual services, e.g. when a service runs outside
/// the gateway during development.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<String>,
}

impl ServiceOverrides {
    /// Iterate `(service key, url)` pairs that are set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("staff", self.staff.as_deref()),
            ("inventory", self.inventory.as_deref()),
            ("kitchen", self.kitchen.as_deref()),
            ("orders", self.orders.as_deref()),
            ("notifications", self.notifications.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, url)| url.map(|u| (key, u)))
    }

    /// Look up an override by service key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, url)| url)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            staff: override_config.staff.clone().or_else(|| base.staff.clone()),
            inventory: override_config
                .inventory
                .clone()
                .or_else(|| base.inventory.clone()),
            kitchen: override_config
                .kitchen
                .clone()
                .or_else(|| base.kitchen.clone()),
            orders: override_config
                .orders
                .clone()
                .or_else(|| base.orders.clone()),
            notifications: override_config
                .notifications
                .clone()
                .or_else(|| base.notifications.clone()),
        }
    }
}

/// Scheduler intervals, all in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchen_trigger_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_orders_secs: Option<u64>,
    /// Live dashboard tick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_secs: Option<u64>,
    /// Live dashboard lifetime cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_max_secs: Option<u64>,
    /// Number of notifications shown by the live dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_limit: Option<usize>,
}

impl RefreshConfig {
    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_secs.unwrap_or(DEFAULT_HEALTH_SECS))
    }

    pub fn notifications_interval(&self) -> Duration {
        Duration::from_secs(
            self.notifications_secs
                .unwrap_or(DEFAULT_NOTIFICATIONS_SECS),
        )
    }

    pub fn kitchen_trigger_interval(&self) -> Duration {
        Duration::from_secs(
            self.kitchen_trigger_secs
                .unwrap_or(DEFAULT_KITCHEN_TRIGGER_SECS),
        )
    }

    pub fn active_orders_interval(&self) -> Duration {
        Duration::from_secs(
            self.active_orders_secs
                .unwrap_or(DEFAULT_ACTIVE_ORDERS_SECS),
        )
    }

    pub fn live_interval(&self) -> Duration {
        Duration::from_secs(self.live_secs.unwrap_or(DEFAULT_LIVE_SECS))
    }

    pub fn live_max_duration(&self) -> Duration {
        Duration::from_secs(self.live_max_secs.unwrap_or(DEFAULT_LIVE_MAX_SECS))
    }

    pub fn live_limit(&self) -> usize {
        self.live_limit.unwrap_or(DEFAULT_LIVE_LIMIT)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            health_secs: override_config.health_secs.or(base.health_secs),
            notifications_secs: override_config
                .notifications_secs
                .or(base.notifications_secs),
            kitchen_trigger_secs: override_config
                .kitchen_trigger_secs
                .or(base.kitchen_trigger_secs),
            active_orders_secs: override_config
                .active_orders_secs
                .or(base.active_orders_secs),
            live_secs: override_config.live_secs.or(base.live_secs),
            live_max_secs: override_config.live_max_secs.or(base.live_max_secs),
            live_limit: override_config.live_limit.or(base.live_limit),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long an alert stays visible. Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_secs: Option<u64>,
}

impl UiConfig {
    pub fn alert_duration(&self) -> Duration {
        Duration::from_secs(self.alert_secs.unwrap_or(DEFAULT_ALERT_SECS))
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            alert_secs: override_config.alert_secs.or(base.alert_secs),
        }
    }
}
