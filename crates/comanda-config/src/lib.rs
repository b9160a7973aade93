//! # comanda-config
//!
//! TOML configuration types, loading, and validation for comanda.
//!
//! Single source of truth for the gateway address, per-service overrides,
//! scheduler intervals, and front-end settings.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod paths;
pub mod types;

// Public API re-exports
pub use defaults::{
    DEFAULT_ALERT_SECS, DEFAULT_GATEWAY_URL, DEFAULT_LIVE_LIMIT, DEFAULT_LIVE_MAX_SECS,
};
pub use errors::ConfigError;
pub use loading::{load_config_file, load_hierarchy, load_hierarchy_from, merge_configs};
pub use paths::ComandaPaths;
pub use types::{ComandaConfig, GatewayConfig, RefreshConfig, ServiceOverrides, UiConfig};
pub use validation::{MAX_LIVE_LIMIT, validate_config};

impl ComandaConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
