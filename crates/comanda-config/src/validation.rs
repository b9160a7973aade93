//! Configuration validation logic.

use crate::errors::ConfigError;
use crate::types::ComandaConfig;

/// Upper bound for the live dashboard list length.
pub const MAX_LIVE_LIMIT: usize = 100;

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            field: field.to_string(),
            url: url.to_string(),
        })
    }
}

fn non_zero(field: &str, value: Option<u64>) -> Result<(), ConfigError> {
    if value == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("{} must be greater than zero", field),
        });
    }
    Ok(())
}

/// Validate a ComandaConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Gateway and per-service URLs must be http(s)
/// - Every interval and timeout must be non-zero
/// - The live dashboard cap must exceed its tick
/// - The live list length must be within `1..=100`
pub fn validate_config(config: &ComandaConfig) -> Result<(), ConfigError> {
    validate_url("gateway.base_url", config.gateway.base_url())?;
    for (key, url) in config.services.iter() {
        validate_url(&format!("services.{}", key), url)?;
    }

    non_zero("gateway.timeout_secs", config.gateway.timeout_secs)?;
    non_zero("refresh.health_secs", config.refresh.health_secs)?;
    non_zero("refresh.notifications_secs", config.refresh.notifications_secs)?;
    non_zero(
        "refresh.kitchen_trigger_secs",
        config.refresh.kitchen_trigger_secs,
    )?;
    non_zero("refresh.active_orders_secs", config.refresh.active_orders_secs)?;
    non_zero("refresh.live_secs", config.refresh.live_secs)?;
    non_zero("refresh.live_max_secs", config.refresh.live_max_secs)?;
    non_zero("ui.alert_secs", config.ui.alert_secs)?;

    if config.refresh.live_max_duration() <= config.refresh.live_interval() {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh.live_max_secs must be greater than refresh.live_secs".to_string(),
        });
    }

    let limit = config.refresh.live_limit();
    if limit == 0 || limit > MAX_LIVE_LIMIT {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "refresh.live_limit must be between 1 and {}, got {}",
                MAX_LIVE_LIMIT, limit
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ComandaConfig::default()).is_ok());
    }

    #[test]
    fn test_gateway_url_without_scheme_rejected() {
        let mut config = ComandaConfig::default();
        config.gateway.base_url = Some("localhost:8080".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_service_override_url_validated() {
        let mut config = ComandaConfig::default();
        config.services.orders = Some("ftp://orders".to_string());
        match validate_config(&config) {
            Err(ConfigError::InvalidUrl { field, .. }) => assert_eq!(field, "services.orders"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = ComandaConfig::default();
        config.refresh.health_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_live_cap_must_exceed_tick() {
        let mut config = ComandaConfig::default();
        config.refresh.live_secs = Some(10);
        config.refresh.live_max_secs = Some(10);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_live_limit_bounds() {
        let mut config = ComandaConfig::default();
        config.refresh.live_limit = Some(0);
        assert!(validate_config(&config).is_err());

        config.refresh.live_limit = Some(MAX_LIVE_LIMIT + 1);
        assert!(validate_config(&config).is_err());

        config.refresh.live_limit = Some(MAX_LIVE_LIMIT);
        assert!(validate_config(&config).is_ok());
    }
}
