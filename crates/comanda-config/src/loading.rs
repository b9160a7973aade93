//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.comanda/config.toml` (or `$COMANDA_HOME/config.toml`)
//! 3. **Project config** - `./.comanda/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the binary)

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::ConfigError;
use crate::paths::ComandaPaths;
use crate::types::{ComandaConfig, GatewayConfig, RefreshConfig, ServiceOverrides, UiConfig};
use crate::validation::validate_config;

fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
}

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if the merged
/// configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ComandaConfig, ConfigError> {
    let paths = ComandaPaths::resolve()?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Same as [`load_hierarchy`] with explicit locations.
pub fn load_hierarchy_from(
    paths: &ComandaPaths,
    project_root: &Path,
) -> Result<ComandaConfig, ConfigError> {
    let mut config = ComandaConfig::default();

    for path in [
        paths.user_config(),
        ComandaPaths::project_config(project_root),
    ] {
        match load_config_file(&path) {
            Ok(file_config) => {
                debug!(event = "config.load.file_applied", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(e) if is_file_not_found(&e) => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<ComandaConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with `override_config` taking precedence for
/// every field it sets explicitly.
pub fn merge_configs(base: ComandaConfig, override_config: ComandaConfig) -> ComandaConfig {
    ComandaConfig {
        gateway: GatewayConfig::merge(&base.gateway, &override_config.gateway),
        services: ServiceOverrides::merge(&base.services, &override_config.services),
        refresh: RefreshConfig::merge(&base.refresh, &override_config.refresh),
        ui: UiConfig::merge(&base.ui, &override_config.ui),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_config_hierarchy_integration() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ComandaPaths::from_dir(temp.path().join("user"));
        let project_root = temp.path().join("project");

        write(
            &paths.user_config(),
            r#"
[gateway]
base_url = "http://gateway.local:9000"
timeout_secs = 3

[refresh]
health_secs = 60
"#,
        );
        write(
            &ComandaPaths::project_config(&project_root),
            r#"
[gateway]
base_url = "http://localhost:8080"

[services]
kitchen = "http://localhost:8083"
"#,
        );

        let config = load_hierarchy_from(&paths, &project_root).unwrap();
        assert_eq!(config.gateway.base_url(), "http://localhost:8080"); // project
        assert_eq!(config.gateway.timeout(), Duration::from_secs(3)); // user
        assert_eq!(config.refresh.health_interval(), Duration::from_secs(60)); // user
        assert_eq!(config.services.get("kitchen"), Some("http://localhost:8083"));
        assert_eq!(
            config.refresh.notifications_interval(),
            Duration::from_secs(5)
        ); // default
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ComandaPaths::from_dir(temp.path().join("nowhere"));
        let config = load_hierarchy_from(&paths, temp.path()).unwrap();
        assert_eq!(config.gateway.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ComandaPaths::from_dir(temp.path().to_path_buf());
        write(&paths.user_config(), "invalid toml [[[");

        let result = load_hierarchy_from(&paths, temp.path());
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ComandaPaths::from_dir(temp.path().to_path_buf());
        write(
            &paths.user_config(),
            r#"
[refresh]
notifications_secs = 0
"#,
        );

        let result = load_hierarchy_from(&paths, temp.path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty: ComandaConfig = toml::from_str("").unwrap();
        assert_eq!(empty.gateway.base_url(), "http://localhost:8080");

        let partial: ComandaConfig = toml::from_str(
            r#"
[ui]
alert_secs = 8
"#,
        )
        .unwrap();
        assert_eq!(partial.ui.alert_duration(), Duration::from_secs(8));
        assert_eq!(partial.refresh.live_limit(), 10);

        let invalid: Result<ComandaConfig, _> = toml::from_str("[refresh]\nhealth_secs = \"x\"");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let base: ComandaConfig = toml::from_str(
            r#"
[refresh]
live_secs = 2
live_max_secs = 120
"#,
        )
        .unwrap();
        let over: ComandaConfig = toml::from_str(
            r#"
[refresh]
live_max_secs = 60
"#,
        )
        .unwrap();

        let merged = merge_configs(base, over);
        assert_eq!(merged.refresh.live_interval(), Duration::from_secs(2));
        assert_eq!(merged.refresh.live_max_duration(), Duration::from_secs(60));
    }
}
