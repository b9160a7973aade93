#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid URL '{url}' for {field}: must start with http:// or https://")]
    InvalidUrl { field: String, url: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("home directory not found; set $HOME or $COMANDA_HOME")]
    HomeNotFound,

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidUrl { .. } => "CONFIG_INVALID_URL",
            ConfigError::InvalidConfiguration { .. } => "CONFIG_INVALID",
            ConfigError::HomeNotFound => "CONFIG_HOME_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    /// Config mistakes are fixable by the user; IO failures are not.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::IoError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ConfigError::ConfigParseError {
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file: invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_url_display() {
        let error = ConfigError::InvalidUrl {
            field: "gateway.base_url".to_string(),
            url: "localhost:8080".to_string(),
        };
        assert!(error.to_string().contains("gateway.base_url"));
        assert!(error.to_string().contains("localhost:8080"));
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ConfigError = io_err.into();
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
