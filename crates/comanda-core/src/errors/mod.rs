use std::error::Error;

/// Base trait for all application errors
pub trait ComandaError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type ComandaResult<T> = Result<T, Box<dyn ComandaError>>;

impl ComandaError for comanda_config::ConfigError {
    fn error_code(&self) -> &'static str {
        comanda_config::ConfigError::error_code(self)
    }

    fn is_user_error(&self) -> bool {
        comanda_config::ConfigError::is_user_error(self)
    }
}
