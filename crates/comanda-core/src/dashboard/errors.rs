use crate::client::ApiError;
use crate::errors::ComandaError;

/// Failure of a user-initiated dashboard command.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Rejected locally; nothing was sent.
    #[error("{message}")]
    Validation { message: String },

    #[error("{context}: {source}")]
    Api {
        context: String,
        #[source]
        source: ApiError,
    },
}

impl ActionError {
    pub fn validation(message: impl Into<String>) -> Self {
        ActionError::Validation {
            message: message.into(),
        }
    }

    pub fn api(context: impl Into<String>, source: ApiError) -> Self {
        ActionError::Api {
            context: context.into(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation { .. })
    }
}

impl ComandaError for ActionError {
    fn error_code(&self) -> &'static str {
        match self {
            ActionError::Validation { .. } => "ACTION_VALIDATION_FAILED",
            ActionError::Api { source, .. } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ActionError::Validation { .. } => true,
            ActionError::Api { source, .. } => source.is_user_error(),
        }
    }
}
