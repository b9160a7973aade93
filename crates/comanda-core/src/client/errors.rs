use crate::errors::ComandaError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status}: {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Failed to build HTTP client: {message}")]
    Client { message: String },
}

impl ApiError {
    pub fn is_offline(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl ComandaError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "API_NETWORK_ERROR",
            ApiError::Status { .. } => "API_STATUS_ERROR",
            ApiError::Decode { .. } => "API_DECODE_ERROR",
            ApiError::Client { .. } => "API_CLIENT_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        // 4xx means the request itself was rejected.
        matches!(self, ApiError::Status { status, .. } if (400..500).contains(status))
    }
}
