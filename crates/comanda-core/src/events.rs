use tracing::{error, info, warn};

use crate::errors::ComandaError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_completed");
}

/// User errors log at warn; everything else at error.
pub fn log_app_error<E: ComandaError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = false
        );
    }
}
