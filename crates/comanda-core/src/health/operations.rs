use chrono::Utc;
use futures::future::join_all;
use tracing::{info, warn};

use crate::client::RestaurantBackend;
use crate::health::types::{HealthReport, ServiceStatus};
use crate::registry::ServiceKind;

/// Probe one collaborator. Failures become an offline status, never an error.
pub async fn check_health(backend: &dyn RestaurantBackend, kind: ServiceKind) -> ServiceStatus {
    match backend.health(kind).await {
        Ok(payload) => {
            info!(
                event = "core.health.check_completed",
                service = kind.key(),
                online = true
            );
            ServiceStatus::online(kind, payload, Utc::now())
        }
        Err(e) => {
            warn!(
                event = "core.health.check_failed",
                service = kind.key(),
                error = %e
            );
            ServiceStatus::offline(kind, e.to_string(), Utc::now())
        }
    }
}

/// Probe all five collaborators concurrently and wait for every result.
pub async fn check_all(backend: &dyn RestaurantBackend) -> HealthReport {
    let statuses = join_all(
        ServiceKind::ALL
            .into_iter()
            .map(|kind| check_health(backend, kind)),
    )
    .await;

    let report = HealthReport { statuses };
    info!(
        event = "core.health.check_all_completed",
        online = report.online_count(),
        total = report.total(),
        "{}",
        report.summary_line()
    );
    report
}
