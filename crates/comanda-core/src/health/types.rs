use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::HealthPayload;
use crate::registry::ServiceKind;

/// Outcome of one `/health` probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStatus {
    pub kind: ServiceKind,
    pub online: bool,
    pub payload: Option<HealthPayload>,
    pub error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl ServiceStatus {
    pub fn online(kind: ServiceKind, payload: HealthPayload, checked_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            online: true,
            payload: Some(payload),
            error: None,
            checked_at,
        }
    }

    pub fn offline(kind: ServiceKind, error: String, checked_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            online: false,
            payload: None,
            error: Some(error),
            checked_at,
        }
    }

    /// `<service> - <message>` for a healthy payload that carries a `status`.
    ///
    /// Healthy payloads without `status` leave the card text alone, so this
    /// returns `None` for them.
    pub fn online_detail(&self) -> Option<String> {
        let payload = self.payload.as_ref().filter(|_| self.online)?;
        payload.status.as_ref()?;
        Some(format!(
            "{} - {}",
            payload
                .service
                .as_deref()
                .unwrap_or(self.kind.display_name()),
            payload.message.as_deref().unwrap_or("Operational")
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub statuses: Vec<ServiceStatus>,
}

impl HealthReport {
    pub fn online_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.online).count()
    }

    pub fn total(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_online(&self, kind: ServiceKind) -> bool {
        self.statuses.iter().any(|s| s.kind == kind && s.online)
    }

    pub fn status(&self, kind: ServiceKind) -> Option<&ServiceStatus> {
        self.statuses.iter().find(|s| s.kind == kind)
    }

    /// `3/5 services online`
    pub fn summary_line(&self) -> String {
        format!("{}/{} services online", self.online_count(), self.total())
    }
}
