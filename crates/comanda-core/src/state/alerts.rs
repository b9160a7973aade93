use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
    pub raised_at: Instant,
}

/// Dismissible messages that expire after a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct AlertCenter {
    alerts: Vec<Alert>,
    ttl: Duration,
    next_id: u64,
}

impl AlertCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            alerts: Vec::new(),
            ttl,
            next_id: 1,
        }
    }

    pub fn push(&mut self, level: AlertLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            level,
            message: message.into(),
            raised_at: Instant::now(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    /// Drop expired alerts. Returns whether anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.alerts.len();
        let ttl = self.ttl;
        self.alerts
            .retain(|a| now.saturating_duration_since(a.raised_at) < ttl);
        self.alerts.len() != before
    }

    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Alert> {
        self.alerts
            .iter()
            .filter(move |a| now.saturating_duration_since(a.raised_at) < self.ttl)
    }

    /// Earliest moment an active alert expires.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.alerts.iter().map(|a| a.raised_at + self.ttl).min()
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }
}
