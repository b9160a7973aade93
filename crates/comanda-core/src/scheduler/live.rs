//! The opt-in, self-terminating live notifications dashboard.
//!
//! `Stopped -> Running` on start; `Running -> Stopped` on explicit stop,
//! on reaching the maximum duration, or on scheduler shutdown. The session
//! slot is the only liveness probe: a slot holding a session means running.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::dashboard::Dashboard;
use crate::state::AlertLevel;

struct LiveSession {
    id: u64,
    token: CancellationToken,
    handle: JoinHandle<()>,
    started_at: Instant,
}

impl LiveSession {
    async fn finish(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            warn!(event = "core.live.join_failed", session = self.id, error = %e);
        }
    }
}

/// Snapshot of the live dashboard for front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveState {
    Stopped,
    Running { started_at: Instant },
}

/// `5 minutes`, `90 seconds`.
fn describe(duration: Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        60 => "1 minute".to_string(),
        s if s % 60 == 0 => format!("{} minutes", s / 60),
        s => format!("{} seconds", s),
    }
}

#[derive(Clone)]
pub struct LiveDashboard {
    dashboard: Dashboard,
    interval: Duration,
    max_duration: Duration,
    parent: CancellationToken,
    slot: Arc<Mutex<Option<LiveSession>>>,
    next_id: Arc<AtomicU64>,
}

impl LiveDashboard {
    pub fn new(
        dashboard: Dashboard,
        interval: Duration,
        max_duration: Duration,
        parent: CancellationToken,
    ) -> Self {
        Self {
            dashboard,
            interval,
            max_duration,
            parent,
            slot: Arc::new(Mutex::new(None)),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub async fn state(&self) -> LiveState {
        match self.slot.lock().await.as_ref() {
            Some(session) => LiveState::Running {
                started_at: session.started_at,
            },
            None => LiveState::Stopped,
        }
    }

    pub async fn is_running(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Show the live view and start ticking. A running session is replaced.
    pub async fn start(&self) {
        let previous = self.slot.lock().await.take();
        if let Some(previous) = previous {
            info!(event = "core.live.session_replaced", session = previous.id);
            previous.finish().await;
        }

        self.dashboard.show_live_loading().await;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = self.parent.child_token();
        let handle = tokio::spawn(run_session(
            self.clone(),
            id,
            token.clone(),
        ));
        let session = LiveSession {
            id,
            token,
            handle,
            started_at: Instant::now(),
        };

        let raced = self.slot.lock().await.replace(session);
        if let Some(raced) = raced {
            raced.token.cancel();
        }
        self.dashboard.update(|s| s.live_running = true).await;

        info!(
            event = "core.live.started",
            session = id,
            interval_ms = self.interval.as_millis() as u64,
            max_ms = self.max_duration.as_millis() as u64
        );
    }

    /// Stop the running session. Returns `false` (and raises nothing) when
    /// already stopped.
    pub async fn stop(&self) -> bool {
        let Some(session) = self.slot.lock().await.take() else {
            return false;
        };

        let id = session.id;
        session.finish().await;
        self.dashboard
            .update(|s| {
                s.live_running = false;
                s.alert(AlertLevel::Info, "Live dashboard paused");
            })
            .await;
        info!(event = "core.live.stopped", session = id);
        true
    }

    /// Tear down without an alert; used by scheduler shutdown.
    pub(crate) async fn shutdown(&self) {
        let session = self.slot.lock().await.take();
        if let Some(session) = session {
            session.finish().await;
            self.dashboard.update(|s| s.live_running = false).await;
        }
    }

    /// Called by a session task that reached its maximum duration.
    async fn expire(&self, id: u64) {
        let mut slot = self.slot.lock().await;
        if !slot.as_ref().is_some_and(|s| s.id == id) {
            return;
        }
        // The task is finishing on its own; detach its handle.
        slot.take();
        drop(slot);

        let message = format!(
            "Live dashboard paused after {}",
            describe(self.max_duration)
        );
        self.dashboard
            .update(|s| {
                s.live_running = false;
                s.alert(AlertLevel::Info, message);
            })
            .await;
        info!(event = "core.live.expired", session = id);
    }
}

async fn run_session(live: LiveDashboard, id: u64, token: CancellationToken) {
    let start = Instant::now();
    let mut ticks = interval_at(start + live.interval, live.interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let deadline = sleep_until(start + live.max_duration);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            _ = &mut deadline => break,
            _ = ticks.tick() => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return,
                    _ = &mut deadline => break,
                    drawn = live.dashboard.live_tick() => {
                        debug!(event = "core.live.tick_completed", session = id, drawn = drawn);
                    }
                }
            }
        }
    }

    live.expire(id).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FakeBackend, notification};
    use crate::dashboard::testing::dashboard_with;
    use crate::state::ViewKind;
    use tokio::time::sleep;

    const LIVE_CALL: &str = "notifications limit=10";

    fn live_fixture() -> (LiveDashboard, Dashboard, Arc<FakeBackend>) {
        let fake = FakeBackend::all_online();
        fake.notifications
            .lock()
            .unwrap()
            .push(notification("PED1", "pedido_criado", "2025-03-01T10:00:00Z"));
        let (dashboard, fake) = dashboard_with(fake);
        let live = LiveDashboard::new(
            dashboard.clone(),
            Duration::from_secs(3),
            Duration::from_secs(300),
            CancellationToken::new(),
        );
        (live, dashboard, fake)
    }

    fn live_calls(fake: &FakeBackend) -> usize {
        fake.calls().iter().filter(|c| *c == LIVE_CALL).count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_shows_loading_then_ticks() {
        let (live, dashboard, fake) = live_fixture();
        live.start().await;

        let state = dashboard.snapshot().await;
        assert!(state.panel.is_showing(&ViewKind::LiveDashboard));
        assert!(state.panel.panel().contains("Loading notifications..."));
        assert!(state.live_running);
        assert_eq!(live_calls(&fake), 0);

        sleep(Duration::from_millis(3_100)).await;
        assert_eq!(live_calls(&fake), 1);
        let state = dashboard.snapshot().await;
        assert!(state.panel.panel().contains("Order #PED1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_stop_halts_ticks() {
        let (live, dashboard, fake) = live_fixture();
        live.start().await;
        sleep(Duration::from_millis(6_100)).await;
        assert_eq!(live_calls(&fake), 2);

        assert!(live.stop().await);
        assert!(!live.is_running().await);
        sleep(Duration::from_secs(30)).await;
        assert_eq!(live_calls(&fake), 2);

        let state = dashboard.snapshot().await;
        assert!(!state.live_running);
        assert_eq!(state.alerts.all().len(), 1);
        assert_eq!(state.alerts.all()[0].message, "Live dashboard paused");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_when_stopped_is_silent() {
        let (live, dashboard, _) = live_fixture();
        assert!(!live.stop().await);
        assert!(dashboard.snapshot().await.alerts.all().is_empty());
        assert_eq!(live.state().await, LiveState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_self_terminates_after_max_duration() {
        let (live, dashboard, fake) = live_fixture();
        live.start().await;

        sleep(Duration::from_millis(299_900)).await;
        assert!(live.is_running().await);

        sleep(Duration::from_millis(200)).await;
        assert!(!live.is_running().await);
        // Ticks at 3s, 6s, ... 297s; the 300s tick loses to the deadline.
        assert_eq!(live_calls(&fake), 99);

        let state = dashboard.snapshot().await;
        assert!(!state.live_running);
        assert_eq!(
            state.alerts.all()[0].message,
            "Live dashboard paused after 5 minutes"
        );

        sleep(Duration::from_secs(60)).await;
        assert_eq!(live_calls(&fake), 99);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigating_away_skips_render_but_keeps_running() {
        let (live, dashboard, fake) = live_fixture();
        live.start().await;
        sleep(Duration::from_millis(3_100)).await;
        assert_eq!(live_calls(&fake), 1);

        dashboard.show_orders().await.unwrap();
        sleep(Duration::from_secs(9)).await;
        assert_eq!(live_calls(&fake), 1);
        assert!(live.is_running().await);
        assert!(
            dashboard
                .snapshot()
                .await
                .panel
                .is_showing(&ViewKind::Orders)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_session() {
        let (live, _, fake) = live_fixture();
        live.start().await;
        sleep(Duration::from_secs(2)).await;
        live.start().await;

        // Old session would have ticked at 3s; the new one ticks at 5s.
        sleep(Duration::from_millis(1_500)).await;
        assert_eq!(live_calls(&fake), 0);
        sleep(Duration::from_secs(2)).await;
        assert_eq!(live_calls(&fake), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_cancellation_ends_session() {
        let (live, dashboard, fake) = live_fixture();
        live.start().await;
        live.shutdown().await;

        sleep(Duration::from_secs(10)).await;
        assert_eq!(live_calls(&fake), 0);
        let state = dashboard.snapshot().await;
        assert!(!state.live_running);
        assert!(state.alerts.all().is_empty());
    }

    #[test]
    fn test_describe_duration() {
        assert_eq!(describe(Duration::from_secs(300)), "5 minutes");
        assert_eq!(describe(Duration::from_secs(60)), "1 minute");
        assert_eq!(describe(Duration::from_secs(90)), "90 seconds");
    }
}
