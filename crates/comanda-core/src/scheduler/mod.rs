//! Recurring background work for watch mode.
//!
//! Four steady-state tasks run until [`Scheduler::shutdown`]: service health,
//! notifications, the kitchen trigger, and the conditional active-orders
//! refresh. Each fires for the first time one period after start, and never
//! overlaps with itself.

pub mod live;

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use comanda_config::RefreshConfig;

use crate::dashboard::Dashboard;

pub use live::{LiveDashboard, LiveState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshIntervals {
    pub health: Duration,
    pub notifications: Duration,
    pub kitchen_trigger: Duration,
    pub active_orders: Duration,
    pub live: Duration,
    pub live_max: Duration,
}

impl RefreshIntervals {
    pub fn from_config(config: &RefreshConfig) -> Self {
        Self {
            health: config.health_interval(),
            notifications: config.notifications_interval(),
            kitchen_trigger: config.kitchen_trigger_interval(),
            active_orders: config.active_orders_interval(),
            live: config.live_interval(),
            live_max: config.live_max_duration(),
        }
    }
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Self::from_config(&RefreshConfig::default())
    }
}

/// Spawn `tick` every `period` until `token` is cancelled. A tick in
/// progress is abandoned at its next await point on cancellation.
pub fn spawn_periodic<F, Fut>(
    name: &'static str,
    period: Duration,
    token: CancellationToken,
    mut tick: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(event = "core.scheduler.task_started", task = name, period_ms = period.as_millis() as u64);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = interval.tick() => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => break,
                        _ = tick() => {}
                    }
                }
            }
        }

        debug!(event = "core.scheduler.task_stopped", task = name);
    })
}

pub struct Scheduler {
    token: CancellationToken,
    tasks: Vec<(&'static str, JoinHandle<()>)>,
    live: LiveDashboard,
}

impl Scheduler {
    /// Spawn the four steady-state tasks. Must be called inside a runtime.
    pub fn start(dashboard: Dashboard, intervals: RefreshIntervals) -> Self {
        let token = CancellationToken::new();
        let mut tasks = Vec::with_capacity(4);

        let d = dashboard.clone();
        tasks.push((
            "health",
            spawn_periodic("health", intervals.health, token.clone(), move || {
                let d = d.clone();
                async move {
                    d.check_all_services().await;
                }
            }),
        ));

        let d = dashboard.clone();
        tasks.push((
            "notifications",
            spawn_periodic(
                "notifications",
                intervals.notifications,
                token.clone(),
                move || {
                    let d = d.clone();
                    async move { d.load_notifications_summary().await }
                },
            ),
        ));

        let d = dashboard.clone();
        tasks.push((
            "kitchen_trigger",
            spawn_periodic(
                "kitchen_trigger",
                intervals.kitchen_trigger,
                token.clone(),
                move || {
                    let d = d.clone();
                    async move { d.trigger_kitchen().await }
                },
            ),
        ));

        let d = dashboard.clone();
        tasks.push((
            "active_orders",
            spawn_periodic(
                "active_orders",
                intervals.active_orders,
                token.clone(),
                move || {
                    let d = d.clone();
                    async move {
                        d.refresh_active_orders_if_open().await;
                    }
                },
            ),
        ));

        let live = LiveDashboard::new(dashboard, intervals.live, intervals.live_max, token.clone());

        info!(
            event = "core.scheduler.started",
            health_secs = intervals.health.as_secs(),
            notifications_secs = intervals.notifications.as_secs(),
            kitchen_trigger_secs = intervals.kitchen_trigger.as_secs(),
            active_orders_secs = intervals.active_orders.as_secs()
        );

        Self { token, tasks, live }
    }

    pub fn live(&self) -> &LiveDashboard {
        &self.live
    }

    /// Cancel every task, including a running live session, and wait for
    /// them to finish.
    pub async fn shutdown(self) {
        info!(event = "core.scheduler.shutdown_started");
        self.token.cancel();
        self.live.shutdown().await;

        for (name, handle) in self.tasks {
            if let Err(e) = handle.await {
                warn!(event = "core.scheduler.join_failed", task = name, error = %e);
            }
        }
        info!(event = "core.scheduler.shutdown_completed");
    }
}
