use futures::future::join_all;
use tracing::info;

use crate::dashboard::Dashboard;
use crate::health::{self, HealthReport, ServiceStatus};
use crate::registry::ServiceKind;

impl Dashboard {
    /// Probe one service and update its card as soon as the answer arrives.
    pub async fn check_health(&self, kind: ServiceKind) -> ServiceStatus {
        let status = health::check_health(self.backend(), kind).await;
        let applied = status.clone();
        self.update(move |s| s.board.apply_status(&applied)).await;
        status
    }

    /// Probe all services concurrently, then run the initial loads for the
    /// ones that answered. Kitchen and orders have no summary loader.
    pub async fn check_all_services(&self) -> HealthReport {
        let statuses = join_all(ServiceKind::ALL.map(|kind| self.check_health(kind))).await;
        let report = HealthReport { statuses };

        info!(
            event = "core.health.services_online",
            online = report.online_count(),
            total = report.total(),
            "{}",
            report.summary_line()
        );

        let staff = report.is_online(ServiceKind::Staff);
        let inventory = report.is_online(ServiceKind::Inventory);
        let notifications = report.is_online(ServiceKind::Notifications);
        tokio::join!(
            async {
                if staff {
                    self.load_staff_summary().await;
                }
            },
            async {
                if inventory {
                    self.load_inventory_summary().await;
                }
            },
            async {
                if notifications {
                    self.load_notifications_summary().await;
                }
            },
        );

        report
    }
}
