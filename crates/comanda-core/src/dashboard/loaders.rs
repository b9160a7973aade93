//! Background loaders. They write status card summaries, conditionally
//! repaint their own view, and never surface errors to the user.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::dashboard::Dashboard;
use crate::models::NotificationQuery;
use crate::registry::ServiceKind;
use crate::state::ViewKind;
use crate::views;
use crate::views::cards;

impl Dashboard {
    /// `GET /funcionarios/` into the staff card.
    pub async fn load_staff_summary(&self) {
        match self.backend().list_employees().await {
            Ok(employees) => {
                let (headline, detail) = cards::staff_card(employees.len());
                self.update(|s| s.board.set_summary(ServiceKind::Staff, headline, detail))
                    .await;
                info!(
                    event = "core.loader.staff_completed",
                    employees = employees.len()
                );
            }
            Err(e) => warn!(event = "core.loader.staff_failed", error = %e),
        }
    }

    /// `GET /estoque/listar` into the inventory card, repainting the
    /// inventory view from the same response when it is open.
    pub async fn load_inventory_summary(&self) {
        let ticket = self
            .update(|s| s.panel.begin_refresh(&ViewKind::Inventory))
            .await;

        match self.backend().list_inventory().await {
            Ok(inventory) => {
                let summary = inventory.summary();
                let (headline, detail) = cards::inventory_card(summary);
                self.update(|s| s.board.set_summary(ServiceKind::Inventory, headline, detail))
                    .await;
                if let Some(ticket) = ticket {
                    self.commit(ticket, views::inventory(&inventory)).await;
                }
                info!(
                    event = "core.loader.inventory_completed",
                    total = summary.total,
                    available = summary.available
                );
            }
            Err(e) => warn!(event = "core.loader.inventory_failed", error = %e),
        }
    }

    /// `GET /notificacoes/notificacoes` into the notifications card, then a
    /// filtered repaint of the notifications view or of the tracking view,
    /// whichever is open.
    pub async fn load_notifications_summary(&self) {
        match self.backend().notifications(&NotificationQuery::all()).await {
            Ok(list) => {
                let (headline, detail) = cards::notifications_card(list.total);
                self.update(|s| {
                    s.board
                        .set_summary(ServiceKind::Notifications, headline, detail)
                })
                .await;
                debug!(event = "core.loader.notifications_completed", total = list.total);
            }
            Err(e) => {
                warn!(event = "core.loader.notifications_failed", error = %e);
                return;
            }
        }

        if !self.refresh_with_current_filter().await {
            self.refresh_tracking_if_open().await;
        }
    }

    /// Poke the kitchen so it evaluates finished orders. Responses and
    /// errors are ignored.
    pub async fn trigger_kitchen(&self) {
        let (status, active) = tokio::join!(
            self.backend().kitchen_status(),
            self.backend().active_orders()
        );
        debug!(
            event = "core.loader.kitchen_triggered",
            status_ok = status.is_ok(),
            active_ok = active.is_ok()
        );
    }

    /// Repaint the active-orders view if it is open.
    pub async fn refresh_active_orders_if_open(&self) -> bool {
        self.refresh_view(
            ViewKind::ActiveOrders,
            || self.backend().active_orders(),
            |active| views::active_orders(active, Utc::now()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FakeBackend, notification};
    use crate::dashboard::testing::dashboard_with;
    use crate::models::NotificationType;

    #[tokio::test]
    async fn test_inventory_summary_card() {
        let fake = FakeBackend::all_online();
        fake.inventory
            .lock()
            .unwrap()
            .0
            .extend([("Frango".to_string(), 10), ("Arroz".to_string(), 0)]);
        let (dashboard, _) = dashboard_with(fake);

        dashboard.load_inventory_summary().await;
        let state = dashboard.snapshot().await;
        let card = state.board.card(ServiceKind::Inventory).unwrap();
        assert_eq!(card.headline, "2 items in stock");
        assert_eq!(card.detail, "1 items available");
    }

    #[tokio::test]
    async fn test_inventory_loader_repaints_only_its_own_view() {
        let fake = FakeBackend::all_online();
        fake.inventory.lock().unwrap().0.insert("Arroz".to_string(), 3);
        let (dashboard, fake) = dashboard_with(fake);

        dashboard.show_orders().await.unwrap();
        let before = dashboard.snapshot().await.panel.revision();
        dashboard.load_inventory_summary().await;
        let state = dashboard.snapshot().await;
        assert!(state.panel.is_showing(&ViewKind::Orders));
        assert_eq!(state.panel.revision(), before);

        dashboard.show_inventory().await.unwrap();
        fake.inventory.lock().unwrap().0.insert("Feijao".to_string(), 20);
        dashboard.load_inventory_summary().await;
        let state = dashboard.snapshot().await;
        assert!(state.panel.is_showing(&ViewKind::Inventory));
        assert!(state.panel.panel().contains("Feijao"));
    }

    #[tokio::test]
    async fn test_notifications_loader_keeps_filter() {
        let fake = FakeBackend::all_online();
        fake.notifications.lock().unwrap().extend([
            notification("PED1", "pedido_criado", "2025-03-01T10:00:00Z"),
            notification("PED2", "sistema", "2025-03-01T10:00:00Z"),
        ]);
        let (dashboard, fake) = dashboard_with(fake);

        dashboard
            .apply_filter(Some(NotificationType::System), None)
            .await
            .unwrap();
        dashboard.load_notifications_summary().await;

        let calls = fake.calls();
        assert_eq!(calls[calls.len() - 2], "notifications");
        assert_eq!(calls[calls.len() - 1], "notifications tipo=sistema");

        let state = dashboard.snapshot().await;
        assert_eq!(
            state.board.card(ServiceKind::Notifications).unwrap().headline,
            "2 notifications"
        );
        assert!(state.panel.panel().contains("Order #PED2"));
        assert!(!state.panel.panel().contains("Order #PED1"));
    }

    #[tokio::test]
    async fn test_loader_errors_are_swallowed() {
        let fake = FakeBackend::all_online();
        fake.fail("list_employees");
        let (dashboard, _) = dashboard_with(fake);

        dashboard.load_staff_summary().await;
        let state = dashboard.snapshot().await;
        assert!(state.alerts.all().is_empty());
        assert_eq!(
            state.board.card(ServiceKind::Staff).unwrap().headline,
            "Checking..."
        );
    }

    #[tokio::test]
    async fn test_kitchen_trigger_ignores_errors() {
        let fake = FakeBackend::all_online();
        fake.fail("kitchen_status");
        let (dashboard, fake) = dashboard_with(fake);

        dashboard.trigger_kitchen().await;
        assert_eq!(fake.count("kitchen_status"), 1);
        assert_eq!(fake.count("active_orders"), 1);
        assert!(dashboard.snapshot().await.alerts.all().is_empty());
    }

    #[tokio::test]
    async fn test_active_orders_refresh_is_conditional() {
        let (dashboard, fake) = dashboard_with(FakeBackend::all_online());
        assert!(!dashboard.refresh_active_orders_if_open().await);
        assert_eq!(fake.count("active_orders"), 0);

        dashboard.show_active_orders().await.unwrap();
        assert!(dashboard.refresh_active_orders_if_open().await);
        assert_eq!(fake.count("active_orders"), 2);
    }
}
