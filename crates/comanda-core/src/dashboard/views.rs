//! Commands that draw into the result panel.

use std::future::Future;

use chrono::Utc;
use tracing::{info, warn};

use crate::client::ApiError;
use crate::dashboard::{ActionError, Dashboard};
use crate::models::{NotificationQuery, NotificationType};
use crate::state::{NotificationFilter, Panel, ViewKind};
use crate::views;

/// Notifications query for one order. The id is trimmed and must not be
/// empty.
pub fn tracking_query(order_id: &str) -> Result<NotificationQuery, ActionError> {
    let order_id = order_id.trim();
    if order_id.is_empty() {
        return Err(ActionError::validation("Please provide the order ID"));
    }
    Ok(NotificationQuery::for_order(order_id))
}

impl Dashboard {
    /// Foreground render: takes a fresh ticket, fetches, commits in focus
    /// mode. Failures raise a danger alert.
    async fn show_view<T, Fut>(
        &self,
        view: ViewKind,
        context: &str,
        fetch: Fut,
        render: impl FnOnce(&T) -> Panel,
    ) -> Result<Panel, ActionError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        info!(event = "core.view.show_started", view = %view);
        let ticket = self.update(move |s| s.panel.begin(view)).await;

        let data = match fetch.await {
            Ok(data) => data,
            Err(e) => {
                warn!(event = "core.view.show_failed", view = %ticket.view(), error = %e);
                return self.fail(ActionError::api(context, e)).await;
            }
        };

        let panel = render(&data);
        self.commit(ticket, panel.clone()).await;
        Ok(panel)
    }

    /// Background render: only fetches when the panel shows `view`, and
    /// commits in passive mode. Returns whether the panel was redrawn.
    pub(crate) async fn refresh_view<T, Fut>(
        &self,
        view: ViewKind,
        fetch: impl FnOnce() -> Fut,
        render: impl FnOnce(&T) -> Panel,
    ) -> bool
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let Some(ticket) = self.update(|s| s.panel.begin_refresh(&view)).await else {
            return false;
        };

        match fetch().await {
            Ok(data) => self.commit(ticket, render(&data)).await,
            Err(e) => {
                warn!(event = "core.view.refresh_failed", view = %view, error = %e);
                false
            }
        }
    }

    pub async fn show_staff_availability(&self) -> Result<Panel, ActionError> {
        self.show_view(
            ViewKind::StaffAvailability,
            "Failed to check staff availability",
            self.backend().staff_availability(),
            views::staff_availability,
        )
        .await
    }

    pub async fn show_inventory(&self) -> Result<Panel, ActionError> {
        self.show_view(
            ViewKind::Inventory,
            "Failed to load inventory",
            self.backend().list_inventory(),
            views::inventory,
        )
        .await
    }

    pub async fn show_kitchen_status(&self) -> Result<Panel, ActionError> {
        self.show_view(
            ViewKind::KitchenStatus,
            "Failed to get kitchen status",
            self.backend().kitchen_status(),
            views::kitchen_status,
        )
        .await
    }

    pub async fn show_active_orders(&self) -> Result<Panel, ActionError> {
        self.show_view(
            ViewKind::ActiveOrders,
            "Failed to get active orders",
            self.backend().active_orders(),
            |active| views::active_orders(active, Utc::now()),
        )
        .await
    }

    pub async fn show_orders(&self) -> Result<Panel, ActionError> {
        self.show_view(
            ViewKind::Orders,
            "Failed to load orders",
            self.backend().list_orders(),
            |orders: &Vec<_>| views::orders(orders),
        )
        .await
    }

    pub async fn show_notification_summary(&self) -> Result<Panel, ActionError> {
        self.show_view(
            ViewKind::NotificationSummary,
            "Failed to get notification summary",
            self.backend().notification_summary(),
            views::notification_summary,
        )
        .await
    }

    /// Store `filter` as the shared filter and show the filtered list.
    ///
    /// Every later automatic refresh reuses this filter until it is cleared.
    pub async fn apply_filter(
        &self,
        kind: Option<NotificationType>,
        order_id: Option<&str>,
    ) -> Result<Panel, ActionError> {
        let filter = NotificationFilter::new(kind, order_id);
        info!(
            event = "core.notifications.filter_applied",
            kind = ?filter.kind,
            order_id = ?filter.order_id
        );
        self.show_notifications_with(filter).await
    }

    /// Clear the shared filter and show every notification.
    pub async fn reset_and_show_all(&self) -> Result<Panel, ActionError> {
        info!(event = "core.notifications.filter_cleared");
        self.show_notifications_with(NotificationFilter::default())
            .await
    }

    async fn show_notifications_with(
        &self,
        filter: NotificationFilter,
    ) -> Result<Panel, ActionError> {
        let query = filter.to_query();
        let stored = filter.clone();
        self.update(move |s| s.filter = stored).await;

        self.show_view(
            ViewKind::Notifications,
            "Failed to load notifications",
            self.backend().notifications(&query),
            |list| views::notifications(list, &filter),
        )
        .await
    }

    /// Re-issue the stored filter's query and repaint in place, if the
    /// notifications view is open.
    pub async fn refresh_with_current_filter(&self) -> bool {
        // Filter and ticket are read under one lock so a concurrent
        // `apply_filter` either happens before (and we use its filter) or
        // after (and bumps the generation, discarding this response).
        let Some((ticket, filter)) = self
            .update(|s| {
                s.panel
                    .begin_refresh(&ViewKind::Notifications)
                    .map(|ticket| (ticket, s.filter.clone()))
            })
            .await
        else {
            return false;
        };

        match self.backend().notifications(&filter.to_query()).await {
            Ok(list) => {
                self.commit(ticket, views::notifications(&list, &filter))
                    .await
            }
            Err(e) => {
                warn!(
                    event = "core.notifications.refresh_failed",
                    error = %e
                );
                false
            }
        }
    }

    /// Timeline of one order's notifications.
    pub async fn track_order(&self, order_id: &str) -> Result<Panel, ActionError> {
        let query = match tracking_query(order_id) {
            Ok(query) => query,
            Err(e) => return self.fail(e).await,
        };
        let order_id = order_id.trim();
        self.show_view(
            ViewKind::OrderTracking(order_id.to_string()),
            "Failed to track order",
            self.backend().notifications(&query),
            |list| views::order_tracking(order_id, list),
        )
        .await
    }

    /// Refresh the open tracking view for the same order.
    pub async fn refresh_tracking_if_open(&self) -> bool {
        let view = self.state.read().await.panel.view().clone();
        let ViewKind::OrderTracking(order_id) = view.clone() else {
            return false;
        };
        let query = NotificationQuery::for_order(order_id.clone());
        self.refresh_view(
            view,
            || self.backend().notifications(&query),
            |list| views::order_tracking(&order_id, list),
        )
        .await
    }

    /// Focus the live dashboard view with its loading placeholder.
    pub async fn show_live_loading(&self) -> Panel {
        let panel = views::live_loading(self.settings.live_interval);
        let drawn = panel.clone();
        self.update(move |s| s.panel.show(ViewKind::LiveDashboard, drawn))
            .await;
        panel
    }

    /// One live dashboard tick: the latest notifications, if the live view
    /// is still on screen.
    pub async fn live_tick(&self) -> bool {
        let limit = self.settings.live_limit;
        let interval = self.settings.live_interval;
        let query = NotificationQuery::latest(limit);
        self.refresh_view(
            ViewKind::LiveDashboard,
            || self.backend().notifications(&query),
            |list| views::live_dashboard(list, interval, limit, Utc::now()),
        )
        .await
    }
}
