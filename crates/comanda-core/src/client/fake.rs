//! In-memory backend for unit tests.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::client::backend::RestaurantBackend;
use crate::client::errors::ApiError;
use crate::models::{
    ActiveOrders, Employee, HealthPayload, Inventory, KitchenStatus, NewEmployee, NewOrder,
    NewStockEntry, Notification, NotificationList, NotificationQuery, NotificationSummary, Order,
    OrderReceipt, PrepareReply, StaffAvailability, StockReceipt,
};
use crate::registry::ServiceKind;

#[derive(Default)]
pub struct FakeBackend {
    pub online: Mutex<HashSet<ServiceKind>>,
    pub employees: Mutex<Vec<Employee>>,
    pub inventory: Mutex<Inventory>,
    pub notifications: Mutex<Vec<Notification>>,
    pub orders: Mutex<Vec<Order>>,
    pub active: Mutex<ActiveOrders>,
    /// Operations that answer `HTTP 500`.
    pub failing: Mutex<HashSet<&'static str>>,
    /// Per-call delays for `notifications`, consumed front to back.
    pub notification_delays: Mutex<VecDeque<Duration>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn all_online() -> Self {
        let fake = Self::default();
        fake.online.lock().unwrap().extend(ServiceKind::ALL);
        fake
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    fn record(&self, op: &'static str, detail: String) -> Result<(), ApiError> {
        let entry = if detail.is_empty() {
            op.to_string()
        } else {
            format!("{} {}", op, detail)
        };
        self.calls.lock().unwrap().push(entry);
        if self.failing.lock().unwrap().contains(op) {
            return Err(ApiError::Status {
                url: format!("fake://{}", op),
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

pub fn notification(order_id: &str, kind: &str, created_at: &str) -> Notification {
    Notification {
        order_id: order_id.to_string(),
        kind_raw: kind.to_string(),
        message: format!("{} {}", kind, order_id),
        details: None,
        created_at: created_at.to_string(),
    }
}

#[async_trait]
impl RestaurantBackend for FakeBackend {
    async fn health(&self, kind: ServiceKind) -> Result<HealthPayload, ApiError> {
        self.record("health", kind.key().to_string())?;
        if self.online.lock().unwrap().contains(&kind) {
            Ok(HealthPayload {
                status: Some("ok".to_string()),
                message: None,
                service: None,
            })
        } else {
            Err(ApiError::Network {
                url: format!("fake://{}/health", kind),
                message: "connection refused".to_string(),
            })
        }
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.record("list_employees", String::new())?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.record("create_employee", employee.email.clone())?;
        let mut employees = self.employees.lock().unwrap();
        let created = Employee {
            id: employees.len() as i64 + 1,
            name: employee.name.clone(),
            email: employee.email.clone(),
        };
        employees.push(created.clone());
        Ok(created)
    }

    async fn staff_availability(&self) -> Result<StaffAvailability, ApiError> {
        self.record("staff_availability", String::new())?;
        let employees = self.employees.lock().unwrap();
        Ok(StaffAvailability {
            total: employees.len() as u32,
            available: employees.len() as u32,
            sufficient: employees.len() >= 2,
            active: Vec::new(),
        })
    }

    async fn list_inventory(&self) -> Result<Inventory, ApiError> {
        self.record("list_inventory", String::new())?;
        Ok(self.inventory.lock().unwrap().clone())
    }

    async fn add_stock(&self, entry: &NewStockEntry) -> Result<StockReceipt, ApiError> {
        self.record("add_stock", entry.product.clone())?;
        let mut inventory = self.inventory.lock().unwrap();
        *inventory.0.entry(entry.product.clone()).or_insert(0) += i64::from(entry.quantity);
        Ok(StockReceipt {
            message: Some("ok".to_string()),
            inventory: Some(inventory.clone()),
        })
    }

    async fn kitchen_status(&self) -> Result<KitchenStatus, ApiError> {
        self.record("kitchen_status", String::new())?;
        Ok(KitchenStatus {
            in_preparation: self.active.lock().unwrap().total,
            average_prep_minutes: 25.0,
            status: "operando".to_string(),
        })
    }

    async fn active_orders(&self) -> Result<ActiveOrders, ApiError> {
        self.record("active_orders", String::new())?;
        Ok(self.active.lock().unwrap().clone())
    }

    async fn prepare_order(&self, order: &NewOrder) -> Result<PrepareReply, ApiError> {
        self.record("prepare_order", order.order_id.clone())?;
        Ok(PrepareReply {
            status: "em_preparo".to_string(),
            estimated_minutes: Some(25),
            reason: None,
        })
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.record("list_orders", String::new())?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn create_order(&self, order: &NewOrder) -> Result<OrderReceipt, ApiError> {
        self.record("create_order", order.order_id.clone())?;
        self.orders.lock().unwrap().push(Order {
            order_id: order.order_id.clone(),
            table: order.table,
            items: order.items.clone(),
            total: Some(order.total()),
            status: None,
        });
        Ok(OrderReceipt::default())
    }

    async fn notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<NotificationList, ApiError> {
        let detail = query
            .params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        self.record("notifications", detail)?;

        let delay = self.notification_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let items: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| query.kind.is_none_or(|k| n.kind_raw == k.wire()))
            .filter(|n| query.order_id.as_ref().is_none_or(|id| &n.order_id == id))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(NotificationList {
            total: items.len() as u64,
            items,
        })
    }

    async fn notification_summary(&self) -> Result<NotificationSummary, ApiError> {
        self.record("notification_summary", String::new())?;
        let mut summary = NotificationSummary::default();
        for n in self.notifications.lock().unwrap().iter() {
            *summary.by_type.entry(n.kind_raw.clone()).or_insert(0) += 1;
            summary.total += 1;
        }
        Ok(summary)
    }
}
