//! Create/update commands and the form validation in front of them.
//!
//! Forms hold raw user input. Validation happens locally; an invalid form
//! raises a warning alert and sends nothing.

use chrono::Utc;
use tracing::{info, warn};

use crate::dashboard::{ActionError, Dashboard};
use crate::models::{
    Employee, NewEmployee, NewOrder, NewStockEntry, OrderItem, OrderReceipt, PrepareOutcome,
    StockReceipt,
};
use crate::state::AlertLevel;

/// Fresh order id in the `PED<unix millis>` format.
pub fn generate_order_id() -> String {
    format!("PED{}", Utc::now().timestamp_millis())
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<NewEmployee, ActionError> {
        match (
            non_empty(&self.name),
            non_empty(&self.email),
            non_empty(&self.password),
        ) {
            (Some(name), Some(email), Some(_)) => Ok(NewEmployee {
                name: name.to_string(),
                email: email.to_string(),
                // Passwords are sent exactly as typed.
                password: self.password.clone(),
            }),
            _ => Err(ActionError::validation("Please fill in all fields")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockForm {
    pub product: String,
    pub quantity: String,
}

impl StockForm {
    pub fn validate(&self) -> Result<NewStockEntry, ActionError> {
        let product = non_empty(&self.product);
        let quantity = self.quantity.trim().parse::<u32>().ok().filter(|q| *q > 0);
        match (product, quantity) {
            (Some(product), Some(quantity)) => Ok(NewStockEntry {
                product: product.to_string(),
                quantity,
            }),
            _ => Err(ActionError::validation(
                "Please fill in all fields correctly",
            )),
        }
    }
}

/// One order line as typed: all three fields are raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItemInput {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl OrderItemInput {
    /// A line needs a name, a positive whole quantity and a positive price.
    pub fn to_item(&self) -> Option<OrderItem> {
        let name = non_empty(&self.name)?;
        let quantity = self.quantity.trim().parse::<u32>().ok().filter(|q| *q > 0)?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)?;
        Some(OrderItem {
            name: name.to_string(),
            quantity,
            price,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub order_id: String,
    pub table: String,
    pub customer_id: String,
    pub items: Vec<OrderItemInput>,
}

impl OrderForm {
    /// Invalid lines are dropped; the order needs at least one valid line.
    pub fn validate(&self) -> Result<NewOrder, ActionError> {
        let Some(order_id) = non_empty(&self.order_id) else {
            return Err(ActionError::validation("Please provide the order ID"));
        };

        let table = match non_empty(&self.table) {
            None => None,
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
                ActionError::validation(format!("Table must be a whole number, got '{}'", raw))
            })?),
        };

        let items: Vec<OrderItem> = self
            .items
            .iter()
            .filter_map(|input| {
                let item = input.to_item();
                if item.is_none() {
                    warn!(
                        event = "core.order.item_dropped",
                        name = %input.name,
                        quantity = %input.quantity,
                        price = %input.price
                    );
                }
                item
            })
            .collect();

        if items.is_empty() {
            return Err(ActionError::validation(
                "Please add at least one item to the order",
            ));
        }

        Ok(NewOrder {
            order_id: order_id.to_string(),
            items,
            customer_id: non_empty(&self.customer_id).map(str::to_string),
            table,
        })
    }
}

impl Dashboard {
    pub async fn create_employee(&self, form: &EmployeeForm) -> Result<Employee, ActionError> {
        let employee = match form.validate() {
            Ok(employee) => employee,
            Err(e) => return self.fail(e).await,
        };

        info!(event = "core.staff.create_started", email = %employee.email);
        let created = match self.backend().create_employee(&employee).await {
            Ok(created) => created,
            Err(e) => {
                return self
                    .fail(ActionError::api("Failed to create employee", e))
                    .await;
            }
        };

        info!(event = "core.staff.create_completed", id = created.id);
        self.alert(AlertLevel::Success, "✅ Employee created").await;
        self.load_staff_summary().await;
        Ok(created)
    }

    pub async fn add_stock(&self, form: &StockForm) -> Result<StockReceipt, ActionError> {
        let entry = match form.validate() {
            Ok(entry) => entry,
            Err(e) => return self.fail(e).await,
        };

        info!(
            event = "core.inventory.add_started",
            product = %entry.product,
            quantity = entry.quantity
        );
        let receipt = match self.backend().add_stock(&entry).await {
            Ok(receipt) => receipt,
            Err(e) => return self.fail(ActionError::api("Failed to add item", e)).await,
        };

        info!(event = "core.inventory.add_completed", product = %entry.product);
        self.alert(AlertLevel::Success, "✅ Item added to stock").await;
        self.load_inventory_summary().await;
        Ok(receipt)
    }

    /// Submit the order, then show the orders view.
    pub async fn create_order(&self, form: &OrderForm) -> Result<OrderReceipt, ActionError> {
        let order = match form.validate() {
            Ok(order) => order,
            Err(e) => return self.fail(e).await,
        };

        info!(
            event = "core.order.create_started",
            order_id = %order.order_id,
            items = order.items.len(),
            total = order.total()
        );
        let receipt = match self.backend().create_order(&order).await {
            Ok(receipt) => receipt,
            Err(e) => return self.fail(ActionError::api("Failed to create order", e)).await,
        };

        info!(event = "core.order.create_completed", order_id = %order.order_id);
        self.alert(AlertLevel::Success, "✅ Order created").await;
        // The order exists even if listing fails; that failure has its own alert.
        let _ = self.show_orders().await;
        Ok(receipt)
    }

    /// Send an order straight to the kitchen.
    pub async fn prepare_order(&self, form: &OrderForm) -> Result<PrepareOutcome, ActionError> {
        let order = match form.validate() {
            Ok(order) => order,
            Err(e) => return self.fail(e).await,
        };

        let reply = match self.backend().prepare_order(&order).await {
            Ok(reply) => reply,
            Err(e) => {
                return self
                    .fail(ActionError::api("Failed to send order to the kitchen", e))
                    .await;
            }
        };

        let outcome = reply.outcome();
        info!(
            event = "core.kitchen.prepare_completed",
            order_id = %order.order_id,
            outcome = ?outcome
        );
        let (level, message) = match &outcome {
            PrepareOutcome::InPreparation {
                estimated_minutes: Some(minutes),
            } => (
                AlertLevel::Success,
                format!("Order {} in preparation ({} min)", order.order_id, minutes),
            ),
            PrepareOutcome::InPreparation {
                estimated_minutes: None,
            } => (
                AlertLevel::Success,
                format!("Order {} in preparation", order.order_id),
            ),
            PrepareOutcome::Refused { reason } => (
                AlertLevel::Warning,
                format!("Order {} refused: {}", order.order_id, reason),
            ),
            PrepareOutcome::Other(status) => (
                AlertLevel::Info,
                format!("Order {}: {}", order.order_id, status),
            ),
        };
        self.alert(level, message).await;
        Ok(outcome)
    }
}
