use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use comanda_config::ComandaConfig;

use crate::client::backend::RestaurantBackend;
use crate::client::errors::ApiError;
use crate::models::{
    ActiveOrders, Employee, HealthPayload, Inventory, KitchenStatus, NewEmployee, NewOrder,
    NewStockEntry, NotificationList, NotificationQuery, NotificationSummary, Order, OrderReceipt,
    PrepareReply, StaffAvailability, StockReceipt,
};
use crate::registry::{ServiceKind, ServiceRegistry};

/// JSON-over-HTTP client for the API gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    registry: ServiceRegistry,
}

impl GatewayClient {
    pub fn new(registry: ServiceRegistry, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client {
                message: e.to_string(),
            })?;
        Ok(Self { http, registry })
    }

    pub fn from_config(config: &ComandaConfig) -> Result<Self, ApiError> {
        Self::new(
            ServiceRegistry::from_config(config),
            config.gateway.timeout(),
        )
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        kind: ServiceKind,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.registry.endpoint(kind).url(path);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(url, request).await
    }

    async fn post_json<B, T>(&self, kind: ServiceKind, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.registry.endpoint(kind).url(path);
        let request = self.http.post(&url).json(body);
        self.send(url, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(event = "core.client.request_started", url = %url);

        let response = request.send().await.map_err(|e| {
            debug!(event = "core.client.request_failed", url = %url, error = %e);
            ApiError::Network {
                url: url.clone(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                event = "core.client.status_rejected",
                url = %url,
                status = status.as_u16()
            );
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let value = serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        debug!(event = "core.client.request_completed", url = %url, bytes = body.len());
        Ok(value)
    }
}

#[async_trait]
impl RestaurantBackend for GatewayClient {
    async fn health(&self, kind: ServiceKind) -> Result<HealthPayload, ApiError> {
        self.get_json(kind, "/health", &[]).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json(ServiceKind::Staff, "/", &[]).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.post_json(ServiceKind::Staff, "/", employee).await
    }

    async fn staff_availability(&self) -> Result<StaffAvailability, ApiError> {
        self.get_json(ServiceKind::Staff, "/disponivel-funcionarios", &[])
            .await
    }

    async fn list_inventory(&self) -> Result<Inventory, ApiError> {
        self.get_json(ServiceKind::Inventory, "/listar", &[]).await
    }

    async fn add_stock(&self, entry: &NewStockEntry) -> Result<StockReceipt, ApiError> {
        self.post_json(ServiceKind::Inventory, "/cadastrar", entry)
            .await
    }

    async fn kitchen_status(&self) -> Result<KitchenStatus, ApiError> {
        self.get_json(ServiceKind::Kitchen, "/status", &[]).await
    }

    async fn active_orders(&self) -> Result<ActiveOrders, ApiError> {
        self.get_json(ServiceKind::Kitchen, "/pedidos-ativos", &[])
            .await
    }

    async fn prepare_order(&self, order: &NewOrder) -> Result<PrepareReply, ApiError> {
        self.post_json(ServiceKind::Kitchen, "/preparar", order).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json(ServiceKind::Orders, "/listar", &[]).await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<OrderReceipt, ApiError> {
        self.post_json(ServiceKind::Orders, "/novo-pedido", order)
            .await
    }

    async fn notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<NotificationList, ApiError> {
        self.get_json(ServiceKind::Notifications, "/notificacoes", &query.params())
            .await
    }

    async fn notification_summary(&self) -> Result<NotificationSummary, ApiError> {
        self.get_json(ServiceKind::Notifications, "/notificacoes/resumo", &[])
            .await
    }
}
