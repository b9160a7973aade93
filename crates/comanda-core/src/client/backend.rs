use async_trait::async_trait;

use crate::client::errors::ApiError;
use crate::models::{
    ActiveOrders, Employee, HealthPayload, Inventory, KitchenStatus, NewEmployee, NewOrder,
    NewStockEntry, NotificationList, NotificationQuery, NotificationSummary, Order, OrderReceipt,
    PrepareReply, StaffAvailability, StockReceipt,
};
use crate::registry::ServiceKind;

/// Every call the dashboard makes against the restaurant services.
///
/// [`GatewayClient`](crate::client::GatewayClient) is the HTTP implementation;
/// tests substitute an in-memory one.
#[async_trait]
pub trait RestaurantBackend: Send + Sync {
    /// `GET <service>/health`
    async fn health(&self, kind: ServiceKind) -> Result<HealthPayload, ApiError>;

    /// `GET /funcionarios/`
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;

    /// `POST /funcionarios/`
    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError>;

    /// `GET /funcionarios/disponivel-funcionarios`
    async fn staff_availability(&self) -> Result<StaffAvailability, ApiError>;

    /// `GET /estoque/listar`
    async fn list_inventory(&self) -> Result<Inventory, ApiError>;

    /// `POST /estoque/cadastrar`
    async fn add_stock(&self, entry: &NewStockEntry) -> Result<StockReceipt, ApiError>;

    /// `GET /cozinha/status`
    async fn kitchen_status(&self) -> Result<KitchenStatus, ApiError>;

    /// `GET /cozinha/pedidos-ativos`
    async fn active_orders(&self) -> Result<ActiveOrders, ApiError>;

    /// `POST /cozinha/preparar`
    async fn prepare_order(&self, order: &NewOrder) -> Result<PrepareReply, ApiError>;

    /// `GET /pedidos/listar`
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// `POST /pedidos/novo-pedido`
    async fn create_order(&self, order: &NewOrder) -> Result<OrderReceipt, ApiError>;

    /// `GET /notificacoes/notificacoes`
    async fn notifications(&self, query: &NotificationQuery)
    -> Result<NotificationList, ApiError>;

    /// `GET /notificacoes/notificacoes/resumo`
    async fn notification_summary(&self) -> Result<NotificationSummary, ApiError>;
}
