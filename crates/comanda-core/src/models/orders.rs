use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "preco")]
    pub price: f64,
}

/// One entry of `GET /pedidos/listar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "pedido_id", deserialize_with = "super::lenient_id::deserialize")]
    pub order_id: String,
    #[serde(rename = "mesa", default)]
    pub table: Option<u32>,
    #[serde(rename = "itens", default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `POST /pedidos/novo-pedido` (and of `POST /cozinha/preparar`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(rename = "pedido_id")]
    pub order_id: String,
    #[serde(rename = "itens")]
    pub items: Vec<OrderItem>,
    #[serde(rename = "cliente_id")]
    pub customer_id: Option<String>,
    #[serde(rename = "mesa")]
    pub table: Option<u32>,
}

impl NewOrder {
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "resposta_cozinha", default)]
    pub kitchen_reply: Option<serde_json::Value>,
    #[serde(rename = "erro", default)]
    pub error: Option<String>,
}
