use serde::{Deserialize, Serialize};

/// Body of `GET /cozinha/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenStatus {
    #[serde(rename = "pedidos_em_preparo")]
    pub in_preparation: u32,
    /// Average preparation time in minutes.
    #[serde(rename = "tempo_medio_preparo")]
    pub average_prep_minutes: f64,
    pub status: String,
}

/// Body of `GET /cozinha/pedidos-ativos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrders {
    pub total: u32,
    #[serde(rename = "pedidos_ativos", default)]
    pub orders: Vec<ActiveOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrder {
    #[serde(rename = "pedido_id", deserialize_with = "super::lenient_id::deserialize")]
    pub order_id: String,
    #[serde(rename = "inicio_preparo")]
    pub started_at: String,
    #[serde(rename = "tempo_estimado_min")]
    pub estimated_minutes: u32,
}

/// Body returned by `POST /cozinha/preparar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareReply {
    pub status: String,
    #[serde(rename = "tempo_estimado_min", default)]
    pub estimated_minutes: Option<u32>,
    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareOutcome {
    InPreparation { estimated_minutes: Option<u32> },
    Refused { reason: String },
    Other(String),
}

impl PrepareReply {
    pub fn outcome(&self) -> PrepareOutcome {
        match self.status.as_str() {
            "em_preparo" => PrepareOutcome::InPreparation {
                estimated_minutes: self.estimated_minutes,
            },
            "recusado" => PrepareOutcome::Refused {
                reason: self
                    .reason
                    .clone()
                    .unwrap_or_else(|| "no reason given".to_string()),
            },
            other => PrepareOutcome::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_orders_numeric_order_id() {
        let active: ActiveOrders = serde_json::from_str(
            r#"{"total":1,"pedidos_ativos":[{"pedido_id":42,"inicio_preparo":"2025-01-01T12:00:00","tempo_estimado_min":25}]}"#,
        )
        .unwrap();
        assert_eq!(active.orders[0].order_id, "42");
        assert_eq!(active.orders[0].estimated_minutes, 25);
    }

    #[test]
    fn test_kitchen_status_integer_average() {
        let status: KitchenStatus = serde_json::from_str(
            r#"{"pedidos_em_preparo":2,"tempo_medio_preparo":25,"status":"operando"}"#,
        )
        .unwrap();
        assert_eq!(status.average_prep_minutes, 25.0);
    }

    #[test]
    fn test_prepare_outcomes() {
        let accepted: PrepareReply =
            serde_json::from_str(r#"{"status":"em_preparo","tempo_estimado_min":25}"#).unwrap();
        assert_eq!(
            accepted.outcome(),
            PrepareOutcome::InPreparation {
                estimated_minutes: Some(25)
            }
        );

        let refused: PrepareReply = serde_json::from_str(
            r#"{"status":"recusado","motivo":"Recusado por falta de estoque"}"#,
        )
        .unwrap();
        assert_eq!(
            refused.outcome(),
            PrepareOutcome::Refused {
                reason: "Recusado por falta de estoque".to_string()
            }
        );
    }
}
