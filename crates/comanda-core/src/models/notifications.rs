use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::time::parse_timestamp;

/// Notification categories emitted by the order pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    #[serde(rename = "pedido_criado")]
    OrderCreated,
    #[serde(rename = "pedido_aceito")]
    OrderAccepted,
    #[serde(rename = "pedido_recusado")]
    OrderRefused,
    #[serde(rename = "pedido_finalizado")]
    OrderFinished,
    #[serde(rename = "sistema")]
    System,
}

impl NotificationType {
    pub const ALL: [NotificationType; 5] = [
        NotificationType::OrderCreated,
        NotificationType::OrderAccepted,
        NotificationType::OrderRefused,
        NotificationType::OrderFinished,
        NotificationType::System,
    ];

    /// Value of the `tipo` field and query parameter.
    pub fn wire(&self) -> &'static str {
        match self {
            NotificationType::OrderCreated => "pedido_criado",
            NotificationType::OrderAccepted => "pedido_aceito",
            NotificationType::OrderRefused => "pedido_recusado",
            NotificationType::OrderFinished => "pedido_finalizado",
            NotificationType::System => "sistema",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.wire() == raw)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::OrderCreated => "🆕",
            NotificationType::OrderAccepted => "✅",
            NotificationType::OrderRefused => "❌",
            NotificationType::OrderFinished => "🎉",
            NotificationType::System => "ℹ️",
        }
    }

    /// Human label used by the filter picker.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::OrderCreated => "Orders created",
            NotificationType::OrderAccepted => "Orders accepted",
            NotificationType::OrderRefused => "Orders refused",
            NotificationType::OrderFinished => "Orders finished",
            NotificationType::System => "System",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| {
            format!(
                "unknown notification type '{}'. Valid types: {}",
                s,
                Self::ALL.map(|t| t.wire()).join(", ")
            )
        })
    }
}

/// Icon for a raw `tipo`, including types this client does not know.
pub fn type_icon(raw: &str) -> &'static str {
    NotificationType::from_wire(raw).map_or("📢", |t| t.icon())
}

/// `pedido_criado` → `PEDIDO CRIADO`. Only the first underscore is replaced.
pub fn type_badge(raw: &str) -> String {
    raw.replacen('_', " ", 1).to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "pedido_id", deserialize_with = "super::lenient_id::deserialize")]
    pub order_id: String,
    /// Raw `tipo`; see [`Notification::kind`].
    #[serde(rename = "tipo")]
    pub kind_raw: String,
    #[serde(rename = "mensagem")]
    pub message: String,
    /// A JSON object, or a JSON-encoded string of one.
    #[serde(rename = "detalhes", default)]
    pub details: Option<serde_json::Value>,
    pub created_at: String,
}

/// Decoded `detalhes` field.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationDetails {
    None,
    Pairs(Vec<(String, String)>),
    /// Shown verbatim when the field is not a JSON object.
    Raw(String),
}

impl Notification {
    pub fn kind(&self) -> Option<NotificationType> {
        NotificationType::from_wire(&self.kind_raw)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn decoded_details(&self) -> NotificationDetails {
        let object = match &self.details {
            None | Some(serde_json::Value::Null) => return NotificationDetails::None,
            Some(serde_json::Value::String(text)) => {
                match serde_json::from_str::<serde_json::Value>(text) {
                    Ok(serde_json::Value::Object(map)) => map,
                    _ => return NotificationDetails::Raw(text.clone()),
                }
            }
            Some(serde_json::Value::Object(map)) => map.clone(),
            Some(other) => return NotificationDetails::Raw(other.to_string()),
        };

        if object.is_empty() {
            return NotificationDetails::None;
        }
        NotificationDetails::Pairs(
            object
                .into_iter()
                .map(|(key, value)| {
                    let value = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (key, value)
                })
                .collect(),
        )
    }
}

/// Query parameters for `GET /notificacoes/notificacoes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub kind: Option<NotificationType>,
    pub order_id: Option<String>,
    pub limit: Option<usize>,
}

impl NotificationQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_order(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        }
    }

    pub fn latest(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// `(name, value)` pairs in the order the services expect.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(kind) = self.kind {
            params.push(("tipo", kind.wire().to_string()));
        }
        if let Some(order_id) = &self.order_id {
            params.push(("pedido_id", order_id.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    pub fn is_unfiltered(&self) -> bool {
        self.kind.is_none() && self.order_id.is_none()
    }
}

/// The notifications endpoint answers either `{notificacoes, total}` or a
/// bare array. Any other envelope is treated as an empty list. Entries are
/// decoded one by one so a single malformed entry is skipped, not the list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawNotificationList {
    Wrapped {
        #[serde(rename = "notificacoes")]
        items: Vec<serde_json::Value>,
        #[serde(default)]
        total: Option<serde_json::Value>,
    },
    Bare(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

fn decode_entries(raw: Vec<serde_json::Value>) -> Vec<Notification> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(notification) => Some(notification),
            Err(e) => {
                warn!(
                    event = "core.notifications.entry_skipped",
                    index = index,
                    error = %e
                );
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNotificationList")]
pub struct NotificationList {
    pub items: Vec<Notification>,
    /// Server-reported total; may exceed `items.len()` when limited.
    pub total: u64,
}

impl From<RawNotificationList> for NotificationList {
    fn from(raw: RawNotificationList) -> Self {
        match raw {
            RawNotificationList::Wrapped { items, total } => {
                let received = items.len() as u64;
                let total = total
                    .as_ref()
                    .and_then(serde_json::Value::as_u64)
                    .filter(|t| *t > 0)
                    .unwrap_or(received);
                Self {
                    items: decode_entries(items),
                    total,
                }
            }
            RawNotificationList::Bare(items) => Self {
                total: items.len() as u64,
                items: decode_entries(items),
            },
            RawNotificationList::Other(other) => {
                warn!(
                    event = "core.notifications.unexpected_shape",
                    kind = json_kind(&other)
                );
                Self::default()
            }
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Body of `GET /notificacoes/notificacoes/resumo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSummary {
    #[serde(rename = "resumo_por_tipo", default)]
    pub by_type: BTreeMap<String, u64>,
    #[serde(rename = "total_notificacoes", default)]
    pub total: u64,
}
