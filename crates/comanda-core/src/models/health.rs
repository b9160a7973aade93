use serde::{Deserialize, Serialize};

/// Body of `GET <service>/health`. Every field is optional; any 2xx JSON
/// body counts as healthy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_payload_partial() {
        let payload: HealthPayload =
            serde_json::from_str(r#"{"status":"ok","message":"Pedidos service is running"}"#)
                .unwrap();
        assert_eq!(payload.status.as_deref(), Some("ok"));
        assert_eq!(payload.service, None);
    }

    #[test]
    fn test_health_payload_empty_object() {
        let payload: HealthPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, HealthPayload::default());
    }
}
