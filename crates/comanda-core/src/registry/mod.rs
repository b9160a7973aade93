//! Static table of the five backend collaborators and their base URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use comanda_config::ComandaConfig;

/// One of the five backend collaborators reached through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Staff,
    Inventory,
    Kitchen,
    Orders,
    Notifications,
}

impl ServiceKind {
    /// Every collaborator, in display order.
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Staff,
        ServiceKind::Inventory,
        ServiceKind::Kitchen,
        ServiceKind::Orders,
        ServiceKind::Notifications,
    ];

    /// Stable key used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            ServiceKind::Staff => "staff",
            ServiceKind::Inventory => "inventory",
            ServiceKind::Kitchen => "kitchen",
            ServiceKind::Orders => "orders",
            ServiceKind::Notifications => "notifications",
        }
    }

    /// Path prefix under the API gateway.
    pub fn gateway_path(&self) -> &'static str {
        match self {
            ServiceKind::Staff => "/funcionarios",
            ServiceKind::Inventory => "/estoque",
            ServiceKind::Kitchen => "/cozinha",
            ServiceKind::Orders => "/pedidos",
            ServiceKind::Notifications => "/notificacoes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::Staff => "Staff",
            ServiceKind::Inventory => "Inventory",
            ServiceKind::Kitchen => "Kitchen",
            ServiceKind::Orders => "Orders",
            ServiceKind::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| {
                format!(
                    "unknown service '{}'. Valid services: {}",
                    s,
                    ServiceKind::ALL.map(|k| k.key()).join(", ")
                )
            })
    }
}

/// Base URL of a single collaborator. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub kind: ServiceKind,
    pub base_url: String,
}

impl ServiceEndpoint {
    /// Join an endpoint path (`/health`, `/listar`, `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    endpoints: Vec<ServiceEndpoint>,
}

impl ServiceRegistry {
    /// Route every collaborator through the gateway at `gateway_url`.
    pub fn new(gateway_url: &str) -> Self {
        let gateway = gateway_url.trim_end_matches('/');
        Self {
            endpoints: ServiceKind::ALL
                .into_iter()
                .map(|kind| ServiceEndpoint {
                    kind,
                    base_url: format!("{}{}", gateway, kind.gateway_path()),
                })
                .collect(),
        }
    }

    /// Gateway routing with per-service overrides applied.
    pub fn from_config(config: &ComandaConfig) -> Self {
        let mut registry = Self::new(config.gateway.base_url());
        for endpoint in &mut registry.endpoints {
            if let Some(url) = config.services.get(endpoint.kind.key()) {
                endpoint.base_url = url.trim_end_matches('/').to_string();
            }
        }
        registry
    }

    pub fn endpoint(&self, kind: ServiceKind) -> &ServiceEndpoint {
        // `new` builds one endpoint per kind, in `ServiceKind::ALL` order.
        &self.endpoints[ServiceKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEndpoint> {
        self.endpoints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_routing() {
        let registry = ServiceRegistry::new("http://localhost:8080/");
        assert_eq!(
            registry.endpoint(ServiceKind::Staff).url("/"),
            "http://localhost:8080/funcionarios/"
        );
        assert_eq!(
            registry.endpoint(ServiceKind::Notifications).url("/notificacoes/resumo"),
            "http://localhost:8080/notificacoes/notificacoes/resumo"
        );
        assert_eq!(registry.iter().count(), 5);
    }

    #[test]
    fn test_endpoint_lookup_matches_kind() {
        let registry = ServiceRegistry::new("http://gw");
        for kind in ServiceKind::ALL {
            assert_eq!(registry.endpoint(kind).kind, kind);
        }
    }

    #[test]
    fn test_config_overrides_apply() {
        let mut config = ComandaConfig::default();
        config.services.kitchen = Some("http://localhost:8083/".to_string());
        let registry = ServiceRegistry::from_config(&config);

        assert_eq!(
            registry.endpoint(ServiceKind::Kitchen).url("/status"),
            "http://localhost:8083/status"
        );
        assert_eq!(
            registry.endpoint(ServiceKind::Orders).url("/listar"),
            "http://localhost:8080/pedidos/listar"
        );
    }

    #[test]
    fn test_service_kind_from_str() {
        assert_eq!("kitchen".parse::<ServiceKind>(), Ok(ServiceKind::Kitchen));
        let err = "bar".parse::<ServiceKind>().unwrap_err();
        assert!(err.contains("staff, inventory, kitchen, orders, notifications"));
    }
}
