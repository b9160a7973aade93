//! Dashboard flows against a mock API gateway over real HTTP.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use comanda_core::models::NotificationType;
use comanda_core::state::Connectivity;
use comanda_core::{
    ComandaConfig, Dashboard, DashboardSettings, GatewayClient, ServiceKind, ViewKind,
};

fn dashboard_for(server: &MockServer) -> Dashboard {
    let mut config = ComandaConfig::default();
    config.gateway.base_url = Some(server.uri());
    let client = GatewayClient::from_config(&config).unwrap();
    Dashboard::new(Arc::new(client), DashboardSettings::from_config(&config))
}

async fn mount_health(server: &MockServer, prefix: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("{}/health", prefix)))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "status": "ok",
            "service": prefix.trim_start_matches('/'),
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_startup_health_check_against_gateway() {
    let server = MockServer::start().await;
    mount_health(&server, "/funcionarios", 200).await;
    mount_health(&server, "/estoque", 503).await;
    mount_health(&server, "/notificacoes", 200).await;
    // kitchen and orders are not mounted and answer 404

    Mock::given(method("GET"))
        .and(path("/funcionarios/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ana", "email": "ana@example.com"},
            {"id": 2, "name": "Bruno", "email": "bruno@example.com"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notificacoes/notificacoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notificacoes": [],
            "total": 12
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/estoque/listar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Arroz": 3})))
        .expect(0)
        .mount(&server)
        .await;

    let dashboard = dashboard_for(&server);
    let report = dashboard.check_all_services().await;
    assert_eq!(report.summary_line(), "2/5 services online");

    let state = dashboard.snapshot().await;
    let staff = state.board.card(ServiceKind::Staff).unwrap();
    assert_eq!(staff.connectivity, Connectivity::Online);
    assert_eq!(staff.headline, "2 employees registered");

    let inventory = state.board.card(ServiceKind::Inventory).unwrap();
    assert_eq!(inventory.connectivity, Connectivity::Offline);
    assert_eq!(inventory.headline, "Offline");

    let kitchen = state.board.card(ServiceKind::Kitchen).unwrap();
    assert_eq!(kitchen.connectivity, Connectivity::Offline);

    assert_eq!(
        state
            .board
            .card(ServiceKind::Notifications)
            .unwrap()
            .headline,
        "12 notifications"
    );
    assert!(state.alerts.all().is_empty());
}

#[tokio::test]
async fn test_filter_survives_background_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notificacoes/notificacoes"))
        .and(query_param("tipo", "sistema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notificacoes": [
                {"pedido_id": "PED2", "tipo": "sistema", "mensagem": "Restart", "created_at": "2025-03-01T10:05:00Z"}
            ],
            "total": 1
        })))
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notificacoes/notificacoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notificacoes": [
                {"pedido_id": "PED1", "tipo": "pedido_criado", "mensagem": "Created", "created_at": "2025-03-01T10:00:00Z"},
                {"pedido_id": "PED2", "tipo": "sistema", "mensagem": "Restart", "created_at": "2025-03-01T10:05:00Z"}
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dashboard = dashboard_for(&server);
    dashboard
        .apply_filter(Some(NotificationType::System), None)
        .await
        .unwrap();
    dashboard.load_notifications_summary().await;

    let state = dashboard.snapshot().await;
    assert!(state.panel.is_showing(&ViewKind::Notifications));
    assert!(state.panel.panel().contains("Order #PED2"));
    assert!(!state.panel.panel().contains("Order #PED1"));
    assert_eq!(
        state
            .board
            .card(ServiceKind::Notifications)
            .unwrap()
            .headline,
        "2 notifications"
    );
    server.verify().await;
}

#[tokio::test]
async fn test_failed_command_raises_danger_alert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cozinha/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dashboard = dashboard_for(&server);
    let err = dashboard.show_kitchen_status().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to get kitchen status: HTTP 500: Internal Server Error"
    );

    let state = dashboard.snapshot().await;
    assert_eq!(state.alerts.all().len(), 1);
    assert_eq!(state.alerts.all()[0].level, comanda_core::AlertLevel::Danger);
}
