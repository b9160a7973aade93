use std::sync::Arc;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, warn};

use comanda_config::ComandaConfig;
use comanda_core::events;
use comanda_core::{
    ActionError, ApiError, Dashboard, DashboardSettings, GatewayClient, OrderForm, Panel,
    generate_order_id,
};

use crate::color;
use crate::render;
use crate::repl::parse_item;

/// Everything a command handler needs: the resolved config and a dashboard
/// wired to the gateway.
pub struct Context {
    pub config: ComandaConfig,
    pub dashboard: Dashboard,
}

impl Context {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = load_config_with_warning();
        if let Some(url) = matches.get_one::<String>("gateway") {
            config.gateway.base_url = Some(url.clone());
        }

        if let Err(e) = config.validate() {
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            error!(event = "cli.config.invalid", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }

        let client = GatewayClient::from_config(&config).map_err(|e| {
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            events::log_app_error(&e);
            e
        })?;

        let dashboard = Dashboard::new(Arc::new(client), DashboardSettings::from_config(&config));
        Ok(Self { config, dashboard })
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> ComandaConfig {
    match ComandaConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!(
                    "Warning: Could not load config: {}. Using defaults.",
                    e
                ))
            );
            eprintln!(
                "{}",
                color::hint(
                    "Tip: Check ~/.comanda/config.toml and ./.comanda/config.toml for syntax errors."
                )
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ComandaConfig::default()
        }
    }
}

/// Validation problems print as warnings, upstream failures as errors.
pub fn report_action_error(e: &ActionError) {
    events::log_app_error(e);
    if e.is_validation() {
        eprintln!("{}", color::warning(&format!("⚠️  {}", e)));
    } else {
        eprintln!("{}", color::error(&format!("❌ {}", e)));
    }
}

pub fn report_api_error(context: &str, e: &ApiError) {
    events::log_app_error(e);
    eprintln!("{}", color::error(&format!("❌ {}: {}", context, e)));
}

pub fn print_view(result: Result<Panel, ActionError>) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(panel) => {
            render::print_panel(&panel);
            Ok(())
        }
        Err(e) => {
            report_action_error(&e);
            Err(e.into())
        }
    }
}

/// Print a raw service payload as pretty JSON.
pub fn print_json<T: Serialize>(
    context: &str,
    result: Result<T, ApiError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            report_api_error(context, &e);
            Err(e.into())
        }
    }
}

/// Print the alerts an action raised.
pub async fn print_alerts(dashboard: &Dashboard) {
    let state = dashboard.snapshot().await;
    render::print_alerts(state.alerts.all());
}

/// Order form from `--id`, `--table`, `--customer` and repeated `--item`.
pub fn order_form(matches: &ArgMatches) -> OrderForm {
    OrderForm {
        order_id: matches
            .get_one::<String>("id")
            .cloned()
            .unwrap_or_else(generate_order_id),
        table: matches
            .get_one::<String>("table")
            .cloned()
            .unwrap_or_default(),
        customer_id: matches
            .get_one::<String>("customer")
            .cloned()
            .unwrap_or_default(),
        items: matches
            .get_many::<String>("item")
            .map(|values| values.map(|s| parse_item(s)).collect())
            .unwrap_or_default(),
    }
}
