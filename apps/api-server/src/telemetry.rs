//! Log output for the API process.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,api_server=debug,bloglist_infra=debug";

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// JSON lines when `LOG_FORMAT=json`, human-readable otherwise.
    pub json_logs: bool,
    pub service_name: String,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        let json_logs = matches!(
            std::env::var("LOG_FORMAT"),
            Ok(format) if format.eq_ignore_ascii_case("json")
        );
        let service_name =
            std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "bloglist-api".to_owned());

        Self {
            json_logs,
            service_name,
        }
    }
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init_telemetry(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (json, pretty) = if config.json_logs {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer().pretty()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging ready"
    );
}
