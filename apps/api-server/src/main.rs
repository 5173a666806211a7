//! Bloglist HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(host = %config.host, port = config.port, "Starting bloglist server");

    #[cfg(feature = "postgres")]
    let db = connect_database(&config).await;

    #[cfg(feature = "postgres")]
    let state = match &db {
        Some(db) => AppState::with_database(db, config.jwt.clone()),
        None => AppState::in_memory(config.jwt.clone()),
    };

    #[cfg(not(feature = "postgres"))]
    let state = AppState::in_memory(config.jwt.clone());

    tracing::info!(store = state.store, "Repositories ready");

    let result = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    #[cfg(feature = "postgres")]
    {
        if let Some(db) = db {
            db.close().await;
        }
    }

    tracing::info!("Server stopped");
    result
}

/// `None` means the in-memory store is used instead.
#[cfg(feature = "postgres")]
async fn connect_database(config: &AppConfig) -> Option<bloglist_infra::Database> {
    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL is unset, blogs and users will not persist");
        return None;
    };

    match bloglist_infra::Database::connect(db_config).await {
        Ok(db) => Some(db),
        Err(e) => {
            tracing::error!(error = %e, "Database unreachable, falling back to memory");
            None
        }
    }
}
