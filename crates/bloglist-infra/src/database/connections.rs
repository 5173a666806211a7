#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, DbConn, DbErr};

/// Connection settings for the main database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Owned handle to the connection pool.
///
/// Opened once in `main`, handed to the repositories as cheap clones of the
/// inner connection, and closed explicitly after the HTTP server stops.
///
/// # Example
/// ```ignore
/// let db = Database::connect(&config).await?;
/// let blogs = PostgresBlogRepository::new(db.conn().clone());
/// // ... serve requests ...
/// db.close().await;
/// ```
#[cfg(feature = "postgres")]
pub struct Database {
    conn: DbConn,
}

#[cfg(feature = "postgres")]
impl Database {
    /// Open the pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let conn = sea_orm::Database::connect(opts).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "Database connected"
        );

        Ok(Self { conn })
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Close the pool. Repositories holding clones stop working after this.
    pub async fn close(self) {
        match self.conn.close().await {
            Ok(()) => tracing::info!("Database connection closed"),
            Err(e) => tracing::error!("Failed to close database connection: {}", e),
        }
    }
}
