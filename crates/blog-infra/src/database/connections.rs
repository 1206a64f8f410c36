use std::time::Duration;

#[cfg(feature = "postgres")]
use blog_core::RepoError;
#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn};
#[cfg(feature = "postgres")]
use tokio::sync::OnceCell;

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 100,
            min_connections: 10,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Process-wide handle to the document store.
///
/// Nothing is dialed until the first repository call. Concurrent first calls
/// share a single connection attempt; a failed attempt is not remembered, so
/// the next call tries again. A missing URL is reported as
/// [`RepoError::StoreUnavailable`] at call time, never at startup.
///
/// # Example
/// ```ignore
/// let store = DocumentStore::new(config);
/// let conn = store.connection().await?;
/// ```
#[cfg(feature = "postgres")]
pub struct DocumentStore {
    config: DatabaseConfig,
    conn: OnceCell<DbConn>,
}

#[cfg(feature = "postgres")]
impl DocumentStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            conn: OnceCell::new(),
        }
    }

    /// Wrap an already established connection (mock databases in tests).
    pub fn from_connection(conn: DbConn) -> Self {
        Self {
            config: DatabaseConfig::default(),
            conn: OnceCell::new_with(Some(conn)),
        }
    }

    /// Get the shared connection, establishing it on first use.
    pub async fn connection(&self) -> Result<&DbConn, RepoError> {
        self.conn.get_or_try_init(|| self.connect()).await
    }

    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    /// Round-trip to the store. Used by the health endpoint.
    pub async fn ping(&self) -> Result<(), RepoError> {
        let conn = self.connection().await?;
        conn.execute_unprepared("SELECT 1")
            .await
            .map_err(|e| RepoError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }

    async fn connect(&self) -> Result<DbConn, RepoError> {
        let url = self.config.url.as_deref().ok_or_else(|| {
            RepoError::StoreUnavailable("DATABASE_URL environment variable is not defined".into())
        })?;

        tracing::info!("Connecting to document store...");

        let opts = ConnectOptions::new(url)
            .max_connections(self.config.max_connections)
            .min_connections(self.config.min_connections)
            .connect_timeout(self.config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        match Database::connect(opts).await {
            Ok(conn) => {
                tracing::info!(
                    "Document store connected (pool: {})",
                    self.config.max_connections
                );
                Ok(conn)
            }
            Err(e) => {
                tracing::error!(error = %e, "Document store connection failed");
                Err(RepoError::StoreUnavailable(e.to_string()))
            }
        }
    }
}
