//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::DatabaseConfig;

#[cfg(feature = "postgres")]
use blog_infra::{DocumentStore, PostgresPostRepository};

#[cfg(not(feature = "postgres"))]
use blog_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub store: Option<Arc<DocumentStore>>,
}

impl AppState {
    /// State around an arbitrary repository, with no store handle of its own.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            store: None,
        }
    }

    /// Build the application state. No connection is made here; the store is
    /// dialed by the first request that needs it.
    #[cfg(feature = "postgres")]
    pub fn new(db_config: DatabaseConfig) -> Self {
        if db_config.url.is_none() {
            tracing::warn!("DATABASE_URL not set. Post requests will fail until it is configured.");
        }

        let store = Arc::new(DocumentStore::new(db_config));
        let posts = Arc::new(PostgresPostRepository::new(store.clone()));

        tracing::info!("Application state initialized");

        Self {
            store: Some(store),
            ..Self::with_repository(posts)
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub fn new(db_config: DatabaseConfig) -> Self {
        if db_config.url.is_some() {
            tracing::warn!("Built without postgres feature - DATABASE_URL is ignored");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");

        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// Check the store answers. Repositories without a store handle are
    /// always reachable.
    #[cfg(feature = "postgres")]
    pub async fn ping_store(&self) -> Result<(), RepoError> {
        match &self.store {
            Some(store) => store.ping().await,
            None => Ok(()),
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn ping_store(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(all(test, feature = "postgres"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_state_starts_and_fails_lazily() {
        let state = AppState::new(DatabaseConfig::default());

        assert!(!state.store.as_ref().unwrap().is_connected());
        assert!(matches!(
            state.posts.list_all().await,
            Err(RepoError::StoreUnavailable(_))
        ));
        assert!(state.ping_store().await.is_err());
    }
}
