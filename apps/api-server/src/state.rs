//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use quill_core::PostRepository;
use quill_core::ports::PostStore;
use quill_infra::{DatabaseConfig, InMemoryPostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
}

impl AppState {
    /// State over an explicitly chosen store.
    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: PostRepository::new(store),
        }
    }

    /// Build the application state with the configured store.
    ///
    /// A configured database that cannot be reached aborts startup.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> io::Result<Self> {
        let store = build_store(db_config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::with_store(store))
    }
}

#[cfg(feature = "postgres")]
async fn build_store(db_config: Option<&DatabaseConfig>) -> io::Result<Arc<dyn PostStore>> {
    use quill_infra::PostgresPostStore;
    use quill_infra::database::connect;

    match db_config {
        Some(config) => {
            let conn = connect(config).await.map_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
                io::Error::other(e)
            })?;
            Ok(Arc::new(PostgresPostStore::new(conn)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_store(db_config: Option<&DatabaseConfig>) -> io::Result<Arc<dyn PostStore>> {
    if db_config.is_some() {
        tracing::warn!("DATABASE_URL ignored - built without postgres feature");
    }
    tracing::info!("Running without postgres feature - using in-memory store");
    Ok(Arc::new(InMemoryPostStore::new()))
}
