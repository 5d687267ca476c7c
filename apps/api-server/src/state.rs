//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::database::DatabaseConfig;
use quill_infra::repository::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use quill_infra::database::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// With `DATABASE_URL` configured (and the `postgres` feature on),
    /// posts live in PostgreSQL; otherwise they live in process memory.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let posts = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            posts,
                            db: Some(conn),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
        }

        tracing::info!("Application state initialized (in-memory)");

        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// State backed by a given repository; used by handler tests.
    #[cfg(test)]
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
