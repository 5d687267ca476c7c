//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the in-memory repository and the PostgreSQL
//! integration.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod repository;

// Re-exports - In-Memory
pub use database::DatabaseConnections;
pub use repository::InMemoryPostRepository;

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
