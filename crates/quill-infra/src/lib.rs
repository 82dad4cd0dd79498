//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::InMemoryPostStore;

// Re-exports - Postgres
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
