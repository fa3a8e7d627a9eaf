//! Persistence layer: SQLite-backed packer and nozzle event storage.
//!
//! The schema lives in `migrations/` and is applied through [`MIGRATOR`] at
//! startup. The concrete store uses `sqlx::SqlitePool` for async access;
//! the connection string comes from configuration and defaults to a local
//! database file.

pub mod models;
pub mod sqlite;

/// Embedded schema migrations, applied at startup and by tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
