//! PostgreSQL persistence adapter using Diesel.
//!
//! Thin adapter around the statistic store port: translates between Diesel
//! rows and domain types and maps database errors onto the port's error
//! type. `schema.rs` and `models.rs` are internal to this module and never
//! reach the domain.

mod diesel_statistics_repository;
mod models;
mod pool;
mod schema;

pub use diesel_statistics_repository::DieselStatisticsRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Embedded schema migrations, applied once at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure while applying schema migrations. Startup-fatal by policy.
#[derive(Debug, thiserror::Error)]
#[error("failed to run database migrations: {message}")]
pub struct MigrationError {
    message: String,
}

/// Apply pending migrations over a dedicated connection.
///
/// Runs on a blocking thread because the migration harness drives the
/// async connection synchronously.
///
/// # Errors
/// Returns [`MigrationError`] when the connection cannot be established or
/// a migration fails to apply.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn =
            AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url).map_err(|err| {
                MigrationError {
                    message: err.to_string(),
                }
            })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(drop)
            .map_err(|err| MigrationError {
                message: err.to_string(),
            })
    })
    .await
    .map_err(|err| MigrationError {
        message: err.to_string(),
    })?
}
