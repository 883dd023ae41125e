//! Service entry point: configuration, database bootstrap, HTTP server.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use tokio::time::{Instant, sleep};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fizzbuzz_server::inbound::http::health::HealthState;
use fizzbuzz_server::outbound::persistence::{
    DbPool, DieselStatisticsRepository, PoolConfig, PoolError, run_migrations,
};
use fizzbuzz_server::server::{AppConfig, ServerConfig, create_server};

/// Fixed listening port.
const PORT: u16 = 8080;
/// Delay between database connection attempts.
const DB_RETRY_INTERVAL: Duration = Duration::from_secs(10);
/// Overall budget for the database to become reachable at startup.
const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(300);

/// Build the pool and wait for the database to accept connections.
///
/// The database container may still be initialising when this service
/// starts; keep probing until the budget runs out.
async fn connect_with_retry(database_url: &str) -> Result<DbPool, PoolError> {
    let deadline = Instant::now() + DB_CONNECT_TIMEOUT;
    loop {
        let failure = match DbPool::new(PoolConfig::new(database_url)).await {
            Ok(pool) => {
                let probe = pool.get().await.map(drop);
                match probe {
                    Ok(()) => return Ok(pool),
                    Err(err) => err,
                }
            }
            Err(err) => err,
        };

        if Instant::now() + DB_RETRY_INTERVAL > deadline {
            return Err(failure);
        }
        warn!(error = %failure, "database not reachable yet, retrying");
        sleep(DB_RETRY_INTERVAL).await;
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let database_url = config.database_url();

    let pool = connect_with_retry(&database_url)
        .await
        .map_err(std::io::Error::other)?;
    run_migrations(&database_url)
        .await
        .map_err(std::io::Error::other)?;

    let statistics = Arc::new(DieselStatisticsRepository::new(pool));
    let health_state = web::Data::new(HealthState::new());
    let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));

    info!(port = PORT, "serving http server");
    let server = create_server(health_state, ServerConfig::new(bind_addr, statistics))?;
    server.await
}
