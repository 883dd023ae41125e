//! Server construction and endpoint wiring.

mod config;

pub use config::{AppConfig, ConfigError, ServerConfig};

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::list::list_numbers;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::statistics::get_statistics;

/// Construct an Actix HTTP server from the configuration.
///
/// The statistic store is injected once here and shared by every worker;
/// handlers only ever see the port trait object.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(config.statistics.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .service(list_numbers)
            .service(get_statistics)
            .service(ready)
            .service(live)
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
