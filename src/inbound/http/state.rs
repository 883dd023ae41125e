//! Shared HTTP adapter state.
//!
//! Handlers receive the statistic store through `actix_web::web::Data` so
//! they depend on the domain port alone and stay testable without I/O. The
//! store is constructed once at startup and injected here; no handler
//! reaches for ambient globals.

use std::sync::Arc;

use crate::domain::ports::StatisticsRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Statistic store shared by both endpoints.
    pub statistics: Arc<dyn StatisticsRepository>,
}

impl HttpState {
    /// Construct state around a statistic store implementation.
    pub fn new(statistics: Arc<dyn StatisticsRepository>) -> Self {
        Self { statistics }
    }
}
