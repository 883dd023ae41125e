//! HTTP inbound adapter exposing the plain-text endpoints.

pub mod error;
pub mod health;
pub mod list;
pub mod state;
pub mod statistics;

pub use error::{ApiError, ApiResult};
