//! Parametrized fizzbuzz HTTP service.
//!
//! Renders number-substitution sequences on `GET /list`, records which
//! parameter tuples were requested, and reports the most requested ones on
//! `GET /statistics`. The domain layer is transport and storage agnostic;
//! inbound and outbound adapters translate at the edges.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
