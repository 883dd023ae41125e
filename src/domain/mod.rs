//! Domain primitives and ports.
//!
//! Purpose: define the strongly typed core of the fizzbuzz service — the
//! validated parameter tuple, the sequence transform, the persisted
//! statistic entity, and the port handlers use to reach the statistic
//! store. Keep types immutable and document invariants in each type's
//! Rustdoc; adapters live under `inbound` and `outbound`.

pub mod error;
pub mod fizzbuzz;
pub mod ports;
pub mod statistic;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::fizzbuzz::ParameterSet;
pub use self::statistic::StatisticRecord;
pub use self::validation::{RawParameters, ValidationReport};
