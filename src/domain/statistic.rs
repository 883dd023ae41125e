//! Persisted request statistics.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::ParameterSet;

/// One persisted parameter tuple together with its observation count.
///
/// ## Lifecycle
/// Created with one hit the first time a tuple is observed, incremented on
/// every later observation, never deleted by this service. At most one
/// record exists per distinct tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticRecord {
    /// Store-assigned identity.
    pub id: i64,
    /// The observed parameter tuple.
    pub parameters: ParameterSet,
    /// Number of times the tuple has been requested, at least 1.
    pub hits: i64,
    /// First observation time.
    pub created_at: DateTime<Utc>,
    /// Most recent observation time.
    pub updated_at: DateTime<Utc>,
}

impl StatisticRecord {
    /// Render the record as one statistics report line (without the
    /// `Request n°…` prefix, which depends on the record's rank).
    pub fn report_line(&self) -> String {
        format!(
            "limit={}, int1={}, int2={}, str1={}, str2={}, hits={}, created_at={}, updated_at={}",
            self.parameters.limit,
            self.parameters.int1,
            self.parameters.int2,
            self.parameters.str1,
            self.parameters.str2,
            self.hits,
            format_timestamp(&self.created_at),
            format_timestamp(&self.updated_at),
        )
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}
