//! Internal Diesel row structs for the statistics table.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::statistics;

/// Row struct for reading statistics records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = statistics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StatisticRow {
    pub id: i64,
    pub sequence_limit: i64,
    pub int1: i64,
    pub int2: i64,
    pub str1: String,
    pub str2: String,
    pub hits: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for the first observation of a parameter tuple.
/// Timestamps come from the column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = statistics)]
pub(crate) struct NewStatisticRow<'a> {
    pub sequence_limit: i64,
    pub int1: i64,
    pub int2: i64,
    pub str1: &'a str,
    pub str2: &'a str,
    pub hits: i64,
}
