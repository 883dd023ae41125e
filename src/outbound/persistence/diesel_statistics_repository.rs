//! PostgreSQL-backed [`StatisticsRepository`] implementation.
//!
//! The find-or-create-and-increment step is a single
//! `INSERT … ON CONFLICT … DO UPDATE` over the unique parameter index, so
//! concurrent observations of the same tuple can neither duplicate the
//! record nor lose an increment.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{StatisticsRepository, StatisticsRepositoryError};
use crate::domain::{ParameterSet, StatisticRecord};

use super::models::{NewStatisticRow, StatisticRow};
use super::pool::{DbPool, PoolError};
use super::schema::statistics;

/// Diesel adapter for the statistic store port.
#[derive(Clone)]
pub struct DieselStatisticsRepository {
    pool: DbPool,
}

impl DieselStatisticsRepository {
    /// Create a repository around a connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors onto the port error.
fn map_pool_error(error: PoolError) -> StatisticsRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StatisticsRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors onto the port error, logging the raw cause at debug
/// level so response bodies never carry database detail.
fn map_diesel_error(error: diesel::result::Error) -> StatisticsRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StatisticsRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => StatisticsRepositoryError::query("record not found"),
        _ => StatisticsRepositoryError::query("database error"),
    }
}

/// Convert a database row into the domain record.
fn row_to_record(row: StatisticRow) -> StatisticRecord {
    StatisticRecord {
        id: row.id,
        parameters: ParameterSet {
            limit: row.sequence_limit,
            int1: row.int1,
            int2: row.int2,
            str1: row.str1,
            str2: row.str2,
        },
        hits: row.hits,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl StatisticsRepository for DieselStatisticsRepository {
    async fn record_observation(
        &self,
        parameters: &ParameterSet,
    ) -> Result<(), StatisticsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewStatisticRow {
            sequence_limit: parameters.limit,
            int1: parameters.int1,
            int2: parameters.int2,
            str1: &parameters.str1,
            str2: &parameters.str2,
            hits: 1,
        };

        diesel::insert_into(statistics::table)
            .values(&new_row)
            .on_conflict((
                statistics::sequence_limit,
                statistics::int1,
                statistics::int2,
                statistics::str1,
                statistics::str2,
            ))
            .do_update()
            .set((
                statistics::hits.eq(statistics::hits + 1),
                statistics::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map(drop)
            .map_err(map_diesel_error)
    }

    async fn top_statistics(&self) -> Result<Vec<StatisticRecord>, StatisticsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // SELECT * FROM statistics WHERE hits = (SELECT MAX(hits) FROM statistics)
        // Diesel requires an alias for a subquery over the same table.
        let inner = diesel::alias!(statistics as inner_statistics);
        let max_hits = inner
            .select(diesel::dsl::max(inner.field(statistics::hits)))
            .single_value();

        let rows: Vec<StatisticRow> = statistics::table
            .filter(statistics::hits.nullable().eq(max_hits))
            .order(statistics::id.asc())
            .select(StatisticRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_record).collect())
    }
}
