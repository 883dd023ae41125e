//! Port for the statistic store.
//!
//! [`StatisticsRepository`] is the contract handlers use to record which
//! parameter tuples were requested and to query the most requested ones.
//! Adapters provide durable storage; [`InMemoryStatisticsRepository`] backs
//! tests and database-less runs.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{ParameterSet, StatisticRecord};

/// Errors raised by statistic store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatisticsRepositoryError {
    /// Store connection could not be established.
    #[error("statistics repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("statistics repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl StatisticsRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for recording and querying request statistics.
///
/// `record_observation` is a single find-or-create-and-increment step.
/// Implementations must make it atomic: two concurrent observations of the
/// same tuple may neither produce duplicate records nor lose an increment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Record one observation of `parameters`: create the record with one
    /// hit on first sight, increment its counter and refresh its update
    /// timestamp afterwards.
    async fn record_observation(
        &self,
        parameters: &ParameterSet,
    ) -> Result<(), StatisticsRepositoryError>;

    /// Return every record tied for the highest hit count, in stable
    /// insertion order. Empty when nothing has been recorded yet.
    async fn top_statistics(&self) -> Result<Vec<StatisticRecord>, StatisticsRepositoryError>;
}

/// Mutex-guarded in-memory statistic store.
///
/// Carries the full find-or-create semantics so endpoint tests can assert
/// hit counting without a database. The mutex serialises observations,
/// which satisfies the port's atomicity requirement.
#[derive(Debug, Default)]
pub struct InMemoryStatisticsRepository {
    records: Mutex<Vec<StatisticRecord>>,
}

impl InMemoryStatisticsRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StatisticRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StatisticsRepository for InMemoryStatisticsRepository {
    async fn record_observation(
        &self,
        parameters: &ParameterSet,
    ) -> Result<(), StatisticsRepositoryError> {
        let mut records = self.lock();
        let now = Utc::now();

        if let Some(record) = records
            .iter_mut()
            .find(|record| record.parameters == *parameters)
        {
            record.hits += 1;
            record.updated_at = now;
        } else {
            let id = records.len() as i64 + 1;
            records.push(StatisticRecord {
                id,
                parameters: parameters.clone(),
                hits: 1,
                created_at: now,
                updated_at: now,
            });
        }
        Ok(())
    }

    async fn top_statistics(&self) -> Result<Vec<StatisticRecord>, StatisticsRepositoryError> {
        let records = self.lock();
        let Some(max_hits) = records.iter().map(|record| record.hits).max() else {
            return Ok(Vec::new());
        };
        Ok(records
            .iter()
            .filter(|record| record.hits == max_hits)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters(limit: i64, str1: &str) -> ParameterSet {
        ParameterSet {
            limit,
            int1: 3,
            int2: 5,
            str1: str1.to_owned(),
            str2: "Buzz".to_owned(),
        }
    }

    #[tokio::test]
    async fn empty_store_yields_no_statistics() {
        let repo = InMemoryStatisticsRepository::new();
        let top = repo.top_statistics().await.expect("query succeeds");
        assert!(top.is_empty());
    }

    #[tokio::test]
    async fn repeated_observations_accumulate_hits() {
        let repo = InMemoryStatisticsRepository::new();
        let tuple = parameters(15, "Fizz");

        for _ in 0..3 {
            repo.record_observation(&tuple).await.expect("record succeeds");
        }

        let top = repo.top_statistics().await.expect("query succeeds");
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].hits, 3);
        assert_eq!(top[0].parameters, tuple);
        assert!(top[0].updated_at >= top[0].created_at);
    }

    #[tokio::test]
    async fn distinct_tuples_get_distinct_records() {
        let repo = InMemoryStatisticsRepository::new();
        repo.record_observation(&parameters(10, "Fizz"))
            .await
            .expect("record succeeds");
        repo.record_observation(&parameters(10, "Fizz"))
            .await
            .expect("record succeeds");
        repo.record_observation(&parameters(20, "Woof"))
            .await
            .expect("record succeeds");

        let top = repo.top_statistics().await.expect("query succeeds");
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].parameters.str1, "Fizz");
        assert_eq!(top[0].hits, 2);
    }

    #[tokio::test]
    async fn ties_return_every_record_in_insertion_order() {
        let repo = InMemoryStatisticsRepository::new();
        repo.record_observation(&parameters(10, "Fizz"))
            .await
            .expect("record succeeds");
        repo.record_observation(&parameters(20, "Woof"))
            .await
            .expect("record succeeds");

        let top = repo.top_statistics().await.expect("query succeeds");
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, 1);
        assert_eq!(top[1].id, 2);
    }

    #[test]
    fn error_constructors_render_their_messages() {
        let connection = StatisticsRepositoryError::connection("refused");
        let query = StatisticsRepositoryError::query("syntax");

        assert_eq!(
            connection.to_string(),
            "statistics repository connection failed: refused"
        );
        assert_eq!(query.to_string(), "statistics repository query failed: syntax");
    }
}
