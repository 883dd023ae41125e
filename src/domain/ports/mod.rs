//! Domain ports for the hexagonal boundary.

mod statistics_repository;

pub use statistics_repository::{
    InMemoryStatisticsRepository, StatisticsRepository, StatisticsRepositoryError,
};

#[cfg(test)]
pub use statistics_repository::MockStatisticsRepository;
