//! Read access to the `gnss` readings table.

use std::future::Future;
use thiserror::Error;

use crate::dto::{DetailQuery, Reading};

#[cfg(test)]
pub mod memory;
pub mod sqlite;

pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A time-series store of raw station readings.
///
/// Every method issues read-only queries. Results are complete or the call
/// fails; there are no partial results.
pub trait ReadingStore: Clone + Send + Sync + 'static {
    /// Most recent reading per `(station, channel)` for the given stations,
    /// ordered by station then channel.
    fn latest_for_stations(
        &self,
        station_ids: &[&str],
    ) -> impl Future<Output = Result<Vec<Reading>, StoreError>> + Send;

    /// Most recent reading per `(station, channel)` for the given channels on
    /// any station, ordered by station then channel.
    fn latest_for_channels(
        &self,
        channel_ids: &[&str],
    ) -> impl Future<Output = Result<Vec<Reading>, StoreError>> + Send;

    fn station_ids(&self) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    fn channel_ids(
        &self,
        station_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Readings matching `query`, oldest first.
    fn readings(
        &self,
        query: &DetailQuery,
    ) -> impl Future<Output = Result<Vec<Reading>, StoreError>> + Send;
}
