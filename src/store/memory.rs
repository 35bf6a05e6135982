use itertools::Itertools;
use std::sync::Arc;

use super::{ReadingStore, StoreError};
use crate::{
    dto::{DetailQuery, Reading},
    gnss::select_latest,
};

/// Readings held in process, in insertion order.
#[derive(Clone, Default)]
pub struct MemoryStore {
    readings: Arc<Vec<Reading>>,
}

impl MemoryStore {
    pub fn new(readings: Vec<Reading>) -> Self {
        MemoryStore {
            readings: Arc::new(readings),
        }
    }

    fn latest_where<F>(&self, keep: F) -> Vec<Reading>
    where
        F: Fn(&Reading) -> bool,
    {
        select_latest(self.readings.iter().filter(|r| keep(r)).cloned())
            .into_iter()
            .sorted_by(|a, b| {
                (&a.station_id, &a.channel_id).cmp(&(&b.station_id, &b.channel_id))
            })
            .collect()
    }
}

impl ReadingStore for MemoryStore {
    async fn latest_for_stations(&self, station_ids: &[&str]) -> Result<Vec<Reading>, StoreError> {
        Ok(self.latest_where(|r| station_ids.contains(&r.station_id.as_str())))
    }

    async fn latest_for_channels(&self, channel_ids: &[&str]) -> Result<Vec<Reading>, StoreError> {
        Ok(self.latest_where(|r| channel_ids.contains(&r.channel_id.as_str())))
    }

    async fn station_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .readings
            .iter()
            .map(|r| r.station_id.clone())
            .sorted()
            .dedup()
            .collect())
    }

    async fn channel_ids(&self, station_id: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .readings
            .iter()
            .filter(|r| r.station_id == station_id)
            .map(|r| r.channel_id.clone())
            .sorted()
            .dedup()
            .collect())
    }

    async fn readings(&self, query: &DetailQuery) -> Result<Vec<Reading>, StoreError> {
        Ok(self
            .readings
            .iter()
            .filter(|r| {
                r.station_id == query.station_id()
                    && r.channel_id == query.channel_id()
                    && query.contains(r.timestamp)
            })
            .cloned()
            .sorted_by_key(|r| r.timestamp)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gnss::channel::{POSITION_CHANNELS, SNAPSHOT_STATIONS};
    use crate::store::testing::{at, sample_readings, sqlite_store};

    #[tokio::test]
    async fn test_agrees_with_sqlite_store() {
        let memory = MemoryStore::new(sample_readings());
        let sqlite = sqlite_store(&sample_readings()).await;

        assert_eq!(
            sqlite.latest_for_stations(&SNAPSHOT_STATIONS).await.unwrap(),
            memory.latest_for_stations(&SNAPSHOT_STATIONS).await.unwrap()
        );
        assert_eq!(
            sqlite.latest_for_channels(&POSITION_CHANNELS).await.unwrap(),
            memory.latest_for_channels(&POSITION_CHANNELS).await.unwrap()
        );
        assert_eq!(
            sqlite.station_ids().await.unwrap(),
            memory.station_ids().await.unwrap()
        );
        assert_eq!(
            sqlite.channel_ids("GNSS1").await.unwrap(),
            memory.channel_ids("GNSS1").await.unwrap()
        );

        let query = DetailQuery::new("GNSS1", "LAT01")
            .starting_at(Some(at(9, 0)))
            .ending_at(Some(at(10, 0)));
        assert_eq!(
            sqlite.readings(&query).await.unwrap(),
            memory.readings(&query).await.unwrap()
        );
    }
}
