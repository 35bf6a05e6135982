use tracing::debug;

use crate::{
    dto::{Coordinate, DetailQuery, Reading},
    gnss::{
        aggregate,
        channel::{is_listed_channel, POSITION_CHANNELS, SNAPSHOT_STATIONS},
    },
    store::{ReadingStore, StoreError},
};

/// Read operations exposed over HTTP.
#[derive(Clone)]
pub struct QueryService<S> {
    store: S,
}

impl<S: ReadingStore> QueryService<S> {
    pub fn new(store: S) -> Self {
        QueryService { store }
    }

    /// Latest raw reading of every channel on the snapshot stations.
    pub async fn latest_snapshot(&self) -> Result<Vec<Reading>, StoreError> {
        self.store.latest_for_stations(&SNAPSHOT_STATIONS).await
    }

    /// Decoded position of every station with a complete latest fix.
    pub async fn coordinates(&self) -> Result<Vec<Coordinate>, StoreError> {
        let latest = self.store.latest_for_channels(&POSITION_CHANNELS).await?;
        let coordinates = aggregate(&latest);

        debug!(
            "Decoded {} coordinates from {} readings",
            coordinates.len(),
            latest.len()
        );

        Ok(coordinates)
    }

    pub async fn station_ids(&self) -> Result<Vec<String>, StoreError> {
        self.store.station_ids().await
    }

    /// Channels of `station_id` that look like regular sensor channels.
    pub async fn channel_ids(&self, station_id: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .store
            .channel_ids(station_id)
            .await?
            .into_iter()
            .filter(|channel_id| is_listed_channel(channel_id))
            .collect())
    }

    pub async fn detail(&self, query: &DetailQuery) -> Result<Vec<Reading>, StoreError> {
        self.store.readings(query).await
    }
}
