use std::collections::HashMap;

use crate::dto::Reading;

/// Keep only the most recent reading per `(station, channel)` pair.
///
/// Groups come out in the order they were first seen. When two readings of a
/// group share a timestamp, the one seen first is kept.
pub fn select_latest<I>(readings: I) -> Vec<Reading>
where
    I: IntoIterator<Item = Reading>,
{
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut latest: Vec<Reading> = Vec::new();

    for reading in readings {
        let key = (reading.station_id.clone(), reading.channel_id.clone());

        match positions.get(&key) {
            Some(&idx) => {
                if reading.timestamp > latest[idx].timestamp {
                    latest[idx] = reading;
                }
            }
            None => {
                positions.insert(key, latest.len());
                latest.push(reading);
            }
        }
    }

    latest
}
