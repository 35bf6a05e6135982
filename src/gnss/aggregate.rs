use itertools::Itertools;
use std::collections::HashMap;
use tracing::debug;

use super::{
    channel::channel_axis,
    decode::{decode_angle, Axis},
};
use crate::dto::{Coordinate, Reading};

#[derive(Default)]
struct PartialFix {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Combine latest-only readings into one coordinate per station.
///
/// A station's readings are visited in ascending channel id order and the last
/// decodable value per axis is kept, so `LAT05` takes precedence over `LAT01`.
/// Stations lacking a finite latitude or longitude are left out. Output follows
/// the order in which stations first appear in `readings`.
pub fn aggregate(readings: &[Reading]) -> Vec<Coordinate> {
    let stations: Vec<&str> = readings
        .iter()
        .map(|r| r.station_id.as_str())
        .unique()
        .collect();

    let mut by_station: HashMap<&str, Vec<&Reading>> = HashMap::new();
    for reading in readings {
        by_station
            .entry(reading.station_id.as_str())
            .or_default()
            .push(reading);
    }

    stations
        .into_iter()
        .filter_map(|station_id| {
            let fix = by_station
                .remove(station_id)
                .unwrap_or_default()
                .into_iter()
                .sorted_by(|a, b| a.channel_id.cmp(&b.channel_id))
                .fold(PartialFix::default(), apply_reading);

            match fix {
                PartialFix {
                    latitude: Some(latitude),
                    longitude: Some(longitude),
                } if latitude.is_finite() && longitude.is_finite() => Some(Coordinate {
                    station_id: station_id.to_string(),
                    latitude,
                    longitude,
                }),
                _ => {
                    debug!("No complete position for station {}", station_id);
                    None
                }
            }
        })
        .collect()
}

fn apply_reading(mut fix: PartialFix, reading: &Reading) -> PartialFix {
    let Some(axis) = channel_axis(&reading.channel_id) else {
        return fix;
    };

    let decoded = reading
        .value
        .as_deref()
        .and_then(|value| decode_angle(value, axis));

    match (axis, decoded) {
        (Axis::Latitude, Some(latitude)) => fix.latitude = Some(latitude),
        (Axis::Longitude, Some(longitude)) => fix.longitude = Some(longitude),
        (_, None) => debug!(
            "Undecodable {} reading {:?} for station {}",
            reading.channel_id, reading.value, reading.station_id
        ),
    }

    fix
}
