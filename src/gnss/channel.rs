use regex::Regex;
use std::sync::OnceLock;

use super::decode::Axis;

/// Stations covered by the latest snapshot endpoint.
pub const SNAPSHOT_STATIONS: [&str; 5] = ["GNSS1", "GNSS2", "GNSS3", "GNSS4", "GNSS5"];

/// Channels carrying a position fix.
pub const POSITION_CHANNELS: [&str; 6] = ["LAT01", "LAT02", "LAT05", "LON01", "LON02", "LON05"];

/// The axis a channel reports, if any.
pub fn channel_axis(channel_id: &str) -> Option<Axis> {
    if channel_id.starts_with("LAT") {
        Some(Axis::Latitude)
    } else if channel_id.starts_with("LON") {
        Some(Axis::Longitude)
    } else {
        None
    }
}

fn channel_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[A-Z]{3}0(1|2|5)$").expect("invalid channel pattern"))
}

/// Three uppercase letters followed by `01`, `02` or `05`.
pub fn is_listed_channel(channel_id: &str) -> bool {
    channel_shape().is_match(channel_id)
}
