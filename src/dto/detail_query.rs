use chrono::{DateTime, Utc};

/// All readings of one channel on one station, optionally bounded in time.
///
/// Both bounds are inclusive. Nothing checks that `start <= end`; an inverted
/// range simply matches no rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailQuery {
    station_id: String,
    channel_id: String,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl DetailQuery {
    pub fn new(station_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        DetailQuery {
            station_id: station_id.into(),
            channel_id: channel_id.into(),
            start: None,
            end: None,
        }
    }

    pub fn starting_at(self, start: Option<DateTime<Utc>>) -> Self {
        DetailQuery { start, ..self }
    }

    pub fn ending_at(self, end: Option<DateTime<Utc>>) -> Self {
        DetailQuery { end, ..self }
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Whether `timestamp` falls inside the configured bounds.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| timestamp >= start)
            && self.end.map_or(true, |end| timestamp <= end)
    }
}
