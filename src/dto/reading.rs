use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// One sample of one channel on one station.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reading {
    #[serde(rename = "gnss_id")]
    pub station_id: String,
    #[serde(rename = "sensor_id")]
    pub channel_id: String,
    pub value: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn new(
        station_id: impl Into<String>,
        channel_id: impl Into<String>,
        value: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Reading {
            station_id: station_id.into(),
            channel_id: channel_id.into(),
            value: value.map(str::to_string),
            timestamp,
        }
    }
}

impl FromRow<'_, SqliteRow> for Reading {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let station_id = row.try_get::<String, _>("gnss_id")?;
        let channel_id = row.try_get::<String, _>("sensor_id")?;
        let value = row.try_get::<Option<String>, _>("value")?;
        let timestamp = row.try_get::<i64, _>("timestamp")?;

        Ok(Reading {
            station_id,
            channel_id,
            value,
            timestamp: Utc.timestamp_nanos(timestamp),
        })
    }
}
