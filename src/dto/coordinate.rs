use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "gnss_id")]
    pub station_id: String,
    pub latitude: f64,
    pub longitude: f64,
}
