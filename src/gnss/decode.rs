use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

fn numeral_pattern() -> &'static Regex {
    static NUMERAL: OnceLock<Regex> = OnceLock::new();
    NUMERAL.get_or_init(|| Regex::new(r"([0-9]+\.[0-9]+)").expect("invalid numeral pattern"))
}

/// Decode a packed degrees-minutes reading (`DDDMM.mmmm`) into decimal degrees.
///
/// The first `digits.digits` numeral in `raw` is used; anything else in the
/// string is ignored. Returns `None` when no such numeral exists.
///
/// Latitudes are negated: the receivers in this deployment report southern
/// latitudes without a sign. Longitudes are returned as decoded. No range
/// check is applied to either axis.
pub fn decode_angle(raw: &str, axis: Axis) -> Option<f64> {
    let numeral = numeral_pattern().captures(raw)?.get(1)?.as_str();
    let num: f64 = numeral.parse().ok()?;

    let degrees = (num / 100.0).floor();
    let minutes = num - degrees * 100.0;
    let decimal = degrees + minutes / 60.0;

    match axis {
        Axis::Latitude => Some(-decimal),
        Axis::Longitude => Some(decimal),
    }
}
