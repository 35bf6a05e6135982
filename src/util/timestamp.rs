use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Nanoseconds since the epoch, saturating outside the representable range.
pub fn to_nanos(time: DateTime<Utc>) -> i64 {
    time.timestamp_nanos_opt().unwrap_or(if time.timestamp() > 0 {
        i64::MAX
    } else {
        i64::MIN
    })
}

/// Parse a caller-supplied timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and a bare
/// `YYYY-MM-DD` (midnight). Values without an offset are taken as UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(input) {
        return Some(time.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()),
            parse_timestamp("2024-05-01T12:00:00+02:00")
        );
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            parse_timestamp("2024-05-01T12:00:00Z")
        );
    }

    #[test]
    fn test_parse_naive() {
        let expected = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap());
        assert_eq!(expected, parse_timestamp("2024-05-01 12:30:15"));
        assert_eq!(expected, parse_timestamp("2024-05-01T12:30:15"));
    }

    #[test]
    fn test_parse_date_is_midnight() {
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
            parse_timestamp("2024-05-01")
        );
    }

    #[test]
    fn test_parse_garbage() {
        for input in ["", "yesterday", "2024-13-01", "01/05/2024", "1714557600"] {
            assert_eq!(None, parse_timestamp(input), "input = {:?}", input);
        }
    }

    #[test]
    fn test_to_nanos() {
        assert_eq!(0, to_nanos(Utc.timestamp_nanos(0)));
        assert_eq!(
            1_714_564_800_000_000_000,
            to_nanos(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(
            i64::MAX,
            to_nanos(Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap())
        );
    }
}
