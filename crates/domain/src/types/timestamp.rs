//! Event timestamps
//!
//! Callers may hand over either a real instant or free-form text. Text is
//! parsed lazily, when the event is converted to its wire form, and anything
//! that cannot be parsed is dropped from the output rather than rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Wire format: ISO-8601, UTC, microsecond precision, trailing `Z`
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

// `%z` accepts both `+0200` and `+02:00`
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
    "%Y%m%dT%H%M%S%.f%z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// A timestamp value assigned to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Instant(DateTime<Utc>),
    Text(String),
}

impl Timestamp {
    /// Whether the value counts as "set" for required-field checks.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Instant(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Resolve to a UTC instant, or `None` when the text is not a timestamp.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Instant(instant) => Some(*instant),
            Self::Text(text) => parse_timestamp(text),
        }
    }

    /// Render in the API's wire format.
    pub fn to_wire(&self) -> Option<String> {
        self.to_utc().map(|instant| instant.format(WIRE_TIMESTAMP_FORMAT).to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parse ISO-8601-ish text into a UTC instant.
///
/// Accepts RFC 3339 and other ISO-8601 forms with an offset or a `Z`
/// designator (extended or basic format, minute or second precision),
/// naive date-times (taken as UTC), bare dates (midnight UTC) and integer
/// Unix epoch seconds.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(text, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    // `Z` designator: the rest is a UTC wall-clock time
    let naive_text = text.strip_suffix(['Z', 'z']).map_or(text, str::trim_end);
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_text, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    text.parse::<i64>().ok().and_then(|secs| DateTime::from_timestamp(secs, 0))
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn renders_instants_with_microseconds() {
        let instant = Utc.with_ymd_and_hms(2013, 2, 8, 9, 30, 26).unwrap();
        assert_eq!(
            Timestamp::from(instant).to_wire().as_deref(),
            Some("2013-02-08T09:30:26.000000Z")
        );
    }

    #[test]
    fn converts_offsets_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2013, 2, 8, 11, 30, 26).unwrap();
        assert_eq!(
            Timestamp::from(local).to_wire().as_deref(),
            Some("2013-02-08T09:30:26.000000Z")
        );

        let text = Timestamp::from("2013-02-08T11:30:26.5+02:00");
        assert_eq!(text.to_wire().as_deref(), Some("2013-02-08T09:30:26.500000Z"));
    }

    #[test]
    fn accepts_naive_and_date_only_text() {
        assert_eq!(
            Timestamp::from("2013-02-08 09:30:26").to_wire().as_deref(),
            Some("2013-02-08T09:30:26.000000Z")
        );
        assert_eq!(
            Timestamp::from("2013-02-08T09:30:26.123456").to_wire().as_deref(),
            Some("2013-02-08T09:30:26.123456Z")
        );
        assert_eq!(
            Timestamp::from("2013-02-08").to_wire().as_deref(),
            Some("2013-02-08T00:00:00.000000Z")
        );
    }

    #[test]
    fn accepts_other_iso_8601_forms() {
        for text in [
            "2013-02-08T11:30:26+0200",
            "2013-02-08T11:30:26 +02:00",
            "2013-02-08 11:30:26+02:00",
            "2013-02-08T09:30:26Z",
            "20130208T093026Z",
            "20130208T113026+0200",
        ] {
            assert_eq!(
                Timestamp::from(text).to_wire().as_deref(),
                Some("2013-02-08T09:30:26.000000Z"),
                "{text}"
            );
        }

        for text in ["2013-02-08T09:30Z", "2013-02-08T11:30+02:00", "2013-02-08 09:30Z"] {
            assert_eq!(
                Timestamp::from(text).to_wire().as_deref(),
                Some("2013-02-08T09:30:00.000000Z"),
                "{text}"
            );
        }
    }

    #[test]
    fn accepts_epoch_seconds() {
        assert_eq!(
            Timestamp::from("1360315826").to_wire().as_deref(),
            Some("2013-02-08T09:30:26.000000Z")
        );
    }

    #[test]
    fn unparseable_text_resolves_to_none() {
        assert_eq!(Timestamp::from("yesterday-ish").to_wire(), None);
        assert_eq!(Timestamp::from("2013-13-45").to_wire(), None);
    }

    #[test]
    fn blank_text_is_blank() {
        assert!(Timestamp::from("   ").is_blank());
        assert!(!Timestamp::from("not a date").is_blank());
        assert!(!Timestamp::from(Utc::now()).is_blank());
    }
}
