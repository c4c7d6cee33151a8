use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Placeholder shown for anything the endpoint did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Opaque record identifier, only used as a render key and highlight target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out time-based ids that never repeat, even within one millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn next_id(&mut self, now: DateTime<Utc>) -> RecordId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        self.last = millis.max(self.last + 1);
        RecordId(self.last)
    }
}

/// A reported value: a number, some other non-empty value kept as text, or
/// the placeholder when the endpoint sent nothing usable.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Value(f64),
    Text(String),
    Unavailable,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(v) => write!(f, "{v}"),
            Reading::Text(s) => f.write_str(s),
            Reading::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reading::Value(v) => serializer.serialize_f64(*v),
            Reading::Text(s) => serializer.serialize_str(s),
            Reading::Unavailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Current conditions for one city as reported by the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub description: String,
    pub temperature: Reading,
    pub pressure: Reading,
}

/// One city's captured snapshot plus its user-editable description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    pub id: RecordId,
    pub city: String,
    pub description: String,
    pub temperature: Reading,
    pub pressure: Reading,
    pub captured_at: DateTime<Utc>,
}

impl WeatherRecord {
    pub fn from_report(
        id: RecordId,
        city: impl Into<String>,
        report: WeatherReport,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            city: city.into(),
            description: report.description,
            temperature: report.temperature,
            pressure: report.pressure,
            captured_at,
        }
    }

    pub fn age_hours(&self, now: DateTime<Utc>) -> i64 {
        data_age_hours(self.captured_at, now)
    }
}

/// Whole hours elapsed between capture and `now`, rounded down.
pub fn data_age_hours(captured_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_ms = (now - captured_at).num_milliseconds();
    let age = elapsed_ms.div_euclid(MILLIS_PER_HOUR);
    tracing::debug!(%captured_at, age_hours = age, "computed data age");
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, h, m, 0).unwrap()
    }

    #[test]
    fn age_is_floored_to_whole_hours() {
        assert_eq!(data_age_hours(at(10, 0), at(12, 5)), 2);
        assert_eq!(data_age_hours(at(10, 0), at(10, 59)), 0);
        assert_eq!(data_age_hours(at(10, 0), at(11, 0)), 1);
    }

    #[test]
    fn fresh_record_is_zero_hours_old() {
        let now = Utc::now();
        assert_eq!(data_age_hours(now, now), 0);
    }

    #[test]
    fn age_just_under_an_hour_is_zero() {
        let captured = at(8, 0);
        let now = captured + Duration::milliseconds(MILLIS_PER_HOUR - 1);
        assert_eq!(data_age_hours(captured, now), 0);
    }

    #[test]
    fn ids_are_time_based_and_strictly_increasing() {
        let mut ids = IdGenerator::default();
        let now = at(9, 30);

        let first = ids.next_id(now);
        let second = ids.next_id(now);

        assert_eq!(first.get(), now.timestamp_millis() as u64);
        assert_eq!(second.get(), first.get() + 1);

        let later = ids.next_id(now + Duration::seconds(1));
        assert_eq!(later.get(), now.timestamp_millis() as u64 + 1000);
    }

    #[test]
    fn unavailable_reading_displays_placeholder() {
        assert_eq!(Reading::Unavailable.to_string(), "N/A");
        assert_eq!(Reading::Value(15.0).to_string(), "15");
        assert_eq!(Reading::Value(1012.5).to_string(), "1012.5");
        assert_eq!(Reading::Text("1012".into()).to_string(), "1012");
    }

    #[test]
    fn record_serializes_placeholder_as_string() {
        let report = WeatherReport {
            description: "Clear".into(),
            temperature: Reading::Value(15.0),
            pressure: Reading::Unavailable,
        };
        let record = WeatherRecord::from_report(RecordId::new(7), "London", report, at(10, 0));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["city"], "London");
        assert_eq!(json["temperature"], 15.0);
        assert_eq!(json["pressure"], "N/A");
    }
}
