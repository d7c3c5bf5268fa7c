//! # Pickup Timestamps
//!
//! Record-store documents carry dates in more than one shape: the store's own
//! `{seconds, nanoseconds}` wrapper, epoch milliseconds written by older clients,
//! or date strings typed in by staff or written by `Date.toUTCString()`.
//! [`TimestampValue`] captures all of them and [`TimestampValue::normalize_in`]
//! is the single place they become an instant.
//!
//! Date-times written without an offset are wall-clock times in the zone the
//! route is displayed in. A bare `YYYY-MM-DD` is midnight UTC.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Backend timestamp wrapper as serialized by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreTimestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    #[serde(default, alias = "_nanoseconds")]
    pub nanoseconds: u32,
}

impl StoreTimestamp {
    pub fn from_date_time(instant: DateTime<Utc>) -> Self {
        Self {
            seconds: instant.timestamp(),
            nanoseconds: instant.timestamp_subsec_nanos(),
        }
    }

    /// Convert to a calendar instant; `None` when out of chrono's range.
    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }
}

/// A date written directly into the document rather than wrapped by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Milliseconds since the Unix epoch, written as a JSON float.
    FractionalMillis(f64),
    Text(String),
}

impl RawInstant {
    /// Zero milliseconds and blank text read as "not filled in".
    fn is_blank(&self) -> bool {
        match self {
            RawInstant::Millis(millis) => *millis == 0,
            RawInstant::FractionalMillis(millis) => *millis == 0.0 || millis.is_nan(),
            RawInstant::Text(text) => text.trim().is_empty(),
        }
    }

    fn parse<Tz: TimeZone>(&self, zone: &Tz) -> Option<DateTime<Utc>> {
        match self {
            RawInstant::Millis(millis) => Utc.timestamp_millis_opt(*millis).single(),
            RawInstant::FractionalMillis(millis) if millis.is_finite() => {
                Utc.timestamp_millis_opt(millis.trunc() as i64).single()
            }
            RawInstant::FractionalMillis(_) => None,
            RawInstant::Text(text) => parse_date_text(text, zone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    Convertible(StoreTimestamp),
    Raw(RawInstant),
    /// Any other JSON shape. Kept so the record still decodes; never resolves to an instant.
    Unrecognized(serde_json::Value),
}

impl TimestampValue {
    pub fn from_date_time(instant: DateTime<Utc>) -> Self {
        TimestampValue::Convertible(StoreTimestamp::from_date_time(instant))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        TimestampValue::Raw(RawInstant::Text(text.into()))
    }

    pub fn from_millis(millis: i64) -> Self {
        TimestampValue::Raw(RawInstant::Millis(millis))
    }

    /// Whether the field counts as filled in. Blank strings, zero epoch
    /// milliseconds and JSON `null` do not.
    pub fn is_present(&self) -> bool {
        match self {
            TimestampValue::Convertible(_) => true,
            TimestampValue::Raw(raw) => !raw.is_blank(),
            TimestampValue::Unrecognized(value) => !value.is_null(),
        }
    }

    /// [`normalize_in`](Self::normalize_in) with offset-less text read as host local time.
    pub fn normalize(&self) -> Option<DateTime<Utc>> {
        self.normalize_in(&Local)
    }

    /// Normalize to a UTC instant, reading offset-less date-times as wall-clock
    /// time in `zone`. `None` means the value cannot be read as a date.
    pub fn normalize_in<Tz: TimeZone>(&self, zone: &Tz) -> Option<DateTime<Utc>> {
        match self {
            TimestampValue::Convertible(wrapper) => wrapper.to_date_time(),
            TimestampValue::Raw(raw) => raw.parse(zone),
            TimestampValue::Unrecognized(_) => None,
        }
    }
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(instant: DateTime<Utc>) -> Self {
        TimestampValue::from_date_time(instant)
    }
}

/// Parse the textual date forms seen in record-store documents.
fn parse_date_text<Tz: TimeZone>(text: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(text, format) {
            return Some(instant.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return wall_clock_in(naive, zone);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Place a wall-clock time in `zone`. Ambiguous times take the earlier
/// instant; times skipped by a forward clock change move ahead by an hour.
fn wall_clock_in<Tz: TimeZone>(naive: NaiveDateTime, zone: &Tz) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| zone.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|instant| instant.with_timezone(&Utc))
}
