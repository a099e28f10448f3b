//! Date and time text formats shared by the record file and the API.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Date format used in the record file (`dd.mm.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Time-of-day format used in the record file and the API (`HH:MM`).
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a time of day written as `HH:MM` or `HH:MM:SS`.
///
/// Seconds are dropped, so the result always equals its own `HH:MM` form.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    let time = NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))?;
    Ok(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
}

/// Serde adapter that writes [`NaiveTime`] as `HH:MM`.
pub mod clock_time {
    use super::*;

    /// Serializes a time of day as `HH:MM`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    /// Deserializes a time of day from `HH:MM` or `HH:MM:SS`, dropping seconds.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_clock_time(&value).map_err(serde::de::Error::custom)
    }
}
