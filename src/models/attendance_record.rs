//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] persisted by the ledger, the
//! [`NewEntry`] submitted for validation, and the [`TransportMode`] enum.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthKey;
use super::formats::clock_time;

/// The means of transport used for a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// No vehicle was used.
    #[default]
    None,
    /// A passenger car.
    Car,
    /// A van.
    Van,
}

impl TransportMode {
    /// All transport modes in display order.
    pub const ALL: [TransportMode; 3] =
        [TransportMode::None, TransportMode::Car, TransportMode::Van];

    /// Returns the label written to the record file.
    ///
    /// ```
    /// use attendance_ledger::models::TransportMode;
    ///
    /// assert_eq!(TransportMode::Van.label(), "Dodávka");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::None => "Žádný",
            TransportMode::Car => "Auto",
            TransportMode::Van => "Dodávka",
        }
    }

    /// Looks up a transport mode by its record-file label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label.trim())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    /// Accepts both the record-file label and the API name (`none`, `car`, `van`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(mode) = Self::from_label(s) {
            return Ok(mode);
        }
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(TransportMode::None),
            "car" => Ok(TransportMode::Car),
            "van" => Ok(TransportMode::Van),
            other => Err(format!("unknown transport mode '{}'", other)),
        }
    }
}

/// A shift entry as submitted, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Planned start time.
    pub start_time: NaiveTime,
    /// Planned end time; earlier than `start_time` means the shift ends the next day.
    pub end_time: NaiveTime,
    /// Hours actually worked.
    pub worked_hours: Decimal,
    /// The means of transport used.
    pub transport_mode: TransportMode,
    /// Whether the shift qualifies for a per-diem allowance.
    pub diet_eligible: bool,
}

/// A stored attendance row.
///
/// The diet amount is computed once when the entry is accepted and never
/// recomputed, so later changes to the rate table do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier derived from the creation timestamp.
    pub id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Planned start time.
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    /// Planned end time.
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    /// Hours actually worked.
    pub worked_hours: Decimal,
    /// The means of transport used.
    pub transport_mode: TransportMode,
    /// The per-diem allowance granted for the shift.
    pub diet_amount: Decimal,
}

impl AttendanceRecord {
    /// Builds a record identifier from a creation timestamp.
    ///
    /// The identifier is the Unix time in seconds with a six-digit fraction.
    ///
    /// ```
    /// use attendance_ledger::models::AttendanceRecord;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let created_at = Utc.timestamp_opt(1_760_781_600, 123_456_000).unwrap();
    /// assert_eq!(AttendanceRecord::id_from_timestamp(created_at), "1760781600.123456");
    /// ```
    pub fn id_from_timestamp(created_at: DateTime<Utc>) -> String {
        format!(
            "{}.{:06}",
            created_at.timestamp(),
            created_at.timestamp_subsec_micros()
        )
    }

    /// Returns the month this record belongs to.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}
