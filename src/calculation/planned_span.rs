//! Planned span calculation with midnight rollover.
//!
//! A shift is entered as a date plus start and end times of day. When the
//! end time is earlier than the start time the shift ends on the following
//! day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// The concrete start and end instants of a planned shift.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::ShiftWindow;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let window = ShiftWindow::new(
///     NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
/// )
/// .unwrap();
/// assert!(window.crosses_midnight());
/// assert_eq!(window.hours(), Decimal::from(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    /// When the shift starts.
    pub start: NaiveDateTime,
    /// When the shift ends; never before `start`.
    pub end: NaiveDateTime,
}

impl ShiftWindow {
    /// Anchors the start and end times on `date`, moving the end to the next
    /// day if it is earlier than the start.
    ///
    /// Returns `None` when that next day is past the last representable date.
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Option<Self> {
        let start = date.and_time(start_time);
        let mut end = date.and_time(end_time);
        if end < start {
            end = end.checked_add_signed(Duration::days(1))?;
        }
        Some(Self { start, end })
    }

    /// Returns true if the shift ends on the day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end.date() > self.start.date()
    }

    /// Length of the window in hours.
    pub fn hours(&self) -> Decimal {
        let seconds = (self.end - self.start).num_seconds();
        Decimal::new(seconds, 0) / Decimal::new(3600, 0)
    }
}

/// Returns the planned span in hours between two times of day.
///
/// The result is always in `[0, 24)`; equal times give zero.
pub fn planned_span_hours(start_time: NaiveTime, end_time: NaiveTime) -> Decimal {
    // The anchor date only matters for the rollover, not for the length.
    let anchor = NaiveDate::MIN;
    ShiftWindow::new(anchor, start_time, end_time)
        .map(|window| window.hours())
        .unwrap_or_default()
}
