//! Summary models for aggregated attendance statistics.
//!
//! This module contains the [`Summary`] produced over a set of records, the
//! [`WorkedTime`] days/hours breakdown, and the [`MonthlyView`] returned when
//! filtering by month.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, MonthKey, TransportMode};

/// Number of entries per transport mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportCounts {
    /// Entries without a vehicle.
    pub none: usize,
    /// Entries driven by car.
    pub car: usize,
    /// Entries driven by van.
    pub van: usize,
}

impl TransportCounts {
    /// Returns the count for one transport mode.
    pub fn get(&self, mode: TransportMode) -> usize {
        match mode {
            TransportMode::None => self.none,
            TransportMode::Car => self.car,
            TransportMode::Van => self.van,
        }
    }

    /// Counts one more entry for `mode`.
    pub fn increment(&mut self, mode: TransportMode) {
        match mode {
            TransportMode::None => self.none += 1,
            TransportMode::Car => self.car += 1,
            TransportMode::Van => self.van += 1,
        }
    }
}

/// Total worked hours expressed as whole working days plus remaining hours.
///
/// The display form follows the ledger's Czech labels:
/// `"2 dní 4.0 h"`, `"2 dní"` or `"4.0 h"`.
///
/// # Example
///
/// ```
/// use attendance_ledger::models::WorkedTime;
/// use rust_decimal::Decimal;
///
/// let worked = WorkedTime::from_hours(Decimal::new(205, 1), Decimal::from(8));
/// assert_eq!(worked.days(), 2);
/// assert_eq!(worked.remaining_hours(), Decimal::new(45, 1));
/// assert_eq!(worked.to_string(), "2 dní 4.5 h");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedTime {
    days: u64,
    remaining_hours: Decimal,
    label: String,
}

impl WorkedTime {
    /// Splits `total_hours` into days of `hours_per_day` and a remainder
    /// rounded to one decimal place (round half to even).
    ///
    /// A non-positive `hours_per_day` yields zero days and the whole total as remainder.
    pub fn from_hours(total_hours: Decimal, hours_per_day: Decimal) -> Self {
        let (days, remainder) = if hours_per_day > Decimal::ZERO {
            (
                (total_hours / hours_per_day).floor().to_u64().unwrap_or(0),
                total_hours % hours_per_day,
            )
        } else {
            (0, total_hours)
        };
        let remaining_hours = remainder.round_dp(1);

        let label = if days > 0 && remaining_hours > Decimal::ZERO {
            format!("{} dní {:.1} h", days, remaining_hours)
        } else if days > 0 {
            format!("{} dní", days)
        } else {
            format!("{:.1} h", remaining_hours)
        };

        Self {
            days,
            remaining_hours,
            label,
        }
    }

    /// Whole working days.
    pub fn days(&self) -> u64 {
        self.days
    }

    /// Hours left over after the whole days, rounded to one decimal place.
    pub fn remaining_hours(&self) -> Decimal {
        self.remaining_hours
    }
}

impl fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Aggregated statistics over a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records summarized.
    pub entry_count: usize,
    /// Sum of worked hours.
    pub total_worked_hours: Decimal,
    /// Sum of per-diem amounts.
    pub total_diet: Decimal,
    /// Entries per transport mode.
    pub transport_counts: TransportCounts,
    /// Worked hours as days plus hours.
    pub worked_time: WorkedTime,
}

/// Records of a single month together with their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyView {
    /// The month that was selected.
    pub month: MonthKey,
    /// Records dated within the month, in storage order.
    pub records: Vec<AttendanceRecord>,
    /// Statistics restricted to `records`.
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_days_and_remainder() {
        let worked = WorkedTime::from_hours(dec("20"), dec("8"));
        assert_eq!(worked.days(), 2);
        assert_eq!(worked.remaining_hours(), dec("4"));
        assert_eq!(worked.to_string(), "2 dní 4.0 h");
    }

    #[test]
    fn test_whole_days_only() {
        let worked = WorkedTime::from_hours(dec("16"), dec("8"));
        assert_eq!(worked.days(), 2);
        assert_eq!(worked.remaining_hours(), Decimal::ZERO);
        assert_eq!(worked.to_string(), "2 dní");
    }

    #[test]
    fn test_less_than_a_day() {
        let worked = WorkedTime::from_hours(dec("7.5"), dec("8"));
        assert_eq!(worked.days(), 0);
        assert_eq!(worked.to_string(), "7.5 h");
    }

    #[test]
    fn test_zero_hours() {
        let worked = WorkedTime::from_hours(Decimal::ZERO, dec("8"));
        assert_eq!(worked.to_string(), "0.0 h");
    }

    #[test]
    fn test_remainder_rounds_half_to_even() {
        // 8.25 % 8 = 0.25 -> 0.2
        let worked = WorkedTime::from_hours(dec("8.25"), dec("8"));
        assert_eq!(worked.remaining_hours(), dec("0.2"));
        assert_eq!(worked.to_string(), "1 dní 0.2 h");
    }

    #[test]
    fn test_transport_counts_increment() {
        let mut counts = TransportCounts::default();
        counts.increment(TransportMode::Car);
        counts.increment(TransportMode::Car);
        counts.increment(TransportMode::Van);

        assert_eq!(counts.get(TransportMode::Car), 2);
        assert_eq!(counts.get(TransportMode::Van), 1);
        assert_eq!(counts.get(TransportMode::None), 0);
    }
}
