//! Entry validation.
//!
//! Checks a submitted shift against its planned span and turns it into a
//! finalized [`AttendanceRecord`] with the per-diem already computed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DietRates;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AttendanceRecord, NewEntry};

use super::per_diem::DietTier;
use super::planned_span::ShiftWindow;

/// A successfully validated entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedEntry {
    /// The record ready to be stored.
    pub record: AttendanceRecord,
    /// The planned span the per-diem was based on.
    pub planned_span_hours: Decimal,
    /// The per-diem tier that applied.
    pub diet_tier: DietTier,
}

/// Validates a submitted entry and builds the record to store.
///
/// The checks run in this order:
/// 1. worked hours must not be negative
/// 2. an overnight shift must end on a representable date
/// 3. worked hours must not exceed the planned span
/// 4. the planned span must be positive (start and end must differ)
///
/// The per-diem is computed from the planned span, not from the worked hours.
///
/// # Arguments
///
/// * `entry` - The submitted shift
/// * `rates` - The per-diem rate table
/// * `created_at` - Creation time, used as the record identifier
///
/// # Examples
///
/// ```
/// use attendance_ledger::calculation::validate_entry;
/// use attendance_ledger::config::DietRates;
/// use attendance_ledger::models::{NewEntry, TransportMode};
/// use chrono::{NaiveDate, NaiveTime, Utc};
/// use rust_decimal::Decimal;
///
/// let entry = NewEntry {
///     date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     worked_hours: Decimal::from(8),
///     transport_mode: TransportMode::Car,
///     diet_eligible: true,
/// };
///
/// let validated = validate_entry(&entry, &DietRates::default(), Utc::now()).unwrap();
/// assert_eq!(validated.planned_span_hours, Decimal::from(8));
/// assert_eq!(validated.record.diet_amount, Decimal::from(166));
/// ```
pub fn validate_entry(
    entry: &NewEntry,
    rates: &DietRates,
    created_at: DateTime<Utc>,
) -> LedgerResult<ValidatedEntry> {
    if entry.worked_hours < Decimal::ZERO {
        return Err(LedgerError::NegativeWorkedHours {
            worked_hours: entry.worked_hours,
        });
    }

    let window = ShiftWindow::new(entry.date, entry.start_time, entry.end_time)
        .ok_or(LedgerError::ShiftOutOfRange { date: entry.date })?;
    let planned_span_hours = window.hours();

    if entry.worked_hours > planned_span_hours {
        return Err(LedgerError::WorkedHoursExceedSpan {
            worked_hours: entry.worked_hours,
            planned_span_hours,
        });
    }

    if planned_span_hours <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveSpan {
            start_time: entry.start_time,
            end_time: entry.end_time,
        });
    }

    let diet_tier = DietTier::for_duration(planned_span_hours, entry.diet_eligible);
    let diet_amount = diet_tier.amount(rates);

    debug!(
        date = %entry.date,
        planned_span_hours = %planned_span_hours,
        crosses_midnight = window.crosses_midnight(),
        diet_tier = ?diet_tier,
        "Entry validated"
    );

    let record = AttendanceRecord {
        id: AttendanceRecord::id_from_timestamp(created_at),
        date: entry.date,
        start_time: entry.start_time,
        end_time: entry.end_time,
        worked_hours: entry.worked_hours,
        transport_mode: entry.transport_mode,
        diet_amount,
    };

    Ok(ValidatedEntry {
        record,
        planned_span_hours,
        diet_tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportMode;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn created_at() -> DateTime<Utc> {
        Utc.timestamp_opt(1_760_781_600, 500_000_000).unwrap()
    }

    fn entry(start: NaiveTime, end: NaiveTime, worked: &str, eligible: bool) -> NewEntry {
        NewEntry {
            date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
            start_time: start,
            end_time: end,
            worked_hours: dec(worked),
            transport_mode: TransportMode::Van,
            diet_eligible: eligible,
        }
    }

    fn validate(entry: &NewEntry) -> LedgerResult<ValidatedEntry> {
        validate_entry(entry, &DietRates::default(), created_at())
    }

    #[test]
    fn test_valid_day_shift_builds_record() {
        let validated = validate(&entry(time(8, 0), time(16, 0), "7.5", true)).unwrap();

        assert_eq!(validated.planned_span_hours, dec("8"));
        assert_eq!(validated.diet_tier, DietTier::FiveToTwelve);

        let record = validated.record;
        assert_eq!(record.id, "1760781600.500000");
        assert_eq!(record.worked_hours, dec("7.5"));
        assert_eq!(record.transport_mode, TransportMode::Van);
        assert_eq!(record.diet_amount, dec("166"));
    }

    #[test]
    fn test_worked_hours_exceeding_span_are_rejected() {
        let result = validate(&entry(time(8, 0), time(16, 0), "9", false));

        match result {
            Err(LedgerError::WorkedHoursExceedSpan {
                worked_hours,
                planned_span_hours,
            }) => {
                assert_eq!(worked_hours, dec("9"));
                assert_eq!(planned_span_hours, dec("8"));
            }
            other => panic!("Expected WorkedHoursExceedSpan, got {:?}", other),
        }
    }

    #[test]
    fn test_overnight_span_is_four_hours() {
        let validated = validate(&entry(time(22, 0), time(2, 0), "4", true)).unwrap();

        assert_eq!(validated.planned_span_hours, dec("4"));
        // Under five hours: no per-diem even when eligible.
        assert_eq!(validated.record.diet_amount, Decimal::ZERO);
    }

    #[test]
    fn test_overnight_worked_hours_checked_against_rolled_span() {
        let result = validate(&entry(time(22, 0), time(2, 0), "5", false));
        assert!(matches!(result, Err(LedgerError::WorkedHoursExceedSpan { .. })));
    }

    #[test]
    fn test_overnight_shift_on_last_date_is_rejected() {
        let mut overnight = entry(time(22, 0), time(2, 0), "4", true);
        overnight.date = NaiveDate::MAX;

        match validate(&overnight) {
            Err(LedgerError::ShiftOutOfRange { date }) => assert_eq!(date, NaiveDate::MAX),
            other => panic!("Expected ShiftOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_day_shift_on_last_date_is_accepted() {
        let mut day = entry(time(8, 0), time(16, 0), "8", false);
        day.date = NaiveDate::MAX;

        let validated = validate(&day).unwrap();
        assert_eq!(validated.planned_span_hours, dec("8"));
    }

    #[test]
    fn test_equal_times_with_zero_hours_is_non_positive_span() {
        let result = validate(&entry(time(9, 0), time(9, 0), "0", false));
        assert!(matches!(result, Err(LedgerError::NonPositiveSpan { .. })));
    }

    #[test]
    fn test_equal_times_with_hours_reports_exceeded_span_first() {
        let result = validate(&entry(time(9, 0), time(9, 0), "1", false));
        assert!(matches!(result, Err(LedgerError::WorkedHoursExceedSpan { .. })));
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let result = validate(&entry(time(8, 0), time(16, 0), "-1", false));
        assert!(matches!(result, Err(LedgerError::NegativeWorkedHours { .. })));
    }

    #[test]
    fn test_zero_worked_hours_are_allowed() {
        let validated = validate(&entry(time(8, 0), time(16, 0), "0", true)).unwrap();
        assert_eq!(validated.record.worked_hours, Decimal::ZERO);
        // The per-diem follows the planned span.
        assert_eq!(validated.record.diet_amount, dec("166"));
    }

    #[test]
    fn test_long_overnight_shift_gets_top_tier() {
        let validated = validate(&entry(time(6, 0), time(5, 0), "20", true)).unwrap();
        assert_eq!(validated.planned_span_hours, dec("23"));
        assert_eq!(validated.diet_tier, DietTier::EighteenPlus);
        assert_eq!(validated.record.diet_amount, dec("398"));
    }
}
