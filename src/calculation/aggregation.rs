//! Aggregation and month filtering over stored records.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, MonthKey, MonthlyView, Summary, TransportCounts, WorkedTime};

/// Computes totals over `records`.
///
/// # Arguments
///
/// * `records` - The records to summarize
/// * `hours_per_day` - Working-day length for the days/hours breakdown
///
/// # Examples
///
/// ```
/// use attendance_ledger::calculation::summarize;
/// use rust_decimal::Decimal;
///
/// let summary = summarize(&[], Decimal::from(8));
/// assert_eq!(summary.entry_count, 0);
/// assert_eq!(summary.worked_time.to_string(), "0.0 h");
/// ```
pub fn summarize(records: &[AttendanceRecord], hours_per_day: Decimal) -> Summary {
    let mut total_worked_hours = Decimal::ZERO;
    let mut total_diet = Decimal::ZERO;
    let mut transport_counts = TransportCounts::default();

    for record in records {
        total_worked_hours += record.worked_hours;
        total_diet += record.diet_amount;
        transport_counts.increment(record.transport_mode);
    }

    Summary {
        entry_count: records.len(),
        total_worked_hours,
        total_diet,
        transport_counts,
        worked_time: WorkedTime::from_hours(total_worked_hours, hours_per_day),
    }
}

/// Returns the distinct months present in `records`, newest first.
pub fn month_keys(records: &[AttendanceRecord]) -> Vec<MonthKey> {
    let mut keys: Vec<MonthKey> = records.iter().map(AttendanceRecord::month_key).collect();
    keys.sort_unstable_by(|a, b| b.cmp(a));
    keys.dedup();
    keys
}

/// Returns the records dated within `month`, keeping their stored order.
pub fn filter_by_month(records: &[AttendanceRecord], month: MonthKey) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|record| month.contains(record.date))
        .cloned()
        .collect()
}

/// Filters `records` to `month` and summarizes that subset.
pub fn summarize_month(
    records: &[AttendanceRecord],
    month: MonthKey,
    hours_per_day: Decimal,
) -> MonthlyView {
    let records = filter_by_month(records, month);
    let summary = summarize(&records, hours_per_day);
    MonthlyView {
        month,
        records,
        summary,
    }
}
