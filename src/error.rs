//! Error types for the attendance ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording, storing and
//! summarizing attendance.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the attendance ledger.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_ledger::error::LedgerError;
///
/// let error = LedgerError::ConfigNotFound {
///     path: "/missing/attendance.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/attendance.yaml");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The claimed worked hours are longer than the planned span of the shift.
    #[error(
        "Worked hours ({worked_hours} h) cannot exceed the planned span ({planned_span_hours} h)"
    )]
    WorkedHoursExceedSpan {
        /// The worked hours that were submitted.
        worked_hours: Decimal,
        /// The planned span computed from start and end time.
        planned_span_hours: Decimal,
    },

    /// The end time does not lie after the start time.
    #[error("End time {end_time} must be after start time {start_time}")]
    NonPositiveSpan {
        /// The submitted start time.
        start_time: NaiveTime,
        /// The submitted end time.
        end_time: NaiveTime,
    },

    /// An overnight shift would end past the last representable date.
    #[error("Shift starting on {date} cannot end on the following day")]
    ShiftOutOfRange {
        /// The submitted shift date.
        date: NaiveDate,
    },

    /// Worked hours were negative.
    #[error("Worked hours cannot be negative: {worked_hours}")]
    NegativeWorkedHours {
        /// The worked hours that were submitted.
        worked_hours: Decimal,
    },

    /// A month key could not be parsed.
    #[error("Invalid month key '{key}': expected YYYY-MM")]
    InvalidMonthKey {
        /// The key that failed to parse.
        key: String,
    },

    /// Reading or writing the record file failed.
    #[error("Storage error for '{path}': {message}")]
    StorageError {
        /// The path of the record file.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A bulk clear was confirmed without being requested first.
    #[error("No bulk clear has been requested")]
    ClearNotRequested,

    /// A bulk clear was confirmed with a token that does not match the pending request.
    #[error("Confirmation token does not match the pending clear request")]
    ClearTokenMismatch,

    /// A bulk clear was confirmed after the request expired.
    #[error("Clear request expired after {ttl_secs} seconds")]
    ClearRequestExpired {
        /// The configured confirmation window.
        ttl_secs: u64,
    },
}

impl LedgerError {
    /// Returns true if the error was caused by the submitted entry rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::WorkedHoursExceedSpan { .. }
                | LedgerError::NonPositiveSpan { .. }
                | LedgerError::NegativeWorkedHours { .. }
                | LedgerError::ShiftOutOfRange { .. }
        )
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
