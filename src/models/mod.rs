//! Core data models for the attendance ledger.
//!
//! This module contains all the domain models used throughout the crate.

mod attendance_record;
pub mod formats;
mod month_key;
mod summary;

pub use attendance_record::{AttendanceRecord, NewEntry, TransportMode};
pub use month_key::MonthKey;
pub use summary::{MonthlyView, Summary, TransportCounts, WorkedTime};
