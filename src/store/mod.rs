//! Record persistence for the attendance ledger.
//!
//! This module provides the CSV-backed [`RecordStore`] and the
//! [`ClearConfirmation`] state guarding the bulk clear.

mod clear_confirmation;
mod csv_store;

pub use clear_confirmation::{ClearConfirmation, PendingClear};
pub use csv_store::{CSV_COLUMNS, RecordStore};
