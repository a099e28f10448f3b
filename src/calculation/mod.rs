//! Calculation logic for the attendance ledger.
//!
//! This module contains the per-diem calculator, the planned span arithmetic
//! with midnight rollover, the entry validator that turns a submitted shift
//! into a record, and the aggregation and month filtering over stored records.

mod aggregation;
mod entry_validation;
mod per_diem;
mod planned_span;

pub use aggregation::{filter_by_month, month_keys, summarize, summarize_month};
pub use entry_validation::{ValidatedEntry, validate_entry};
pub use per_diem::{
    DIET_MIN_HOURS, DIET_TIER_2_HOURS, DIET_TIER_3_HOURS, DietTier, calculate_diet,
};
pub use planned_span::{ShiftWindow, planned_span_hours};
