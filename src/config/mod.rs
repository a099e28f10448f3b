//! Configuration loading and management for the attendance ledger.
//!
//! This module loads the per-diem rate table, the record file location and
//! the summary settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance.yaml").unwrap();
//! println!("5-12 h diet: {} Kč", config.diet_rates().five_to_twelve);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CLEAR_CONFIRMATION_TTL_SECS, DEFAULT_DATA_FILE, DEFAULT_HOURS_PER_DAY, DietRates,
    LedgerConfig,
};
