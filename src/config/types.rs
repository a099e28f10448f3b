//! Configuration types for the attendance ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default location of the record file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "dochazka_data.csv";

/// Default length of a working day used for the days/hours summary.
pub const DEFAULT_HOURS_PER_DAY: u32 = 8;

/// Default window for confirming a bulk clear.
pub const DEFAULT_CLEAR_CONFIRMATION_TTL_SECS: u64 = 120;

/// Per-diem amounts for each planned-span tier.
///
/// The defaults are the 2025 rates in CZK.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DietRates {
    /// Amount for shifts of 5 to 12 hours.
    pub five_to_twelve: Decimal,
    /// Amount for shifts of 12 to 18 hours.
    pub twelve_to_eighteen: Decimal,
    /// Amount for shifts of 18 hours and longer.
    pub eighteen_plus: Decimal,
}

impl Default for DietRates {
    fn default() -> Self {
        Self {
            five_to_twelve: Decimal::from(166),
            twelve_to_eighteen: Decimal::from(256),
            eighteen_plus: Decimal::from(398),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_hours_per_day() -> u32 {
    DEFAULT_HOURS_PER_DAY
}

fn default_clear_confirmation_ttl_secs() -> u64 {
    DEFAULT_CLEAR_CONFIRMATION_TTL_SECS
}

/// The complete ledger configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Path of the CSV record file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Hours that make up one working day in summaries.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
    /// Seconds a bulk clear request stays confirmable.
    #[serde(default = "default_clear_confirmation_ttl_secs")]
    pub clear_confirmation_ttl_secs: u64,
    /// The per-diem rate table.
    #[serde(default)]
    pub diet_rates: DietRates,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            clear_confirmation_ttl_secs: DEFAULT_CLEAR_CONFIRMATION_TTL_SECS,
            diet_rates: DietRates::default(),
        }
    }
}

impl LedgerConfig {
    /// Returns `hours_per_day` as a Decimal for summary arithmetic.
    pub fn hours_per_day_decimal(&self) -> Decimal {
        Decimal::from(self.hours_per_day)
    }
}
