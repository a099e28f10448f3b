//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

use super::types::{DietRates, LedgerConfig};

/// Loads and provides access to the ledger configuration.
///
/// # File Format
///
/// ```text
/// data_file: dochazka_data.csv
/// hours_per_day: 8
/// clear_confirmation_ttl_secs: 120
/// diet_rates:
///   five_to_twelve: 166
///   twelve_to_eighteen: 256
///   eighteen_plus: 398
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance.yaml").unwrap();
/// println!("Records stored in {}", loader.config().data_file.display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`LedgerConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: LedgerConfig =
            serde_yaml::from_str(&content).map_err(|e| LedgerError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if config.hours_per_day == 0 {
            return Err(LedgerError::ConfigParseError {
                path: path_str,
                message: "hours_per_day must be greater than zero".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the per-diem rate table.
    pub fn diet_rates(&self) -> &DietRates {
        &self.config.diet_rates
    }

    /// Returns the working-day length used for days/hours summaries.
    pub fn hours_per_day(&self) -> Decimal {
        self.config.hours_per_day_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/attendance.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().data_file, PathBuf::from("dochazka_data.csv"));
        assert_eq!(loader.hours_per_day(), Decimal::from(8));
    }

    #[test]
    fn test_diet_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = loader.diet_rates();

        assert_eq!(rates.five_to_twelve, Decimal::from(166));
        assert_eq!(rates.twelve_to_eighteen, Decimal::from(256));
        assert_eq!(rates.eighteen_plus, Decimal::from(398));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/attendance.yaml");

        match result {
            Err(LedgerError::ConfigNotFound { path }) => {
                assert!(path.contains("attendance.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "diet_rates: [not, a, table]").unwrap();

        match ConfigLoader::load(file.path()) {
            Err(LedgerError::ConfigParseError { message, .. }) => {
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_hours_per_day_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hours_per_day: 0").unwrap();

        match ConfigLoader::load(file.path()) {
            Err(LedgerError::ConfigParseError { message, .. }) => {
                assert!(message.contains("hours_per_day"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
