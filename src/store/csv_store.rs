//! CSV-backed record store.
//!
//! The whole file is read on every load and rewritten on every save. There is
//! no locking and no partial-write protection: the last writer wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::formats::{DATE_FORMAT, TIME_FORMAT, parse_clock_time};
use crate::models::{AttendanceRecord, TransportMode};

/// Column headers of the record file, in order.
pub const CSV_COLUMNS: [&str; 7] = [
    "id",
    "Datum",
    "Od",
    "Do",
    "Odpracováno (h)",
    "Doprava",
    "Diety (Kč)",
];

/// One row of the record file, exactly as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvRow {
    id: String,
    #[serde(rename = "Datum")]
    date: String,
    #[serde(rename = "Od")]
    start_time: String,
    #[serde(rename = "Do")]
    end_time: String,
    #[serde(rename = "Odpracováno (h)")]
    worked_hours: String,
    #[serde(rename = "Doprava")]
    transport_mode: String,
    #[serde(rename = "Diety (Kč)")]
    diet_amount: String,
}

impl From<&AttendanceRecord> for CsvRow {
    fn from(record: &AttendanceRecord) -> Self {
        CsvRow {
            id: record.id.clone(),
            date: record.date.format(DATE_FORMAT).to_string(),
            start_time: record.start_time.format(TIME_FORMAT).to_string(),
            end_time: record.end_time.format(TIME_FORMAT).to_string(),
            worked_hours: record.worked_hours.to_string(),
            transport_mode: record.transport_mode.label().to_string(),
            diet_amount: record.diet_amount.to_string(),
        }
    }
}

impl TryFrom<CsvRow> for AttendanceRecord {
    type Error = String;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT)
            .map_err(|e| format!("invalid date '{}': {}", row.date, e))?;
        let start_time = parse_clock_time(row.start_time.trim())
            .map_err(|e| format!("invalid start time '{}': {}", row.start_time, e))?;
        let end_time = parse_clock_time(row.end_time.trim())
            .map_err(|e| format!("invalid end time '{}': {}", row.end_time, e))?;
        let worked_hours = Decimal::from_str(row.worked_hours.trim())
            .map_err(|e| format!("invalid worked hours '{}': {}", row.worked_hours, e))?;
        let transport_mode = TransportMode::from_label(&row.transport_mode)
            .ok_or_else(|| format!("unknown transport mode '{}'", row.transport_mode))?;
        let diet_amount = Decimal::from_str(row.diet_amount.trim())
            .map_err(|e| format!("invalid diet amount '{}': {}", row.diet_amount, e))?;

        Ok(AttendanceRecord {
            id: row.id,
            date,
            start_time,
            end_time,
            worked_hours,
            transport_mode,
            diet_amount,
        })
    }
}

/// Loads and saves attendance records in a CSV file.
///
/// # Example
///
/// ```no_run
/// use attendance_ledger::store::RecordStore;
///
/// let store = RecordStore::new("dochazka_data.csv");
/// let records = store.load()?;
/// println!("{} records", records.len());
/// # Ok::<(), attendance_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl Into<String>) -> LedgerError {
        LedgerError::StorageError {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }

    /// Reads all records in file order.
    ///
    /// A missing file means no records yet and yields an empty vector.
    pub fn load(&self) -> LedgerResult<Vec<AttendanceRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Record file missing, starting empty");
            return Ok(Vec::new());
        }

        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| self.storage_error(e.to_string()))?;

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            // Row 1 is the header.
            let line = index + 2;
            let row = row.map_err(|e| self.storage_error(format!("row {}: {}", line, e)))?;
            let record = AttendanceRecord::try_from(row)
                .map_err(|message| self.storage_error(format!("row {}: {}", line, message)))?;
            records.push(record);
        }

        debug!(path = %self.path.display(), count = records.len(), "Records loaded");
        Ok(records)
    }

    /// Overwrites the file with `records`. The header is always written.
    pub fn save(&self, records: &[AttendanceRecord]) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e.to_string()))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.storage_error(e.to_string()))?;

        writer
            .write_record(CSV_COLUMNS)
            .map_err(|e| self.storage_error(e.to_string()))?;
        for record in records {
            writer
                .serialize(CsvRow::from(record))
                .map_err(|e| self.storage_error(e.to_string()))?;
        }
        writer.flush().map_err(|e| self.storage_error(e.to_string()))?;

        debug!(path = %self.path.display(), count = records.len(), "Records saved");
        Ok(())
    }

    /// Appends one record by loading, pushing and saving the whole file.
    ///
    /// Returns the number of records now stored.
    pub fn append(&self, record: AttendanceRecord) -> LedgerResult<usize> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;
        Ok(records.len())
    }

    /// Deletes every record by removing the file. A missing file is not an error.
    pub fn clear(&self) -> LedgerResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Record file removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use tempfile::TempDir;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(id: &str, date: (i32, u32, u32), mode: TransportMode) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            worked_hours: dec("8.5"),
            transport_mode: mode,
            diet_amount: dec("166"),
        }
    }

    fn store_in(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("dochazka_data.csv"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_records_and_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![
            record("1760781600.000001", (2025, 10, 18), TransportMode::Van),
            record("1760695200.000002", (2025, 9, 1), TransportMode::None),
            record("1760608800.000003", (2025, 10, 2), TransportMode::Car),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_file_uses_czech_columns_and_formats() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&[record("1760781600.123456", (2025, 3, 7), TransportMode::Van)])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,Datum,Od,Do,Odpracováno (h),Doprava,Diety (Kč)"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1760781600.123456,07.03.2025,22:00,06:30,8.5,Dodávka,166"
        );
    }

    #[test]
    fn test_reads_file_written_by_previous_version() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "id,Datum,Od,Do,Odpracováno (h),Doprava,Diety (Kč)\n\
             1729252345.123456,18.10.2024,08:00,16:00,8.0,Auto,166\n\
             1729338745.5,19.10.2024,22:00,02:00,4.0,Žádný,0\n",
        )
        .unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1729252345.123456");
        assert_eq!(records[0].transport_mode, TransportMode::Car);
        assert_eq!(records[0].worked_hours, dec("8"));
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 10, 19).unwrap());
        assert_eq!(records[1].diet_amount, Decimal::ZERO);
    }

    #[test]
    fn test_malformed_row_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "id,Datum,Od,Do,Odpracováno (h),Doprava,Diety (Kč)\n\
             1,2024-10-18,08:00,16:00,8.0,Auto,166\n",
        )
        .unwrap();

        match store.load() {
            Err(LedgerError::StorageError { message, .. }) => {
                assert!(message.contains("row 2"), "unexpected message: {}", message);
                assert!(message.contains("invalid date"));
            }
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }

    #[test]
    fn test_append_adds_to_end() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.append(record("a", (2025, 1, 1), TransportMode::Car)).unwrap(), 1);
        assert_eq!(store.append(record("b", (2025, 1, 2), TransportMode::Van)).unwrap(), 2);

        let ids: Vec<String> = store.load().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_save_empty_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_clear_empties_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(record("a", (2025, 1, 1), TransportMode::Car)).unwrap();

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).clear().is_ok());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("nested").join("records.csv"));
        store.save(&[record("a", (2025, 1, 1), TransportMode::None)]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
