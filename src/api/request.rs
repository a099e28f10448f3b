//! Request types for the attendance ledger API.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::formats::clock_time;
use crate::models::{NewEntry, TransportMode};

/// Request body for `POST /records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// The date of the shift.
    pub date: NaiveDate,
    /// Planned start time (`HH:MM`).
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    /// Planned end time (`HH:MM`); earlier than the start means next day.
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    /// Hours actually worked.
    pub worked_hours: Decimal,
    /// The means of transport used.
    #[serde(default)]
    pub transport_mode: TransportMode,
    /// Whether the shift qualifies for a per-diem.
    #[serde(default)]
    pub diet_eligible: bool,
}

impl From<CreateRecordRequest> for NewEntry {
    fn from(req: CreateRecordRequest) -> Self {
        NewEntry {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            worked_hours: req.worked_hours,
            transport_mode: req.transport_mode,
            diet_eligible: req.diet_eligible,
        }
    }
}

/// Query string for `GET /records`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordsQuery {
    /// Optional `YYYY-MM` month to filter by.
    pub month: Option<String>,
}

/// Request body for `POST /records/clear/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmClearRequest {
    /// The token returned by `POST /records/clear/request`.
    pub token: Uuid,
}
