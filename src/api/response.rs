//! Response types for the attendance ledger API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`LedgerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DietTier;
use crate::error::LedgerError;
use crate::models::formats::clock_time;
use crate::models::{AttendanceRecord, MonthKey, TransportMode};

/// Body returned after a record has been saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    /// The stored record.
    pub record: AttendanceRecord,
    /// The planned span the per-diem was based on.
    pub planned_span_hours: Decimal,
    /// The per-diem tier that applied.
    pub diet_tier: DietTier,
    /// Human-readable confirmation.
    pub message: String,
}

/// Body listing stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    /// The records in storage order.
    pub records: Vec<AttendanceRecord>,
}

/// Body listing the months that have records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthsResponse {
    /// Month keys, newest first.
    pub months: Vec<MonthKey>,
}

/// One selectable transport option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportOption {
    /// The API value.
    pub value: TransportMode,
    /// The display label.
    pub label: String,
}

/// Default values for a new entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Today's date.
    pub date: NaiveDate,
    /// Default start time.
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    /// Default end time.
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    /// Default worked hours.
    pub worked_hours: Decimal,
    /// Default transport mode.
    pub transport_mode: TransportMode,
    /// Default per-diem eligibility.
    pub diet_eligible: bool,
    /// All transport modes to choose from.
    pub transport_options: Vec<TransportOption>,
}

/// Body returned when a bulk clear has been requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearRequestResponse {
    /// Token to send to `POST /records/clear/confirm`.
    pub token: Uuid,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Number of records that would be deleted.
    pub record_count: usize,
    /// Warning to show before confirming.
    pub warning: String,
}

/// Body returned by the confirm and cancel clear endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    /// Number of records removed.
    pub removed: usize,
    /// Human-readable outcome.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a request body that could not be read.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        let message = error.to_string();
        match error {
            LedgerError::ConfigNotFound { .. } | LedgerError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            LedgerError::WorkedHoursExceedSpan { .. }
            | LedgerError::NonPositiveSpan { .. }
            | LedgerError::NegativeWorkedHours { .. }
            | LedgerError::ShiftOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            LedgerError::InvalidMonthKey { key } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH_KEY",
                    message,
                    format!("'{}' is not a month in YYYY-MM form", key),
                ),
            },
            LedgerError::StorageError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Record storage failed", message),
            },
            LedgerError::ClearNotRequested => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("CLEAR_NOT_REQUESTED", message),
            },
            LedgerError::ClearTokenMismatch => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("CLEAR_TOKEN_MISMATCH", message),
            },
            LedgerError::ClearRequestExpired { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("CLEAR_REQUEST_EXPIRED", message),
            },
        }
    }
}
