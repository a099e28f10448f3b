//! HTTP request handlers for the attendance ledger API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler reads the record file afresh, so the store on disk is the only
//! source of truth.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{month_keys, summarize, summarize_month, validate_entry};
use crate::models::{MonthKey, NewEntry, Summary, TransportMode};

use super::request::{ConfirmClearRequest, CreateRecordRequest, RecordsQuery};
use super::response::{
    ApiError, ApiErrorResponse, ClearRequestResponse, ClearResponse, CreateRecordResponse,
    FormDefaults, MonthsResponse, RecordsResponse, TransportOption,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/form", get(form_defaults_handler))
        .route(
            "/records",
            get(list_records_handler).post(create_record_handler),
        )
        .route("/months", get(months_handler))
        .route("/statistics", get(statistics_handler))
        .route("/records/clear/request", post(request_clear_handler))
        .route("/records/clear/confirm", post(confirm_clear_handler))
        .route("/records/clear/cancel", post(cancel_clear_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to an error response.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for GET /form.
///
/// Returns the defaults for a new entry: today, 08:00 to 16:00, 8 hours
/// worked, no transport, no per-diem.
async fn form_defaults_handler() -> Json<FormDefaults> {
    let transport_options = TransportMode::ALL
        .into_iter()
        .map(|mode| TransportOption {
            value: mode,
            label: mode.label().to_string(),
        })
        .collect();

    Json(FormDefaults {
        date: Local::now().date_naive(),
        start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default(),
        worked_hours: Decimal::new(80, 1),
        transport_mode: TransportMode::None,
        diet_eligible: false,
        transport_options,
    })
}

/// Handler for POST /records.
///
/// Validates the entry, computes its per-diem and appends it to the store.
/// A rejected entry is never written.
async fn create_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRecordResponse>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing new record");

    let Json(request) =
        payload.map_err(|rejection| json_rejection_error(rejection, correlation_id))?;
    let entry: NewEntry = request.into();

    let validated = match validate_entry(&entry, state.config().diet_rates(), Utc::now()) {
        Ok(validated) => validated,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                date = %entry.date,
                error = %err,
                "Entry rejected"
            );
            return Err(err.into());
        }
    };

    let stored_count = state.store().append(validated.record.clone())?;

    info!(
        correlation_id = %correlation_id,
        record_id = %validated.record.id,
        planned_span_hours = %validated.planned_span_hours,
        diet_amount = %validated.record.diet_amount,
        stored_count,
        "Record saved"
    );

    let message = format!(
        "Record saved. Planned span: {:.1} h, diet: {} Kč",
        validated.planned_span_hours.round_dp(1),
        validated.record.diet_amount
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            record: validated.record,
            planned_span_hours: validated.planned_span_hours,
            diet_tier: validated.diet_tier,
            message,
        }),
    ))
}

/// Handler for GET /records.
///
/// Without a query returns every record. With `?month=YYYY-MM` returns that
/// month's records and their summary.
async fn list_records_handler(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Response, ApiErrorResponse> {
    let records = state.store().load()?;

    match query.month {
        Some(month) => {
            let month: MonthKey = month.parse()?;
            let view = summarize_month(&records, month, state.config().hours_per_day());
            Ok(Json(view).into_response())
        }
        None => Ok(Json(RecordsResponse { records }).into_response()),
    }
}

/// Handler for GET /months.
async fn months_handler(
    State(state): State<AppState>,
) -> Result<Json<MonthsResponse>, ApiErrorResponse> {
    let records = state.store().load()?;
    Ok(Json(MonthsResponse {
        months: month_keys(&records),
    }))
}

/// Handler for GET /statistics.
async fn statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<Summary>, ApiErrorResponse> {
    let records = state.store().load()?;
    Ok(Json(summarize(&records, state.config().hours_per_day())))
}

/// Handler for POST /records/clear/request.
///
/// First phase of the bulk clear: issues the confirmation token.
async fn request_clear_handler(
    State(state): State<AppState>,
) -> Json<ClearRequestResponse> {
    // A corrupt file must stay clearable, so an unreadable store counts as empty.
    let record_count = state.store().load().map(|records| records.len()).unwrap_or(0);
    let pending = state.clear_confirmation().lock().await.request(Utc::now());

    Json(ClearRequestResponse {
        token: pending.token,
        expires_at: pending.expires_at,
        record_count,
        warning: format!(
            "This deletes all {} records and cannot be undone. Confirm to proceed.",
            record_count
        ),
    })
}

/// Handler for POST /records/clear/confirm.
///
/// Second phase of the bulk clear: deletes every record if the token matches
/// the pending request.
async fn confirm_clear_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmClearRequest>, JsonRejection>,
) -> Result<Json<ClearResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) =
        payload.map_err(|rejection| json_rejection_error(rejection, correlation_id))?;

    let mut confirmation = state.clear_confirmation().lock().await;
    confirmation.verify(request.token, Utc::now())?;

    // An unreadable file is still removed; it just counts as zero records.
    let removed = state.store().load().map(|records| records.len()).unwrap_or(0);
    // The request stays pending if removal fails, so the same token can retry.
    state.store().clear()?;
    confirmation.cancel();
    drop(confirmation);

    info!(correlation_id = %correlation_id, removed, "All records cleared");

    Ok(Json(ClearResponse {
        removed,
        message: "All records have been deleted.".to_string(),
    }))
}

/// Handler for POST /records/clear/cancel.
async fn cancel_clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let was_pending = state.clear_confirmation().lock().await.cancel();
    let message = if was_pending {
        "Clear request cancelled."
    } else {
        "No clear request was pending."
    };

    Json(ClearResponse {
        removed: 0,
        message: message.to_string(),
    })
}
