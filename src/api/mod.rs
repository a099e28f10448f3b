//! HTTP API module for the attendance ledger.
//!
//! This module provides the REST endpoints for recording shifts, listing and
//! summarizing records by month, and the two-phase bulk clear.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ConfirmClearRequest, CreateRecordRequest, RecordsQuery};
pub use response::{
    ApiError, ApiErrorResponse, ClearRequestResponse, ClearResponse, CreateRecordResponse,
    FormDefaults, MonthsResponse, RecordsResponse, TransportOption,
};
pub use state::AppState;
