//! Two-phase confirmation for the destructive bulk clear.
//!
//! A clear must first be requested, which issues a one-time token. Only a
//! confirmation carrying that token within the confirmation window lets the
//! caller delete the records.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};

/// A pending clear request handed back to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingClear {
    /// Token that must be presented to confirm.
    pub token: Uuid,
    /// When the request stops being confirmable.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClearState {
    Idle,
    Pending(PendingClear),
}

/// Tracks whether a bulk clear has been requested and not yet confirmed.
///
/// # Example
///
/// ```
/// use attendance_ledger::store::ClearConfirmation;
/// use chrono::Utc;
///
/// let mut confirmation = ClearConfirmation::new(120);
/// let now = Utc::now();
/// let pending = confirmation.request(now);
/// assert!(confirmation.confirm(pending.token, now).is_ok());
/// assert!(!confirmation.is_pending());
/// ```
#[derive(Debug, Clone)]
pub struct ClearConfirmation {
    ttl_secs: u64,
    state: ClearState,
}

impl ClearConfirmation {
    /// Creates an idle confirmation with a window of `ttl_secs` seconds.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl_secs,
            state: ClearState::Idle,
        }
    }

    /// Returns true while a request awaits confirmation.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ClearState::Pending(_))
    }

    /// Starts a clear request, replacing any earlier pending request.
    pub fn request(&mut self, now: DateTime<Utc>) -> PendingClear {
        let expires_at = i64::try_from(self.ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let pending = PendingClear {
            token: Uuid::new_v4(),
            expires_at,
        };
        self.state = ClearState::Pending(pending);
        info!(expires_at = %pending.expires_at, "Bulk clear requested");
        pending
    }

    /// Confirms the pending request.
    ///
    /// On success the state returns to idle and the caller may clear the
    /// store. An expired request is discarded; a wrong token leaves the
    /// request pending.
    pub fn confirm(&mut self, token: Uuid, now: DateTime<Utc>) -> LedgerResult<()> {
        self.verify(token, now)?;
        self.state = ClearState::Idle;
        Ok(())
    }

    /// Checks `token` against the pending request without consuming it.
    ///
    /// Callers that must finish fallible work before the token is spent
    /// verify first and [`cancel`](Self::cancel) once the work succeeded.
    /// An expired request is still discarded.
    pub fn verify(&mut self, token: Uuid, now: DateTime<Utc>) -> LedgerResult<()> {
        let ClearState::Pending(pending) = self.state else {
            warn!("Bulk clear confirmed without a request");
            return Err(LedgerError::ClearNotRequested);
        };

        if now > pending.expires_at {
            self.state = ClearState::Idle;
            warn!(expired_at = %pending.expires_at, "Bulk clear request expired");
            return Err(LedgerError::ClearRequestExpired {
                ttl_secs: self.ttl_secs,
            });
        }

        if token != pending.token {
            warn!("Bulk clear confirmed with a wrong token");
            return Err(LedgerError::ClearTokenMismatch);
        }

        Ok(())
    }

    /// Abandons any pending request. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = ClearState::Idle;
        was_pending
    }
}
