//! # Service Error Taxonomy
//!
//! The caller-facing error surface of every service operation. Transport
//! layers map these onto their own status vocabulary:
//!
//! | Variant | Transport mapping |
//! |---------|-------------------|
//! | `NotFound` | generic not-found (resource absent OR read-denied, merged) |
//! | `Forbidden` | forbidden (write/delete denied on an already-implied resource) |
//! | `BadRequest` | invalid input or invalid state transition |
//! | `Conflict` | uniqueness clash surfaced to the caller (duplicate email) |
//! | `Store` | generic internal failure, propagated unchanged |
//!
//! Policy denials are local decisions and never retried. Share-token
//! collisions never reach this surface; the lifecycle re-mints silently.

use lk_01_access_policy::DenyReason;
use lk_02_share_lifecycle::ShareError;
use shared_types::StoreError;
use thiserror::Error;

use crate::ports::outbound::PasswordError;

/// Caller-facing error of the application services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Resource absent, or present but invisible to this actor. Deliberately
    /// merged so probing cannot reveal the existence of private decks.
    #[error("not found")]
    NotFound,

    /// The resource is known to the actor but the mutation is not theirs to
    /// make.
    #[error("forbidden")]
    Forbidden,

    /// Malformed input or an invalid state transition (e.g. regenerating a
    /// share token while sharing is disabled).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A caller-visible uniqueness clash (e.g. registering a taken email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store failure, propagated unchanged. The core performs no retries.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DenyReason> for ServiceError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::NotFoundOrForbidden => ServiceError::NotFound,
            DenyReason::Forbidden => ServiceError::Forbidden,
        }
    }
}

impl From<ShareError> for ServiceError {
    fn from(err: ShareError) -> Self {
        match err {
            ShareError::SharingDisabled => ServiceError::BadRequest(err.to_string()),
            // Practically unreachable; counts as an internal failure.
            ShareError::TokenSpaceExhausted { .. } => {
                ServiceError::Store(StoreError::Backend(err.to_string()))
            }
            ShareError::Store(store) => ServiceError::Store(store),
        }
    }
}

impl From<PasswordError> for ServiceError {
    fn from(err: PasswordError) -> Self {
        ServiceError::Store(StoreError::Backend(err.to_string()))
    }
}
