//! # Shared Error Types
//!
//! The store-facing error every Entity Store port returns. Subsystem-specific
//! errors live in the subsystem crates.

use thiserror::Error;

/// Failure reported by an Entity Store adapter.
///
/// The core never retries these; retry/backoff, if any, belongs to the
/// storage collaborator. The one exception is `UniqueViolation` on the share
/// token constraint, which the share lifecycle absorbs by minting a fresh
/// token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Connectivity or other backend failure, propagated unchanged.
    #[error("store backend failure: {0}")]
    Backend(String),

    /// A uniqueness constraint was violated.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Name of the violated constraint (e.g. `public_share_token`).
        constraint: &'static str,
    },
}
