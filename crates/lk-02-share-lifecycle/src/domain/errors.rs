//! # Share Lifecycle Errors

use shared_types::StoreError;
use thiserror::Error;

/// Errors raised by share-lifecycle transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// `regenerate` was called on an unshared deck. A user error (maps to
    /// "bad request"), deliberately distinct from an authorization failure.
    #[error("public sharing is not enabled for this deck")]
    SharingDisabled,

    /// Could not mint a token that is absent from the directory. With
    /// 128-bit random tokens this is practically unreachable; it exists so
    /// collision handling is a bounded loop instead of a spin.
    #[error("could not mint a unique share token after {attempts} attempts")]
    TokenSpaceExhausted { attempts: u32 },

    /// Directory lookup failed; propagated unchanged from the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}
