//! # Outbound Ports
//!
//! Dependencies the share lifecycle requires its host to provide. Production
//! adapters live in [`crate::adapters`]; stores implement
//! [`ShareTokenDirectory`] on their deck table.

use shared_types::{Deck, ShareToken, StoreError, Timestamp};

/// Produces globally-unique, unpredictable opaque tokens.
///
/// The token is the sole access credential for anonymous readers, so
/// implementations must never derive it from the deck id or a sequence.
pub trait TokenGenerator {
    fn mint(&self) -> ShareToken;
}

/// Source of the current time.
pub trait Clock {
    /// Current unix timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Token-indexed lookup over the deck store.
pub trait ShareTokenDirectory {
    /// Find the deck currently holding `token`, regardless of whose it is.
    ///
    /// Used both for anonymous resolution and for collision checks when
    /// minting.
    fn find_by_token(&self, token: &ShareToken) -> Result<Option<Deck>, StoreError>;
}
