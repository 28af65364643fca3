//! # Access Policy (lk-01)
//!
//! Pure decision module for the flashcard service: given an actor, a resource
//! and an action, decide `Allow` or `Deny(reason)`. No I/O, no clock, no
//! store; callers load the resource first and ask afterwards.
//!
//! ## Rule Order
//!
//! Rules are evaluated as one ordered table, first match wins:
//!
//! | # | Rule | Outcome |
//! |---|------|---------|
//! | 1 | Admin | `Allow` for any action on any resource |
//! | 2 | Deck/Word read | `Allow` for owner or public deck, else `Deny(NotFoundOrForbidden)` |
//! | 3 | Deck/Word write/delete/share | `Allow` for owner, else `Deny(Forbidden)` |
//! | 4 | Sentence write/delete | `Allow` for creator, else `Deny(Forbidden)` |
//!
//! ## Existence Leakage
//!
//! Read denials carry `NotFoundOrForbidden`: a caller probing a foreign
//! private deck gets the same answer as for a deck that does not exist.
//! Write denials carry plain `Forbidden` because they are only reachable once
//! the resource's existence is already implied by context.
//!
//! Anonymous callers have no path through this module at all; their single
//! entry point is share-token resolution in the share-lifecycle subsystem.

pub mod policy;

pub use policy::{evaluate, sanitize_public_flag, Action, Decision, DenyReason, Resource};
