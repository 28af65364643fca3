//! # Share Lifecycle (lk-02)
//!
//! Manages a deck's anonymous-sharing state: minting and revoking the share
//! token that is the sole access credential for unauthenticated readers.
//!
//! ## State Machine
//!
//! ```text
//!              enable (mint token)
//!   Unshared ─────────────────────→ Shared { token, enabled_at }
//!      ↑                               │        │
//!      └────────── disable ────────────┘        │ regenerate
//!                (drops token)                  ↓ (fresh token, old one dead)
//!                                     Shared { token', enabled_at' }
//! ```
//!
//! ## Invariants
//!
//! | # | Invariant |
//! |---|-----------|
//! | 1 | A token exists iff the deck is `Shared` (enforced by the enum) |
//! | 2 | Exactly one active token per deck |
//! | 3 | `enable` on a `Shared` deck reuses the token, refreshes the timestamp |
//! | 4 | `disable` is an unconditional, idempotent transition to `Unshared` |
//! | 5 | `regenerate` requires `Shared`; a rotated token dies immediately |
//! | 6 | Tokens are unpredictable and never derived from the deck id |
//!
//! Authorization is the caller's job: the service layer clears a deck through
//! the access-policy subsystem before handing it to this manager.
//!
//! ## Concurrency
//!
//! Two concurrent `regenerate` calls resolve last-write-wins at the store;
//! the loser's grant goes stale immediately, which is acceptable because the
//! canonical state is always re-read, never cached here.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::ShareError;
pub use domain::view::{PublicDeckView, PublicOwner, PublicWordView};
pub use ports::{Clock, ShareTokenDirectory, TokenGenerator};
pub use service::{ShareConfig, ShareGrant, ShareLifecycle};
