//! # Shared Types Crate
//!
//! This crate contains the domain entities, typed identifiers, the actor
//! descriptor and the shared store error for the Lernkartei service core.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Typed Identifiers**: Every entity id is a UUID newtype; mixing a
//!   `WordId` into a deck lookup is a compile error, not a runtime bug.
//! - **No Partial States**: A deck's sharing state is a tagged enum
//!   (`ShareState`), so a token without the shareable flag (or vice versa)
//!   is unrepresentable.

pub mod actor;
pub mod entities;
pub mod errors;

pub use actor::Actor;
pub use entities::*;
pub use errors::StoreError;
