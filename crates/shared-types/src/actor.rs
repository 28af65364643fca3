//! # Actor Descriptor
//!
//! Identity of an authenticated caller, as translated by the transport layer
//! from whatever authentication collaborator it uses.
//!
//! Anonymous callers never carry an `Actor`: the only operation open to them
//! is share-token resolution, which takes a bare token.

use crate::entities::{UserId, UserRole};
use serde::{Deserialize, Serialize};

/// An authenticated caller: who they are and what role they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub role: UserRole,
}

impl Actor {
    pub fn new(id: UserId, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Whether this actor bypasses ownership checks.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether this actor owns a resource attributed to `owner_id`.
    pub fn owns(&self, owner_id: UserId) -> bool {
        self.id == owner_id
    }
}
