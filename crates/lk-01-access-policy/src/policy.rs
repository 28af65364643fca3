//! # Policy Rules
//!
//! The ordered rule table and its evaluation function.

use serde::{Deserialize, Serialize};
use shared_types::{Actor, Deck, Sentence, UserRole};

/// What a caller wants to do with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Read,
    Write,
    Delete,
    /// Mutating a deck's anonymous-sharing state (enable/disable/rotate).
    Share,
}

impl Action {
    /// Whether this action mutates the resource.
    pub fn is_mutation(self) -> bool {
        !matches!(self, Action::Read)
    }
}

/// The resource a decision is asked about.
///
/// A word carries its owning deck because a word's effective owner is the
/// deck's owner; a sentence's effective owner is the user recorded on it.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Deck(&'a Deck),
    Word { deck: &'a Deck },
    Sentence(&'a Sentence),
}

impl Resource<'_> {
    /// The deck governing visibility, if this resource lives under one.
    fn governing_deck(&self) -> Option<&Deck> {
        match *self {
            Resource::Deck(deck) | Resource::Word { deck } => Some(deck),
            Resource::Sentence(_) => None,
        }
    }
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenyReason {
    /// Resource is absent, or present but invisible to this actor. The two
    /// cases are merged on purpose so probing cannot reveal existence.
    NotFoundOrForbidden,
    /// Resource is known to the actor, but this action is not theirs to take.
    Forbidden,
}

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// A single rule: returns `None` when it does not apply.
type Rule = fn(&Actor, &Resource<'_>, Action) -> Option<Decision>;

/// The ordered rule table. First matching rule wins.
const RULES: &[Rule] = &[
    admin_bypass,
    deck_visibility_read,
    deck_ownership_mutation,
    sentence_ownership,
];

/// Decide whether `actor` may perform `action` on `resource`.
pub fn evaluate(actor: &Actor, resource: &Resource<'_>, action: Action) -> Decision {
    for rule in RULES {
        if let Some(decision) = rule(actor, resource, action) {
            return decision;
        }
    }
    // Unreachable with the current table; deny defensively rather than panic.
    Decision::Deny(DenyReason::Forbidden)
}

/// Rule 1: admins may do anything to anything.
fn admin_bypass(actor: &Actor, _resource: &Resource<'_>, _action: Action) -> Option<Decision> {
    actor.is_admin().then_some(Decision::Allow)
}

/// Rule 2: reading a deck or its words requires ownership or a public deck.
fn deck_visibility_read(actor: &Actor, resource: &Resource<'_>, action: Action) -> Option<Decision> {
    if action != Action::Read {
        return None;
    }
    let deck = resource.governing_deck()?;
    if actor.owns(deck.owner_id) || deck.is_public {
        Some(Decision::Allow)
    } else {
        Some(Decision::Deny(DenyReason::NotFoundOrForbidden))
    }
}

/// Rule 3: writing, deleting or sharing a deck (or its words) is owner-only.
fn deck_ownership_mutation(
    actor: &Actor,
    resource: &Resource<'_>,
    action: Action,
) -> Option<Decision> {
    if !action.is_mutation() {
        return None;
    }
    let deck = resource.governing_deck()?;
    if actor.owns(deck.owner_id) {
        Some(Decision::Allow)
    } else {
        Some(Decision::Deny(DenyReason::Forbidden))
    }
}

/// Rule 4: a sentence belongs to its creator, whatever deck its word sits in.
///
/// Sentence reads are allowed here: reachability is governed by the owning
/// word's deck, which the caller already resolved under rule 2.
fn sentence_ownership(actor: &Actor, resource: &Resource<'_>, action: Action) -> Option<Decision> {
    let Resource::Sentence(sentence) = *resource else {
        return None;
    };
    if !action.is_mutation() || actor.owns(sentence.creator_id) {
        Some(Decision::Allow)
    } else {
        Some(Decision::Deny(DenyReason::Forbidden))
    }
}

/// Filter a caller-asserted `is_public` flag before persistence.
///
/// Only admins may change deck visibility. For everyone else the request is
/// silently downgraded (kept, not rejected) so clients can submit the same
/// payload regardless of role. On create pass `current = false`.
pub fn sanitize_public_flag(role: UserRole, requested: Option<bool>, current: bool) -> bool {
    if role.is_admin() {
        requested.unwrap_or(current)
    } else {
        current
    }
}
