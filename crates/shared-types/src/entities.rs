//! # Core Domain Entities
//!
//! Defines the flashcard domain entities and their typed identifiers.
//!
//! ## Clusters
//!
//! - **Accounts**: `User`, `UserRole`, `ResetToken`
//! - **Collections**: `Deck`, `ShareState`, `ShareToken`
//! - **Content**: `Word`, `Genus`, `Sentence`, `Difficulty`, `SentenceSource`

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Unique identifier of a [`User`].
    UserId
);
entity_id!(
    /// Unique identifier of a [`Deck`].
    DeckId
);
entity_id!(
    /// Unique identifier of a [`Word`].
    WordId
);
entity_id!(
    /// Unique identifier of a [`Sentence`].
    SentenceId
);

// =============================================================================
// CLUSTER A: ACCOUNTS
// =============================================================================

/// Role of a registered user.
///
/// Admins bypass every ownership check; the distinction between learners and
/// teachers only matters to outer layers (course management is not part of
/// this core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular learner account (default on registration).
    #[default]
    Learner,
    /// Teacher account.
    Teacher,
    /// Administrator: full access to every resource.
    Admin,
}

impl UserRole {
    /// Whether this role bypasses ownership checks.
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// A pending password-reset credential. At most one is active per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetToken {
    /// Opaque reset credential handed to the user out of band.
    pub token: String,
    /// Unix timestamp after which the token is rejected.
    pub expires_at: Timestamp,
}

/// A registered account.
///
/// Users are never hard-deleted; deactivation flips `is_active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique login email, stored lowercase.
    pub email: String,
    /// Argon2 PHC-format hash; the clear password never touches an entity.
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    /// Inactive accounts fail authentication but keep their data.
    pub is_active: bool,
    /// Single active password-reset token, if one was requested.
    pub password_reset: Option<ResetToken>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// =============================================================================
// CLUSTER B: COLLECTIONS
// =============================================================================

/// Opaque anonymous-access credential for a shared deck.
///
/// Minting is the job of the share-lifecycle subsystem; this type only
/// guarantees the credential is carried around without being confused with
/// other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anonymous-sharing state of a deck.
///
/// Modeled as a tagged enum rather than nullable token/timestamp columns:
/// a token can only exist together with its enabled-at timestamp, and
/// revoking sharing discards both at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShareState {
    /// Not anonymously reachable. No token exists.
    #[default]
    Unshared,
    /// Anonymously reachable by holders of `token`.
    Shared {
        /// The sole active access credential for this deck.
        token: ShareToken,
        /// When sharing was (last) enabled or the token (last) rotated.
        enabled_at: Timestamp,
    },
}

impl ShareState {
    /// Whether anonymous access is currently enabled.
    pub fn is_shared(&self) -> bool {
        matches!(self, ShareState::Shared { .. })
    }

    /// The active token, if sharing is enabled.
    pub fn token(&self) -> Option<&ShareToken> {
        match self {
            ShareState::Shared { token, .. } => Some(token),
            ShareState::Unshared => None,
        }
    }
}

/// A collection of words owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    /// Owning user. Immutable after creation.
    pub owner_id: UserId,
    /// Globally readable by any authenticated user. Only admins may set this.
    pub is_public: bool,
    /// Anonymous-sharing state (independent of `is_public`).
    pub sharing: ShareState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// =============================================================================
// CLUSTER C: CONTENT
// =============================================================================

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genus {
    Masculine,
    Feminine,
    Neuter,
}

/// A single vocabulary entry inside a deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// Owning deck. Immutable after creation.
    pub deck_id: DeckId,
    /// Display form in the language being learned.
    pub term: String,
    /// Meaning in the learner's language.
    pub meaning: String,
    /// Grammatical gender, for nouns.
    pub genus: Option<Genus>,
    /// Plural form, for nouns.
    pub plural: Option<String>,
    /// Reference to pronunciation audio, if any.
    pub audio_url: Option<String>,
    /// Study-progress flag, flipped by the owner.
    pub is_learned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// CEFR difficulty tag for an example sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// Provenance of an example sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceSource {
    /// Produced by the AI assistant collaborator.
    #[default]
    AiGenerated,
    /// Typed in by a user.
    UserCreated,
}

/// A bilingual example sentence attached to a word.
///
/// The effective owner is `creator_id`, the user who generated or wrote the
/// sentence, which is not necessarily the owner of the word's deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    pub id: SentenceId,
    /// Word this sentence illustrates. Immutable after creation.
    pub word_id: WordId,
    /// User who created or generated the sentence.
    pub creator_id: UserId,
    /// Sentence in the language being learned.
    pub text: String,
    /// Translation into the learner's language.
    pub translation: String,
    pub grammar_note: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Personal bookmark of the creator.
    pub is_favorite: bool,
    pub source: SentenceSource,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_state_default_is_unshared() {
        let state = ShareState::default();
        assert!(!state.is_shared());
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_share_state_shared_exposes_token() {
        let state = ShareState::Shared {
            token: ShareToken::new("abc"),
            enabled_at: 1_700_000_000,
        };
        assert!(state.is_shared());
        assert_eq!(state.token().map(ShareToken::as_str), Some("abc"));
    }

    #[test]
    fn test_entity_ids_are_distinct_types_and_unique() {
        let a = DeckId::new();
        let b = DeckId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_role_serde_is_lowercase() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn test_sentence_source_serde_is_kebab_case() {
        let json = serde_json::to_string(&SentenceSource::AiGenerated).unwrap();
        assert_eq!(json, "\"ai-generated\"");
    }
}
