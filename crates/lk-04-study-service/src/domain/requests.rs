//! # Request Payloads
//!
//! Input shapes for the service operations. Optional fields on update
//! payloads mean "leave unchanged".

use serde::{Deserialize, Serialize};
use shared_types::{Difficulty, Genus, SentenceSource, UserRole, WordId};

/// Payload for creating a deck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDeck {
    pub name: String,
    /// Caller-asserted visibility; honored for admins only, silently
    /// downgraded otherwise.
    pub is_public: Option<bool>,
}

impl NewDeck {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_public: None,
        }
    }
}

/// Payload for updating a deck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckUpdate {
    pub name: Option<String>,
    /// Policy-filtered like on create; non-admins cannot change it.
    pub is_public: Option<bool>,
}

/// Payload for creating (or importing) a word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewWord {
    pub term: String,
    pub meaning: String,
    pub genus: Option<Genus>,
    pub plural: Option<String>,
    pub audio_url: Option<String>,
}

impl NewWord {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
            ..Self::default()
        }
    }
}

/// Payload for updating a word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordUpdate {
    pub term: Option<String>,
    pub meaning: Option<String>,
    pub genus: Option<Option<Genus>>,
    pub plural: Option<Option<String>>,
    pub audio_url: Option<Option<String>>,
}

/// Payload for creating a sentence under a word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSentence {
    pub word_id: WordId,
    pub text: String,
    pub translation: String,
    pub grammar_note: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub source: SentenceSource,
}

/// Payload for updating a sentence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceUpdate {
    pub text: Option<String>,
    pub translation: Option<String>,
    pub grammar_note: Option<Option<String>>,
    pub difficulty: Option<Option<Difficulty>>,
}

/// Payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// Defaults to [`UserRole::Learner`] when absent.
    pub role: Option<UserRole>,
}

/// Outcome of a bulk word import.
///
/// Rows are validated individually; a bad row is counted and reported, never
/// aborts the rest of the import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}
