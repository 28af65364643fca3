//! # Public Projection
//!
//! What an anonymous token holder gets to see of a shared deck. The
//! projection is read-only and deliberately narrow: no tokens, no learning
//! progress, no grammatical metadata, nothing about the owner beyond a
//! display name.

use serde::{Deserialize, Serialize};
use shared_types::{Deck, DeckId, Timestamp, User, UserId, Word, WordId};

/// Owner attribution shown on a publicly shared deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicOwner {
    pub id: UserId,
    pub name: String,
}

/// A word as exposed to anonymous readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicWordView {
    pub id: WordId,
    pub term: String,
    pub meaning: String,
}

/// Anonymous read-only view of a shared deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicDeckView {
    pub id: DeckId,
    pub name: String,
    pub word_count: usize,
    pub created_at: Timestamp,
    pub owner: PublicOwner,
    pub words: Vec<PublicWordView>,
}

impl PublicDeckView {
    /// Project a resolved deck, its owner and its words into the anonymous
    /// view.
    pub fn project(deck: &Deck, owner: &User, words: &[Word]) -> Self {
        Self {
            id: deck.id,
            name: deck.name.clone(),
            word_count: words.len(),
            created_at: deck.created_at,
            owner: PublicOwner {
                id: owner.id,
                name: owner.full_name.clone(),
            },
            words: words
                .iter()
                .map(|word| PublicWordView {
                    id: word.id,
                    term: word.term.clone(),
                    meaning: word.meaning.clone(),
                })
                .collect(),
        }
    }
}
