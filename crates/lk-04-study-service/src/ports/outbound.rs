//! # Outbound Ports (Driven Ports)
//!
//! Entity Store interfaces the host application implements, plus password
//! hashing. Production backs these with a database; tests use
//! [`crate::adapters::InMemoryStore`].
//!
//! Stores report failures as [`StoreError`], which the services propagate
//! unchanged; retry/backoff, if any, belongs to the storage collaborator.

use lk_02_share_lifecycle::ShareTokenDirectory;
use shared_types::{
    Deck, DeckId, Sentence, SentenceId, StoreError, User, UserId, Word, WordId,
};
use thiserror::Error;

/// Durable records for users.
pub trait UserStore {
    fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Look up by login email (stored lowercase).
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up the user currently holding this password-reset token.
    fn find_user_by_reset_token(&self, token: &str) -> Result<Option<User>, StoreError>;

    /// Insert or update. Must reject a duplicate email with
    /// `UniqueViolation { constraint: "users_email" }`.
    fn save_user(&mut self, user: User) -> Result<(), StoreError>;
}

/// Durable records for decks.
///
/// Implementors also provide [`ShareTokenDirectory`] over the same table so
/// the share lifecycle can resolve and collision-check tokens.
pub trait DeckStore: ShareTokenDirectory {
    fn get_deck(&self, id: DeckId) -> Result<Option<Deck>, StoreError>;

    /// All decks `user` may list: their own plus every public one, newest
    /// first.
    fn decks_visible_to(&self, user: UserId) -> Result<Vec<Deck>, StoreError>;

    /// Insert or update. Must reject a share token already held by another
    /// deck with `UniqueViolation { constraint: "public_share_token" }`.
    fn save_deck(&mut self, deck: Deck) -> Result<(), StoreError>;

    fn delete_deck(&mut self, id: DeckId) -> Result<(), StoreError>;
}

/// Durable records for words.
pub trait WordStore {
    fn get_word(&self, id: WordId) -> Result<Option<Word>, StoreError>;

    /// Fetch any subset of `ids`; missing ids are simply absent from the
    /// result.
    fn get_words(&self, ids: &[WordId]) -> Result<Vec<Word>, StoreError>;

    /// All words of a deck in insertion (created-at) order.
    fn words_for_deck(&self, deck: DeckId) -> Result<Vec<Word>, StoreError>;

    /// Just the ids, for retrieval planning on large decks.
    fn word_ids_for_deck(&self, deck: DeckId) -> Result<Vec<WordId>, StoreError>;

    fn word_count(&self, deck: DeckId) -> Result<usize, StoreError>;

    fn save_word(&mut self, word: Word) -> Result<(), StoreError>;

    fn delete_word(&mut self, id: WordId) -> Result<(), StoreError>;

    /// Cascade helper: drop every word of a deck.
    fn delete_words_in_deck(&mut self, deck: DeckId) -> Result<(), StoreError>;
}

/// Durable records for sentences.
pub trait SentenceStore {
    fn get_sentence(&self, id: SentenceId) -> Result<Option<Sentence>, StoreError>;

    /// All sentences of a word, newest first.
    fn sentences_for_word(&self, word: WordId) -> Result<Vec<Sentence>, StoreError>;

    /// A user's favorited sentences, newest first.
    fn favorites_for_user(&self, user: UserId) -> Result<Vec<Sentence>, StoreError>;

    fn save_sentence(&mut self, sentence: Sentence) -> Result<(), StoreError>;

    fn delete_sentence(&mut self, id: SentenceId) -> Result<(), StoreError>;

    /// Cascade helper: drop every sentence of a word.
    fn delete_sentences_for_word(&mut self, word: WordId) -> Result<(), StoreError>;
}

/// Convenience bundle: everything the study service needs from one store.
pub trait EntityStore: DeckStore + WordStore + SentenceStore + UserStore {}

impl<T> EntityStore for T where T: DeckStore + WordStore + SentenceStore + UserStore {}

/// Password hashing failed (malformed parameters, salt generation, ...).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(pub String);

/// Hashes and verifies login passwords.
pub trait PasswordHasher {
    /// Hash a clear password into a storable string (PHC format for the
    /// production adapter).
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Whether `password` matches `hash`. Malformed hashes verify as false.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
