//! # In-Memory Entity Store
//!
//! `HashMap`-backed implementation of every store port, for unit and
//! integration tests. Production backs the ports with a relational store;
//! the uniqueness constraints enforced here mirror the column constraints
//! that store would carry (`users.email`, `decks.public_share_token`).

use lk_02_share_lifecycle::ShareTokenDirectory;
use shared_types::{
    Deck, DeckId, Sentence, SentenceId, ShareToken, StoreError, User, UserId, Word, WordId,
};
use std::collections::HashMap;

use crate::ports::outbound::{DeckStore, SentenceStore, UserStore, WordStore};

/// In-memory store over all four entity tables.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: HashMap<UserId, User>,
    decks: HashMap<DeckId, Deck>,
    words: HashMap<WordId, Word>,
    sentences: HashMap<SentenceId, Sentence>,
}

impl UserStore for InMemoryStore {
    fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.values().find(|u| u.email == email).cloned())
    }

    fn find_user_by_reset_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .values()
            .find(|u| {
                u.password_reset
                    .as_ref()
                    .is_some_and(|reset| reset.token == token)
            })
            .cloned())
    }

    fn save_user(&mut self, user: User) -> Result<(), StoreError> {
        let email_taken = self
            .users
            .values()
            .any(|other| other.id != user.id && other.email == user.email);
        if email_taken {
            return Err(StoreError::UniqueViolation {
                constraint: "users_email",
            });
        }
        self.users.insert(user.id, user);
        Ok(())
    }
}

impl ShareTokenDirectory for InMemoryStore {
    fn find_by_token(&self, token: &ShareToken) -> Result<Option<Deck>, StoreError> {
        Ok(self
            .decks
            .values()
            .find(|deck| deck.sharing.token() == Some(token))
            .cloned())
    }
}

impl DeckStore for InMemoryStore {
    fn get_deck(&self, id: DeckId) -> Result<Option<Deck>, StoreError> {
        Ok(self.decks.get(&id).cloned())
    }

    fn decks_visible_to(&self, user: UserId) -> Result<Vec<Deck>, StoreError> {
        let mut decks: Vec<Deck> = self
            .decks
            .values()
            .filter(|deck| deck.owner_id == user || deck.is_public)
            .cloned()
            .collect();
        // Newest first; id as tie-breaker for a stable order.
        decks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(decks)
    }

    fn save_deck(&mut self, deck: Deck) -> Result<(), StoreError> {
        if let Some(token) = deck.sharing.token() {
            let held_elsewhere = self
                .decks
                .values()
                .any(|other| other.id != deck.id && other.sharing.token() == Some(token));
            if held_elsewhere {
                return Err(StoreError::UniqueViolation {
                    constraint: "public_share_token",
                });
            }
        }
        self.decks.insert(deck.id, deck);
        Ok(())
    }

    fn delete_deck(&mut self, id: DeckId) -> Result<(), StoreError> {
        self.decks.remove(&id);
        Ok(())
    }
}

impl WordStore for InMemoryStore {
    fn get_word(&self, id: WordId) -> Result<Option<Word>, StoreError> {
        Ok(self.words.get(&id).cloned())
    }

    fn get_words(&self, ids: &[WordId]) -> Result<Vec<Word>, StoreError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.words.get(id).cloned())
            .collect())
    }

    fn words_for_deck(&self, deck: DeckId) -> Result<Vec<Word>, StoreError> {
        let mut words: Vec<Word> = self
            .words
            .values()
            .filter(|word| word.deck_id == deck)
            .cloned()
            .collect();
        words.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(words)
    }

    fn word_ids_for_deck(&self, deck: DeckId) -> Result<Vec<WordId>, StoreError> {
        Ok(self.words_for_deck(deck)?.into_iter().map(|w| w.id).collect())
    }

    fn word_count(&self, deck: DeckId) -> Result<usize, StoreError> {
        Ok(self.words.values().filter(|w| w.deck_id == deck).count())
    }

    fn save_word(&mut self, word: Word) -> Result<(), StoreError> {
        self.words.insert(word.id, word);
        Ok(())
    }

    fn delete_word(&mut self, id: WordId) -> Result<(), StoreError> {
        self.words.remove(&id);
        Ok(())
    }

    fn delete_words_in_deck(&mut self, deck: DeckId) -> Result<(), StoreError> {
        self.words.retain(|_, word| word.deck_id != deck);
        Ok(())
    }
}

impl SentenceStore for InMemoryStore {
    fn get_sentence(&self, id: SentenceId) -> Result<Option<Sentence>, StoreError> {
        Ok(self.sentences.get(&id).cloned())
    }

    fn sentences_for_word(&self, word: WordId) -> Result<Vec<Sentence>, StoreError> {
        let mut sentences: Vec<Sentence> = self
            .sentences
            .values()
            .filter(|s| s.word_id == word)
            .cloned()
            .collect();
        sentences.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(sentences)
    }

    fn favorites_for_user(&self, user: UserId) -> Result<Vec<Sentence>, StoreError> {
        let mut sentences: Vec<Sentence> = self
            .sentences
            .values()
            .filter(|s| s.creator_id == user && s.is_favorite)
            .cloned()
            .collect();
        sentences.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(sentences)
    }

    fn save_sentence(&mut self, sentence: Sentence) -> Result<(), StoreError> {
        self.sentences.insert(sentence.id, sentence);
        Ok(())
    }

    fn delete_sentence(&mut self, id: SentenceId) -> Result<(), StoreError> {
        self.sentences.remove(&id);
        Ok(())
    }

    fn delete_sentences_for_word(&mut self, word: WordId) -> Result<(), StoreError> {
        self.sentences.retain(|_, s| s.word_id != word);
        Ok(())
    }
}
