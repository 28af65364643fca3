//! Word operations: CRUD, learned toggling, batch fetch and bulk import.

use std::collections::HashMap;

use lk_01_access_policy::{evaluate, Action, Resource};
use lk_02_share_lifecycle::{Clock, TokenGenerator};
use lk_03_retrieval::reorder;
use shared_types::{Actor, Deck, DeckId, Word, WordId};

use crate::domain::errors::ServiceError;
use crate::domain::requests::{ImportReport, NewWord, WordUpdate};
use crate::ports::outbound::{EntityStore, PasswordHasher};
use crate::service::StudyService;

fn validate_word(req: &NewWord) -> Result<(), String> {
    if req.term.trim().is_empty() {
        return Err("term is empty".into());
    }
    if req.meaning.trim().is_empty() {
        return Err("meaning is empty".into());
    }
    Ok(())
}

impl<ST, TG, CK, PH> StudyService<ST, TG, CK, PH>
where
    ST: EntityStore,
    TG: TokenGenerator + Clone,
    CK: Clock + Clone,
    PH: PasswordHasher,
{
    /// Add a word to a deck the actor may write.
    pub fn add_word(
        &mut self,
        actor: &Actor,
        deck_id: DeckId,
        req: NewWord,
    ) -> Result<Word, ServiceError> {
        let deck = self.load_deck(deck_id)?;
        self.authorize(actor, &Resource::Word { deck: &deck }, Action::Write)?;
        validate_word(&req).map_err(ServiceError::BadRequest)?;

        let now = self.clock.now();
        let word = Word {
            id: WordId::new(),
            deck_id,
            term: req.term.trim().to_string(),
            meaning: req.meaning.trim().to_string(),
            genus: req.genus,
            plural: req.plural,
            audio_url: req.audio_url,
            is_learned: false,
            created_at: now,
            updated_at: now,
        };
        self.store.save_word(word.clone())?;
        Ok(word)
    }

    /// All words of a readable deck, in insertion order.
    pub fn list_words(&self, actor: &Actor, deck_id: DeckId) -> Result<Vec<Word>, ServiceError> {
        let deck = self.visible_deck(actor, deck_id)?;
        Ok(self.store.words_for_deck(deck.id)?)
    }

    /// A single word the actor may read.
    pub fn get_word(&self, actor: &Actor, id: WordId) -> Result<Word, ServiceError> {
        let (word, _deck) = self.word_in_deck(actor, id, Action::Read)?;
        Ok(word)
    }

    /// Update a word's fields. Inner `Option`s clear the field.
    pub fn update_word(
        &mut self,
        actor: &Actor,
        id: WordId,
        update: WordUpdate,
    ) -> Result<Word, ServiceError> {
        let (mut word, _deck) = self.word_in_deck(actor, id, Action::Write)?;

        if let Some(term) = update.term {
            let term = term.trim().to_string();
            if term.is_empty() {
                return Err(ServiceError::BadRequest("term is empty".into()));
            }
            word.term = term;
        }
        if let Some(meaning) = update.meaning {
            let meaning = meaning.trim().to_string();
            if meaning.is_empty() {
                return Err(ServiceError::BadRequest("meaning is empty".into()));
            }
            word.meaning = meaning;
        }
        if let Some(genus) = update.genus {
            word.genus = genus;
        }
        if let Some(plural) = update.plural {
            word.plural = plural;
        }
        if let Some(audio_url) = update.audio_url {
            word.audio_url = audio_url;
        }
        word.updated_at = self.clock.now();

        self.store.save_word(word.clone())?;
        Ok(word)
    }

    /// Delete a word and its sentences.
    pub fn delete_word(&mut self, actor: &Actor, id: WordId) -> Result<(), ServiceError> {
        let (word, _deck) = self.word_in_deck(actor, id, Action::Delete)?;
        self.store.delete_sentences_for_word(word.id)?;
        self.store.delete_word(word.id)?;
        Ok(())
    }

    /// Flip the learned flag.
    pub fn toggle_learned(&mut self, actor: &Actor, id: WordId) -> Result<Word, ServiceError> {
        let (mut word, _deck) = self.word_in_deck(actor, id, Action::Write)?;
        word.is_learned = !word.is_learned;
        word.updated_at = self.clock.now();
        self.store.save_word(word.clone())?;
        Ok(word)
    }

    /// Fetch a batch of words by id, in the requested order.
    ///
    /// Ids that are missing or sit in decks invisible to the actor are
    /// silently dropped, so a stale or guessed id never errors a study
    /// session nor leaks anything.
    pub fn fetch_batch(
        &self,
        actor: &Actor,
        requested: &[WordId],
    ) -> Result<Vec<Word>, ServiceError> {
        let fetched = self.store.get_words(requested)?;

        // A batch usually spans one deck; cache visibility per deck.
        let mut readable: HashMap<DeckId, bool> = HashMap::new();
        let mut allowed = Vec::with_capacity(fetched.len());
        for word in fetched {
            let visible = match readable.get(&word.deck_id) {
                Some(&cached) => cached,
                None => {
                    let visible = match self.store.get_deck(word.deck_id)? {
                        Some(deck) => self.may_read_deck(actor, &deck),
                        None => false,
                    };
                    readable.insert(word.deck_id, visible);
                    visible
                }
            };
            if visible {
                allowed.push(word);
            }
        }
        Ok(reorder(requested, allowed))
    }

    /// Bulk-import words into a deck.
    ///
    /// Rows are validated individually. A bad row is counted and reported
    /// in the result, never aborts the remaining rows.
    pub fn import_words(
        &mut self,
        actor: &Actor,
        deck_id: DeckId,
        rows: Vec<NewWord>,
    ) -> Result<ImportReport, ServiceError> {
        let deck = self.load_deck(deck_id)?;
        self.authorize(actor, &Resource::Word { deck: &deck }, Action::Write)?;

        let mut report = ImportReport::default();
        for (index, row) in rows.into_iter().enumerate() {
            if let Err(reason) = validate_word(&row) {
                report.failed += 1;
                report.errors.push(format!("row {}: {}", index + 1, reason));
                continue;
            }
            let now = self.clock.now();
            let word = Word {
                id: WordId::new(),
                deck_id,
                term: row.term.trim().to_string(),
                meaning: row.meaning.trim().to_string(),
                genus: row.genus,
                plural: row.plural,
                audio_url: row.audio_url,
                is_learned: false,
                created_at: now,
                updated_at: now,
            };
            match self.store.save_word(word) {
                Ok(()) => report.imported += 1,
                Err(err) => {
                    report.failed += 1;
                    report.errors.push(format!("row {}: {}", index + 1, err));
                }
            }
        }
        tracing::info!(
            "[lk-04] imported {} words into deck {} ({} failed)",
            report.imported,
            deck_id,
            report.failed
        );
        Ok(report)
    }

    fn may_read_deck(&self, actor: &Actor, deck: &Deck) -> bool {
        evaluate(actor, &Resource::Deck(deck), Action::Read).is_allowed()
    }
}
