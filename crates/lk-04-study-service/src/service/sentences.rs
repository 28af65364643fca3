//! Example-sentence operations: CRUD and the creator's favorites.

use lk_01_access_policy::{Action, Resource};
use lk_02_share_lifecycle::{Clock, TokenGenerator};
use shared_types::{Actor, Sentence, SentenceId, WordId};

use crate::domain::errors::ServiceError;
use crate::domain::requests::{NewSentence, SentenceUpdate};
use crate::ports::outbound::{EntityStore, PasswordHasher};
use crate::service::StudyService;

impl<ST, TG, CK, PH> StudyService<ST, TG, CK, PH>
where
    ST: EntityStore,
    TG: TokenGenerator + Clone,
    CK: Clock + Clone,
    PH: PasswordHasher,
{
    /// Attach a sentence to a word the actor may read.
    ///
    /// Reading suffices: learners studying a public deck contribute their
    /// own sentences without owning the deck. The sentence belongs to its
    /// creator from then on.
    pub fn add_sentence(&mut self, actor: &Actor, req: NewSentence) -> Result<Sentence, ServiceError> {
        let (word, _deck) = self.word_in_deck(actor, req.word_id, Action::Read)?;
        let text = req.text.trim();
        if text.is_empty() {
            return Err(ServiceError::BadRequest("sentence text is empty".into()));
        }
        let translation = req.translation.trim();
        if translation.is_empty() {
            return Err(ServiceError::BadRequest("translation is empty".into()));
        }

        let sentence = Sentence {
            id: SentenceId::new(),
            word_id: word.id,
            creator_id: actor.id,
            text: text.to_string(),
            translation: translation.to_string(),
            grammar_note: req.grammar_note,
            difficulty: req.difficulty,
            is_favorite: false,
            source: req.source,
            created_at: self.clock.now(),
        };
        self.store.save_sentence(sentence.clone())?;
        Ok(sentence)
    }

    /// All sentences of a readable word, newest first.
    pub fn list_sentences(
        &self,
        actor: &Actor,
        word_id: WordId,
    ) -> Result<Vec<Sentence>, ServiceError> {
        let (word, _deck) = self.word_in_deck(actor, word_id, Action::Read)?;
        Ok(self.store.sentences_for_word(word.id)?)
    }

    /// The actor's favorited sentences, newest first.
    pub fn favorite_sentences(&self, actor: &Actor) -> Result<Vec<Sentence>, ServiceError> {
        Ok(self.store.favorites_for_user(actor.id)?)
    }

    /// A single sentence by id.
    ///
    /// Reachability is governed by the owning word's deck; a caller holding
    /// a sentence id already resolved that word.
    pub fn get_sentence(&self, id: SentenceId) -> Result<Sentence, ServiceError> {
        self.store.get_sentence(id)?.ok_or(ServiceError::NotFound)
    }

    /// Update a sentence. Creator-only.
    pub fn update_sentence(
        &mut self,
        actor: &Actor,
        id: SentenceId,
        update: SentenceUpdate,
    ) -> Result<Sentence, ServiceError> {
        let mut sentence = self.store.get_sentence(id)?.ok_or(ServiceError::NotFound)?;
        self.authorize(actor, &Resource::Sentence(&sentence), Action::Write)?;

        if let Some(text) = update.text {
            let text = text.trim().to_string();
            if text.is_empty() {
                return Err(ServiceError::BadRequest("sentence text is empty".into()));
            }
            sentence.text = text;
        }
        if let Some(translation) = update.translation {
            let translation = translation.trim().to_string();
            if translation.is_empty() {
                return Err(ServiceError::BadRequest("translation is empty".into()));
            }
            sentence.translation = translation;
        }
        if let Some(grammar_note) = update.grammar_note {
            sentence.grammar_note = grammar_note;
        }
        if let Some(difficulty) = update.difficulty {
            sentence.difficulty = difficulty;
        }

        self.store.save_sentence(sentence.clone())?;
        Ok(sentence)
    }

    /// Delete a sentence. Creator-only.
    pub fn delete_sentence(&mut self, actor: &Actor, id: SentenceId) -> Result<(), ServiceError> {
        let sentence = self.store.get_sentence(id)?.ok_or(ServiceError::NotFound)?;
        self.authorize(actor, &Resource::Sentence(&sentence), Action::Delete)?;
        self.store.delete_sentence(id)?;
        Ok(())
    }

    /// Flip the favorite bookmark. Creator-only.
    pub fn toggle_favorite(&mut self, actor: &Actor, id: SentenceId) -> Result<Sentence, ServiceError> {
        let mut sentence = self.store.get_sentence(id)?.ok_or(ServiceError::NotFound)?;
        self.authorize(actor, &Resource::Sentence(&sentence), Action::Write)?;
        sentence.is_favorite = !sentence.is_favorite;
        self.store.save_sentence(sentence.clone())?;
        Ok(sentence)
    }
}
