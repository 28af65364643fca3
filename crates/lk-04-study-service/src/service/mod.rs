//! # Study Service
//!
//! The application service composing policy, share lifecycle and retrieval
//! strategy over the Entity Store. One struct, operations split per entity:
//!
//! - `decks.rs` - deck CRUD, sharing lifecycle, retrieval planning
//! - `words.rs` - word CRUD, batch fetch, bulk import
//! - `sentences.rs` - example-sentence CRUD and favorites
//! - `users.rs` - registration, login verification, password reset
//!
//! Every operation takes the caller as an [`Actor`] and clears the touched
//! resources through the access policy before doing anything else.

mod decks;
mod sentences;
mod users;
mod words;

use lk_01_access_policy::{evaluate, Action, Decision, Resource};
use lk_02_share_lifecycle::{Clock, ShareConfig, ShareLifecycle, TokenGenerator};
use lk_03_retrieval::{RetrievalConfig, RetrievalStrategy};
use shared_types::{Actor, Deck, DeckId, Word, WordId};

use crate::domain::errors::ServiceError;
use crate::ports::outbound::{EntityStore, PasswordHasher};

/// Configuration of the study service and its collaborators.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub share: ShareConfig,
    pub retrieval: RetrievalConfig,
}

/// The application service over one Entity Store.
pub struct StudyService<ST, TG, CK, PH>
where
    ST: EntityStore,
    TG: TokenGenerator + Clone,
    CK: Clock + Clone,
    PH: PasswordHasher,
{
    store: ST,
    share: ShareLifecycle<TG, CK>,
    retrieval: RetrievalStrategy,
    token_gen: TG,
    clock: CK,
    hasher: PH,
}

impl<ST, TG, CK, PH> StudyService<ST, TG, CK, PH>
where
    ST: EntityStore,
    TG: TokenGenerator + Clone,
    CK: Clock + Clone,
    PH: PasswordHasher,
{
    pub fn new(store: ST, token_gen: TG, clock: CK, hasher: PH, config: ServiceConfig) -> Self {
        Self {
            store,
            share: ShareLifecycle::new(token_gen.clone(), clock.clone(), config.share),
            retrieval: RetrievalStrategy::new(config.retrieval),
            token_gen,
            clock,
            hasher,
        }
    }

    /// Direct access to the underlying store, for host-side wiring.
    pub fn store(&self) -> &ST {
        &self.store
    }

    // ========================================================================
    // Shared helpers
    // ========================================================================

    /// Clear `action` on `resource` through the policy.
    ///
    /// Mutations imply visibility: the read check runs first, so a mutation
    /// on an invisible resource denies as not-found rather than forbidden
    /// and reveals nothing.
    fn authorize(
        &self,
        actor: &Actor,
        resource: &Resource<'_>,
        action: Action,
    ) -> Result<(), ServiceError> {
        if action.is_mutation() {
            if let Decision::Deny(reason) = evaluate(actor, resource, Action::Read) {
                tracing::debug!("[lk-04] read gate denied ahead of {:?}", action);
                return Err(reason.into());
            }
        }
        match evaluate(actor, resource, action) {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => {
                tracing::debug!("[lk-04] {:?} denied: {:?}", action, reason);
                Err(reason.into())
            }
        }
    }

    /// Load a deck or fail with the merged not-found.
    fn load_deck(&self, id: DeckId) -> Result<Deck, ServiceError> {
        self.store.get_deck(id)?.ok_or(ServiceError::NotFound)
    }

    /// Load a deck the actor may read.
    fn visible_deck(&self, actor: &Actor, id: DeckId) -> Result<Deck, ServiceError> {
        let deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Read)?;
        Ok(deck)
    }

    /// Load a word and its governing deck, cleared for `action`.
    fn word_in_deck(
        &self,
        actor: &Actor,
        id: WordId,
        action: Action,
    ) -> Result<(Word, Deck), ServiceError> {
        let word = self.store.get_word(id)?.ok_or(ServiceError::NotFound)?;
        let deck = self.load_deck(word.deck_id)?;
        self.authorize(actor, &Resource::Word { deck: &deck }, action)?;
        Ok((word, deck))
    }
}
