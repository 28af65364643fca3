//! Deck operations: CRUD, the sharing lifecycle and retrieval planning.

use lk_01_access_policy::{sanitize_public_flag, Action, Resource};
use lk_02_share_lifecycle::{Clock, PublicDeckView, ShareGrant, TokenGenerator};
use lk_03_retrieval::RetrievalPlan;
use shared_types::{Actor, Deck, DeckId, ShareState, StoreError};

use crate::domain::errors::ServiceError;
use crate::domain::requests::{DeckUpdate, NewDeck};
use crate::domain::responses::DeckSummary;
use crate::ports::outbound::{EntityStore, PasswordHasher};
use crate::service::StudyService;

impl<ST, TG, CK, PH> StudyService<ST, TG, CK, PH>
where
    ST: EntityStore,
    TG: TokenGenerator + Clone,
    CK: Clock + Clone,
    PH: PasswordHasher,
{
    /// Create a deck owned by the actor.
    ///
    /// A caller-asserted `is_public` is policy-filtered: only admins can
    /// create a public deck, everyone else gets a private one regardless of
    /// the payload.
    pub fn create_deck(&mut self, actor: &Actor, req: NewDeck) -> Result<Deck, ServiceError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(ServiceError::BadRequest("deck name is empty".into()));
        }

        let now = self.clock.now();
        let deck = Deck {
            id: DeckId::new(),
            name: name.to_string(),
            owner_id: actor.id,
            is_public: sanitize_public_flag(actor.role, req.is_public, false),
            sharing: ShareState::Unshared,
            created_at: now,
            updated_at: now,
        };
        self.store.save_deck(deck.clone())?;
        tracing::info!("[lk-04] deck {} created by {}", deck.id, actor.id);
        Ok(deck)
    }

    /// Every deck the actor may browse, newest first, with word counts.
    pub fn list_decks(&self, actor: &Actor) -> Result<Vec<DeckSummary>, ServiceError> {
        let decks = self.store.decks_visible_to(actor.id)?;
        decks
            .into_iter()
            .map(|deck| {
                let word_count = self.store.word_count(deck.id)?;
                Ok(DeckSummary { deck, word_count })
            })
            .collect()
    }

    /// A single deck with its word count.
    pub fn get_deck(&self, actor: &Actor, id: DeckId) -> Result<DeckSummary, ServiceError> {
        let deck = self.visible_deck(actor, id)?;
        let word_count = self.store.word_count(deck.id)?;
        Ok(DeckSummary { deck, word_count })
    }

    /// Rename a deck or (admins only) change its visibility.
    pub fn update_deck(
        &mut self,
        actor: &Actor,
        id: DeckId,
        update: DeckUpdate,
    ) -> Result<Deck, ServiceError> {
        let mut deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Write)?;

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ServiceError::BadRequest("deck name is empty".into()));
            }
            deck.name = name;
        }
        deck.is_public = sanitize_public_flag(actor.role, update.is_public, deck.is_public);
        deck.updated_at = self.clock.now();

        self.store.save_deck(deck.clone())?;
        Ok(deck)
    }

    /// Delete a deck and everything under it.
    ///
    /// Cascade order is sentences, then words, then the deck, so a failure
    /// partway through never leaves orphans pointing at a missing parent.
    pub fn delete_deck(&mut self, actor: &Actor, id: DeckId) -> Result<(), ServiceError> {
        let deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Delete)?;

        for word_id in self.store.word_ids_for_deck(id)? {
            self.store.delete_sentences_for_word(word_id)?;
        }
        self.store.delete_words_in_deck(id)?;
        self.store.delete_deck(id)?;
        tracing::info!("[lk-04] deck {} deleted by {}", id, actor.id);
        Ok(())
    }

    // ========================================================================
    // Sharing
    // ========================================================================

    /// Enable anonymous sharing and return the grant.
    pub fn enable_sharing(&mut self, actor: &Actor, id: DeckId) -> Result<ShareGrant, ServiceError> {
        let mut deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Share)?;
        let grant = self.share.enable(&mut deck, &self.store)?;
        self.store.save_deck(deck)?;
        Ok(grant)
    }

    /// Revoke anonymous sharing. Idempotent.
    pub fn disable_sharing(&mut self, actor: &Actor, id: DeckId) -> Result<(), ServiceError> {
        let mut deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Share)?;
        self.share.disable(&mut deck);
        self.store.save_deck(deck)?;
        Ok(())
    }

    /// Rotate the share token, invalidating the old one.
    pub fn regenerate_share_token(
        &mut self,
        actor: &Actor,
        id: DeckId,
    ) -> Result<ShareGrant, ServiceError> {
        let mut deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Share)?;
        let grant = self.share.regenerate(&mut deck, &self.store)?;
        self.store.save_deck(deck)?;
        Ok(grant)
    }

    /// The current grant, `None` when the deck is not shared.
    pub fn share_info(&self, actor: &Actor, id: DeckId) -> Result<Option<ShareGrant>, ServiceError> {
        let deck = self.load_deck(id)?;
        self.authorize(actor, &Resource::Deck(&deck), Action::Share)?;
        Ok(self.share.share_info(&deck))
    }

    /// Anonymous lookup of a shared deck by token.
    ///
    /// Unknown, rotated and revoked tokens all come back as the same
    /// not-found.
    pub fn resolve_shared_deck(&self, token: &str) -> Result<PublicDeckView, ServiceError> {
        let deck = self
            .share
            .resolve_by_token(&self.store, token)?
            .ok_or(ServiceError::NotFound)?;
        let owner = self
            .store
            .get_user(deck.owner_id)?
            .ok_or_else(|| StoreError::Backend(format!("deck {} owner missing", deck.id)))?;
        let words = self.store.words_for_deck(deck.id)?;
        Ok(PublicDeckView::project(&deck, &owner, &words))
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    /// How a study session should load this deck's words.
    pub fn plan_retrieval(&self, actor: &Actor, id: DeckId) -> Result<RetrievalPlan, ServiceError> {
        let deck = self.visible_deck(actor, id)?;
        let ids = self.store.word_ids_for_deck(deck.id)?;
        Ok(self.retrieval.plan(ids))
    }

    /// Word count of a deck the actor may read.
    pub fn word_count(&self, actor: &Actor, id: DeckId) -> Result<usize, ServiceError> {
        let deck = self.visible_deck(actor, id)?;
        Ok(self.store.word_count(deck.id)?)
    }
}
