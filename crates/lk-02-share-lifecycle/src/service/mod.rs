//! # Share Lifecycle Manager
//!
//! Drives the `Unshared ⇄ Shared` state machine on decks and resolves
//! anonymous lookups. All operations assume the caller already cleared the
//! deck through the access policy; this module enforces state, not
//! authorization.


use crate::domain::errors::ShareError;
use crate::domain::security::is_plausible_token;
use crate::ports::{Clock, ShareTokenDirectory, TokenGenerator};
use serde::{Deserialize, Serialize};
use shared_types::{Deck, ShareState, ShareToken, StoreError, Timestamp};

/// Bounded collision loop: with 128-bit tokens a second attempt is already
/// a cosmic-ray event.
const MAX_MINT_ATTEMPTS: u32 = 4;

/// Configuration for building externally shareable URLs.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// Base URL of the public frontend, without a trailing slash.
    pub public_base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ShareConfig {
    /// Override the public base URL.
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into();
        self
    }

    /// The anonymous learn URL for `token`.
    pub fn share_url(&self, token: &ShareToken) -> String {
        format!(
            "{}/public/learn/{}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }
}

/// The externally shareable grant returned by `enable` and `regenerate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGrant {
    pub token: ShareToken,
    pub share_url: String,
    pub enabled_at: Timestamp,
}

/// The share lifecycle manager.
///
/// Holds no per-deck state; decks are passed in, mutated, and persisted by
/// the caller. Concurrent mutations of the same deck resolve last-write-wins
/// at the store.
pub struct ShareLifecycle<TG, CK>
where
    TG: TokenGenerator,
    CK: Clock,
{
    token_gen: TG,
    clock: CK,
    config: ShareConfig,
}

impl<TG, CK> ShareLifecycle<TG, CK>
where
    TG: TokenGenerator,
    CK: Clock,
{
    pub fn new(token_gen: TG, clock: CK, config: ShareConfig) -> Self {
        Self {
            token_gen,
            clock,
            config,
        }
    }

    /// Enable anonymous sharing.
    ///
    /// Idempotent on the token: an already-shared deck keeps its token (no
    /// rotation) and only the enabled-at timestamp is refreshed.
    pub fn enable<D>(&self, deck: &mut Deck, directory: &D) -> Result<ShareGrant, ShareError>
    where
        D: ShareTokenDirectory,
    {
        let now = self.clock.now();
        let token = match deck.sharing.token() {
            Some(existing) => existing.clone(),
            None => self.mint_unique(directory)?,
        };

        deck.sharing = ShareState::Shared {
            token: token.clone(),
            enabled_at: now,
        };
        deck.updated_at = now;

        tracing::info!("[lk-02] sharing enabled for deck {}", deck.id);
        Ok(self.grant(token, now))
    }

    /// Disable anonymous sharing, dropping token and timestamp.
    ///
    /// Idempotent: disabling an unshared deck is a no-op.
    pub fn disable(&self, deck: &mut Deck) {
        if deck.sharing.is_shared() {
            tracing::info!("[lk-02] sharing disabled for deck {}", deck.id);
        }
        deck.sharing = ShareState::Unshared;
        deck.updated_at = self.clock.now();
    }

    /// Replace the active token with a fresh one.
    ///
    /// The old token is dead the moment the deck is persisted; any holder is
    /// rejected on their next lookup. Regenerating while unshared is a user
    /// error, distinct from an authorization failure.
    pub fn regenerate<D>(&self, deck: &mut Deck, directory: &D) -> Result<ShareGrant, ShareError>
    where
        D: ShareTokenDirectory,
    {
        if !deck.sharing.is_shared() {
            return Err(ShareError::SharingDisabled);
        }

        let now = self.clock.now();
        let token = self.mint_unique(directory)?;
        deck.sharing = ShareState::Shared {
            token: token.clone(),
            enabled_at: now,
        };
        deck.updated_at = now;

        tracing::info!("[lk-02] share token rotated for deck {}", deck.id);
        Ok(self.grant(token, now))
    }

    /// Owner-facing view of the current grant, `None` when unshared.
    pub fn share_info(&self, deck: &Deck) -> Option<ShareGrant> {
        match &deck.sharing {
            ShareState::Shared { token, enabled_at } => Some(self.grant(token.clone(), *enabled_at)),
            ShareState::Unshared => None,
        }
    }

    /// Anonymous lookup by token.
    ///
    /// Returns the deck only when a deck currently holds exactly this token
    /// in `Shared` state. Unknown tokens, rotated tokens and revoked sharing
    /// are indistinguishable (`None`), so probing reveals nothing.
    pub fn resolve_by_token<D>(
        &self,
        directory: &D,
        candidate: &str,
    ) -> Result<Option<Deck>, StoreError>
    where
        D: ShareTokenDirectory,
    {
        if !is_plausible_token(candidate) {
            tracing::debug!("[lk-02] rejected implausible share token");
            return Ok(None);
        }

        let token = ShareToken::new(candidate);
        let deck = directory
            .find_by_token(&token)?
            .filter(|deck| deck.sharing.token() == Some(&token));
        if deck.is_none() {
            tracing::debug!("[lk-02] share token did not resolve");
        }
        Ok(deck)
    }

    fn grant(&self, token: ShareToken, enabled_at: Timestamp) -> ShareGrant {
        let share_url = self.config.share_url(&token);
        ShareGrant {
            token,
            share_url,
            enabled_at,
        }
    }

    /// Mint a token absent from the directory, retrying a bounded number of
    /// times on collision. Collisions are absorbed silently, never surfaced
    /// as a conflict to the caller.
    fn mint_unique<D>(&self, directory: &D) -> Result<ShareToken, ShareError>
    where
        D: ShareTokenDirectory,
    {
        for attempt in 0..MAX_MINT_ATTEMPTS {
            let candidate = self.token_gen.mint();
            if directory.find_by_token(&candidate)?.is_none() {
                return Ok(candidate);
            }
            tracing::warn!(
                "[lk-02] share token collision on attempt {}, re-minting",
                attempt + 1
            );
        }
        Err(ShareError::TokenSpaceExhausted {
            attempts: MAX_MINT_ATTEMPTS,
        })
    }
}
