//! # Study Service (lk-04)
//!
//! Application services for the flashcard core: deck, word, sentence and
//! user operations composed from the access policy (lk-01), the share
//! lifecycle (lk-02) and the retrieval strategy (lk-03) over Entity Store
//! ports.
//!
//! ## Architecture
//!
//! - `domain/` - Request/response types and the service error taxonomy
//! - `ports/` - Outbound port traits (Entity Store, password hashing)
//! - `adapters/` - In-memory stores and the Argon2 hasher
//! - `service/` - The `StudyService`, its operations split per entity
//!
//! ## Behavioral Contracts
//!
//! | # | Contract |
//! |---|----------|
//! | 1 | Caller-asserted `is_public` is policy-filtered before persistence |
//! | 2 | Deletes are permission-checked before any cascade is issued |
//! | 3 | Cascade order is Sentences → Words → Deck |
//! | 4 | Word-count and retrieval-plan reads pass the full deck-visibility check |
//! | 5 | Read denials and missing resources are indistinguishable to callers |
//!
//! ## Usage
//!
//! ```ignore
//! use lk_04_study_service::{InMemoryStore, ServiceConfig, StudyService};
//! use lk_02_share_lifecycle::adapters::{SystemClock, UuidTokenGenerator};
//! use lk_04_study_service::adapters::Argon2Hasher;
//!
//! let mut service = StudyService::new(
//!     InMemoryStore::default(),
//!     UuidTokenGenerator,
//!     SystemClock,
//!     Argon2Hasher,
//!     ServiceConfig::default(),
//! );
//!
//! let deck = service.create_deck(&actor, NewDeck::named("Lektion 1"))?;
//! let grant = service.enable_sharing(&actor, deck.id)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{Argon2Hasher, InMemoryStore};
pub use domain::errors::ServiceError;
pub use domain::requests::{
    DeckUpdate, ImportReport, NewDeck, NewSentence, NewUser, NewWord, SentenceUpdate, WordUpdate,
};
pub use domain::responses::DeckSummary;
pub use ports::outbound::{
    DeckStore, EntityStore, PasswordError, PasswordHasher, SentenceStore, UserStore, WordStore,
};
pub use service::{ServiceConfig, StudyService};
