//! # Sharing and Study Sessions End to End
//!
//! The two anonymous-facing journeys:
//!
//! 1. **Share journey**: owner enables sharing, a token holder reads the
//!    public projection, rotation and revocation kill old tokens
//! 2. **Study session**: small decks load directly, large decks get a
//!    shuffled batched plan that a session drains chunk by chunk

#[cfg(test)]
mod tests {
    use lk_02_share_lifecycle::adapters::{SystemClock, UuidTokenGenerator};
    use lk_03_retrieval::RetrievalPlan;
    use lk_04_study_service::adapters::PlainTextHasher;
    use lk_04_study_service::{
        InMemoryStore, NewDeck, NewUser, NewWord, ServiceConfig, ServiceError, StudyService,
    };
    use shared_types::{Actor, DeckId, WordId};
    use std::collections::BTreeSet;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Service = StudyService<InMemoryStore, UuidTokenGenerator, SystemClock, PlainTextHasher>;

    fn service() -> Service {
        StudyService::new(
            InMemoryStore::default(),
            UuidTokenGenerator,
            SystemClock,
            PlainTextHasher,
            ServiceConfig::default(),
        )
    }

    fn owner(svc: &mut Service) -> Actor {
        let user = svc
            .register(NewUser {
                email: "besitzer@example.com".into(),
                password: "streng-geheim".into(),
                full_name: "Bernd Besitzer".into(),
                role: None,
            })
            .unwrap();
        Actor::new(user.id, user.role)
    }

    fn populated_deck(svc: &mut Service, actor: &Actor, words: usize) -> DeckId {
        let deck = svc.create_deck(actor, NewDeck::named("Wortschatz")).unwrap();
        let rows: Vec<NewWord> = (0..words)
            .map(|i| NewWord::new(format!("Wort {i}"), format!("word {i}")))
            .collect();
        let report = svc.import_words(actor, deck.id, rows).unwrap();
        assert_eq!(report.imported, words);
        deck.id
    }

    // =============================================================================
    // SHARE JOURNEY
    // =============================================================================

    #[test]
    fn test_anonymous_share_journey() {
        crate::init_tracing();
        let mut svc = service();
        let actor = owner(&mut svc);
        let deck_id = populated_deck(&mut svc, &actor, 3);

        // The deck stays private; only the token opens it.
        let grant = svc.enable_sharing(&actor, deck_id).unwrap();
        let view = svc.resolve_shared_deck(grant.token.as_str()).unwrap();
        assert_eq!(view.word_count, 3);
        assert_eq!(view.owner.name, "Bernd Besitzer");

        // The projection leaks neither the token nor any credential.
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains(grant.token.as_str()));
        assert!(!json.contains("password"));
        assert!(!json.contains("streng-geheim"));

        // Rotation kills the old link.
        let rotated = svc.regenerate_share_token(&actor, deck_id).unwrap();
        assert_ne!(rotated.token, grant.token);
        assert_eq!(
            svc.resolve_shared_deck(grant.token.as_str()).unwrap_err(),
            ServiceError::NotFound
        );

        // Revocation kills the new one.
        svc.disable_sharing(&actor, deck_id).unwrap();
        assert_eq!(
            svc.resolve_shared_deck(rotated.token.as_str()).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn test_garbage_tokens_never_resolve() {
        let mut svc = service();
        let actor = owner(&mut svc);
        let deck_id = populated_deck(&mut svc, &actor, 1);
        svc.enable_sharing(&actor, deck_id).unwrap();

        for candidate in ["", "   ", "../../etc/passwd", "token with spaces", "a%20b"] {
            assert_eq!(
                svc.resolve_shared_deck(candidate).unwrap_err(),
                ServiceError::NotFound,
                "{candidate:?} must not resolve"
            );
        }
    }

    // =============================================================================
    // STUDY SESSIONS
    // =============================================================================

    /// Decks at or under the threshold load directly.
    #[test]
    fn test_small_deck_study_session_loads_directly() {
        let mut svc = service();
        let actor = owner(&mut svc);
        let deck_id = populated_deck(&mut svc, &actor, 10);

        match svc.plan_retrieval(&actor, deck_id).unwrap() {
            RetrievalPlan::LoadDirectly { word_count } => assert_eq!(word_count, 10),
            other => panic!("expected direct load, got {other:?}"),
        }
        assert_eq!(svc.list_words(&actor, deck_id).unwrap().len(), 10);
    }

    /// A 250-word deck crosses the default threshold of 200: the session
    /// drains the shuffled id list in chunks and sees every word exactly
    /// once, in plan order.
    #[test]
    fn test_large_deck_study_session_drains_in_chunks() {
        let mut svc = service();
        let actor = owner(&mut svc);
        let deck_id = populated_deck(&mut svc, &actor, 250);

        let shuffled = match svc.plan_retrieval(&actor, deck_id).unwrap() {
            RetrievalPlan::Batched { shuffled_ids } => shuffled_ids,
            other => panic!("expected batched plan, got {other:?}"),
        };
        assert_eq!(shuffled.len(), 250);

        let mut session: Vec<WordId> = Vec::new();
        for chunk in shuffled.chunks(50) {
            let words = svc.fetch_batch(&actor, chunk).unwrap();
            assert_eq!(words.len(), chunk.len());
            session.extend(words.iter().map(|w| w.id));
        }

        // Plan order is preserved and every word appears exactly once.
        assert_eq!(session, shuffled);
        let unique: BTreeSet<WordId> = session.into_iter().collect();
        assert_eq!(unique.len(), 250);
    }
}
