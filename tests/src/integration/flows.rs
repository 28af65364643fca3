//! # Integration Test Flows
//!
//! Tests that lk-01-access-policy, lk-02-share-lifecycle and
//! lk-04-study-service work together correctly through the service facade:
//!
//! 1. **Registration → Login**: Argon2 hashes survive the store roundtrip
//! 2. **Visibility**: the policy gates every read and write path uniformly
//! 3. **Deck lifecycle**: create, populate, contribute, cascade-delete
//! 4. **Password reset**: token issue, rotation of the credential, replay

#[cfg(test)]
mod tests {
    use lk_02_share_lifecycle::adapters::{SystemClock, UuidTokenGenerator};
    use lk_04_study_service::adapters::PlainTextHasher;
    use lk_04_study_service::{
        Argon2Hasher, DeckUpdate, InMemoryStore, NewDeck, NewSentence, NewUser, NewWord,
        ServiceConfig, ServiceError, StudyService, UserStore,
    };
    use shared_types::{Actor, SentenceSource, UserRole};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Service<PH> = StudyService<InMemoryStore, UuidTokenGenerator, SystemClock, PH>;

    fn service() -> Service<PlainTextHasher> {
        StudyService::new(
            InMemoryStore::default(),
            UuidTokenGenerator,
            SystemClock,
            PlainTextHasher,
            ServiceConfig::default(),
        )
    }

    fn new_user(email: &str, name: &str, role: Option<UserRole>) -> NewUser {
        NewUser {
            email: email.into(),
            password: "streng-geheim".into(),
            full_name: name.into(),
            role,
        }
    }

    fn register<PH: lk_04_study_service::PasswordHasher>(
        svc: &mut Service<PH>,
        email: &str,
        role: Option<UserRole>,
    ) -> Actor {
        let user = svc.register(new_user(email, "Test User", role)).unwrap();
        Actor::new(user.id, user.role)
    }

    // =============================================================================
    // REGISTRATION AND LOGIN
    // =============================================================================

    /// Argon2-hashed credentials roundtrip through register and verify.
    #[test]
    fn test_register_then_login_with_argon2() {
        let mut svc: Service<Argon2Hasher> = StudyService::new(
            InMemoryStore::default(),
            UuidTokenGenerator,
            SystemClock,
            Argon2Hasher,
            ServiceConfig::default(),
        );
        let user = svc
            .register(new_user("anna@example.com", "Anna Schmidt", None))
            .unwrap();

        // The stored credential is a PHC string, never the clear password.
        let stored = svc.store().get_user(user.id).unwrap().unwrap();
        assert!(stored.password_hash.starts_with("$argon2id$"));
        assert!(!stored.password_hash.contains("streng-geheim"));

        assert!(svc.verify_password("anna@example.com", "streng-geheim").unwrap());
        assert!(!svc.verify_password("anna@example.com", "falsches-passwort").unwrap());
    }

    // =============================================================================
    // VISIBILITY ACROSS THE WHOLE SURFACE
    // =============================================================================

    /// A private deck is invisible to strangers on every read path, while a
    /// public deck is readable but not writable.
    #[test]
    fn test_visibility_is_uniform_across_operations() {
        crate::init_tracing();
        let mut svc = service();
        let owner = register(&mut svc, "owner@example.com", None);
        let admin = register(&mut svc, "admin@example.com", Some(UserRole::Admin));
        let stranger = register(&mut svc, "stranger@example.com", None);

        let private = svc.create_deck(&owner, NewDeck::named("Privat")).unwrap();
        let word = svc
            .add_word(&owner, private.id, NewWord::new("Hund", "dog"))
            .unwrap();
        let public = svc
            .create_deck(
                &admin,
                NewDeck {
                    name: "Öffentlich".into(),
                    is_public: Some(true),
                },
            )
            .unwrap();

        // Stranger: private deck does not exist, on any path.
        for err in [
            svc.get_deck(&stranger, private.id).map(drop).unwrap_err(),
            svc.list_words(&stranger, private.id).map(drop).unwrap_err(),
            svc.get_word(&stranger, word.id).map(drop).unwrap_err(),
            svc.plan_retrieval(&stranger, private.id).map(drop).unwrap_err(),
            svc.word_count(&stranger, private.id).map(drop).unwrap_err(),
            svc.update_deck(&stranger, private.id, DeckUpdate::default())
                .map(drop)
                .unwrap_err(),
            svc.delete_deck(&stranger, private.id).unwrap_err(),
        ] {
            assert_eq!(err, ServiceError::NotFound);
        }

        // Stranger: public deck is readable, not writable.
        assert!(svc.get_deck(&stranger, public.id).is_ok());
        assert_eq!(
            svc.update_deck(&stranger, public.id, DeckUpdate::default())
                .unwrap_err(),
            ServiceError::Forbidden
        );

        // Admin sees and edits everything.
        assert!(svc.get_deck(&admin, private.id).is_ok());
        assert!(svc
            .update_deck(
                &admin,
                private.id,
                DeckUpdate {
                    is_public: Some(true),
                    ..DeckUpdate::default()
                }
            )
            .unwrap()
            .is_public);

        // Once public, the stranger can read it too.
        assert!(svc.get_word(&stranger, word.id).is_ok());
    }

    // =============================================================================
    // DECK LIFECYCLE
    // =============================================================================

    /// Create, populate, let a reader contribute a sentence, then cascade.
    #[test]
    fn test_full_deck_lifecycle_with_contributions() {
        let mut svc = service();
        let admin = register(&mut svc, "admin@example.com", Some(UserRole::Admin));
        let reader = register(&mut svc, "reader@example.com", None);

        let deck = svc
            .create_deck(
                &admin,
                NewDeck {
                    name: "Verben".into(),
                    is_public: Some(true),
                },
            )
            .unwrap();
        let word = svc
            .add_word(&admin, deck.id, NewWord::new("laufen", "to run"))
            .unwrap();

        let sentence = svc
            .add_sentence(
                &reader,
                NewSentence {
                    word_id: word.id,
                    text: "Ich laufe jeden Morgen.".into(),
                    translation: "I run every morning.".into(),
                    grammar_note: Some("1st person singular".into()),
                    difficulty: None,
                    source: SentenceSource::UserCreated,
                },
            )
            .unwrap();
        assert_eq!(svc.list_sentences(&reader, word.id).unwrap().len(), 1);

        svc.delete_deck(&admin, deck.id).unwrap();
        assert_eq!(svc.get_word(&reader, word.id).unwrap_err(), ServiceError::NotFound);
        assert_eq!(svc.get_sentence(sentence.id).unwrap_err(), ServiceError::NotFound);
    }

    // =============================================================================
    // PASSWORD RESET
    // =============================================================================

    #[test]
    fn test_password_reset_rotates_the_credential() {
        let mut svc = service();
        register(&mut svc, "anna@example.com", None);

        let reset = svc.request_password_reset("anna@example.com").unwrap().unwrap();
        svc.reset_password(&reset.token, "ganz-neues-passwort").unwrap();

        assert!(svc.verify_password("anna@example.com", "ganz-neues-passwort").unwrap());
        assert!(!svc.verify_password("anna@example.com", "streng-geheim").unwrap());
        assert!(matches!(
            svc.reset_password(&reset.token, "und-noch-eins").unwrap_err(),
            ServiceError::BadRequest(_)
        ));
    }
}
