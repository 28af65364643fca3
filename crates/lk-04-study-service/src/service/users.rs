//! User operations: registration, login verification and password reset.

use lk_02_share_lifecycle::{Clock, TokenGenerator};
use shared_types::{Actor, ResetToken, StoreError, User, UserId, UserRole};

use crate::domain::errors::ServiceError;
use crate::domain::requests::NewUser;
use crate::ports::outbound::{EntityStore, PasswordHasher};
use crate::service::StudyService;

/// Minimum clear-password length accepted on register and reset.
const MIN_PASSWORD_LEN: usize = 8;

/// Reset tokens expire one hour after they are requested.
const RESET_TOKEN_TTL_SECS: u64 = 3_600;

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl<ST, TG, CK, PH> StudyService<ST, TG, CK, PH>
where
    ST: EntityStore,
    TG: TokenGenerator + Clone,
    CK: Clock + Clone,
    PH: PasswordHasher,
{
    /// Register a new user.
    ///
    /// Emails are stored trimmed and lowercase. A taken email is a caller
    /// error, reported as a conflict, whether caught by the pre-check or by
    /// the store's uniqueness constraint.
    pub fn register(&mut self, req: NewUser) -> Result<User, ServiceError> {
        let email = normalize_email(&req.email);
        if email.is_empty() || !email.contains('@') {
            return Err(ServiceError::BadRequest("invalid email address".into()));
        }
        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::BadRequest(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let full_name = req.full_name.trim();
        if full_name.is_empty() {
            return Err(ServiceError::BadRequest("name is empty".into()));
        }
        if self.store.find_user_by_email(&email)?.is_some() {
            return Err(ServiceError::Conflict("email is already registered".into()));
        }

        let now = self.clock.now();
        let user = User {
            id: UserId::new(),
            email,
            password_hash: self.hasher.hash(&req.password)?,
            full_name: full_name.to_string(),
            role: req.role.unwrap_or(UserRole::Learner),
            is_active: true,
            password_reset: None,
            created_at: now,
            updated_at: now,
        };
        match self.store.save_user(user.clone()) {
            Ok(()) => {}
            // Lost a race against a concurrent registration.
            Err(StoreError::UniqueViolation { .. }) => {
                return Err(ServiceError::Conflict("email is already registered".into()));
            }
            Err(err) => return Err(err.into()),
        }
        tracing::info!("[lk-04] user {} registered", user.id);
        Ok(user)
    }

    /// Look up a user by login email, normalized like on registration.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.store.find_user_by_email(&normalize_email(email))?)
    }

    /// Whether `password` is the login password of `email`.
    ///
    /// Unknown emails and deactivated accounts verify as false, never as an
    /// error, so login failures are uniform.
    pub fn verify_password(&self, email: &str, password: &str) -> Result<bool, ServiceError> {
        let email = normalize_email(email);
        match self.store.find_user_by_email(&email)? {
            Some(user) if user.is_active => Ok(self.hasher.verify(password, &user.password_hash)),
            _ => Ok(false),
        }
    }

    /// Start a password reset for `email`.
    ///
    /// Returns the token to be delivered out of band, or `None` when no
    /// account holds this email. The caller must not reveal which of the
    /// two happened.
    pub fn request_password_reset(
        &mut self,
        email: &str,
    ) -> Result<Option<ResetToken>, ServiceError> {
        let email = normalize_email(email);
        let Some(mut user) = self.store.find_user_by_email(&email)? else {
            tracing::debug!("[lk-04] password reset requested for unknown email");
            return Ok(None);
        };

        let now = self.clock.now();
        let reset = ResetToken {
            token: self.token_gen.mint().to_string(),
            expires_at: now + RESET_TOKEN_TTL_SECS,
        };
        user.password_reset = Some(reset.clone());
        user.updated_at = now;
        self.store.save_user(user)?;
        Ok(Some(reset))
    }

    /// Complete a password reset.
    ///
    /// Unknown and expired tokens fail identically. A used token is cleared
    /// and cannot be replayed.
    pub fn reset_password(&mut self, token: &str, new_password: &str) -> Result<(), ServiceError> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::BadRequest(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let invalid = || ServiceError::BadRequest("invalid or expired reset token".into());
        let mut user = self
            .store
            .find_user_by_reset_token(token)?
            .ok_or_else(invalid)?;
        let now = self.clock.now();
        let expired = user
            .password_reset
            .as_ref()
            .is_none_or(|reset| reset.expires_at < now);
        if expired {
            user.password_reset = None;
            self.store.save_user(user)?;
            return Err(invalid());
        }

        user.password_hash = self.hasher.hash(new_password)?;
        user.password_reset = None;
        user.updated_at = now;
        let id = user.id;
        self.store.save_user(user)?;
        tracing::info!("[lk-04] password reset completed for user {}", id);
        Ok(())
    }

    /// The actor's own profile.
    pub fn current_user(&self, actor: &Actor) -> Result<User, ServiceError> {
        self.store.get_user(actor.id)?.ok_or(ServiceError::NotFound)
    }
}
