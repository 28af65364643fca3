//! # Password Hashing Adapters
//!
//! [`Argon2Hasher`] hashes with a random [`OsRng`] salt and the default
//! memory-hard Argon2id parameters, producing a PHC-format string
//! (`$argon2id$v=19$m=19456,t=2,p=1$...`) for the user record.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};

use crate::ports::outbound::{PasswordError, PasswordHasher};

/// Production hasher: Argon2id with default parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Test hasher: recognizable, instant, and obviously not for production.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_roundtrip() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("geheim123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("geheim123", &hash));
        assert!(!hasher.verify("falsch", &hash));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        assert!(!Argon2Hasher.verify("geheim123", "not-a-phc-string"));
    }
}
