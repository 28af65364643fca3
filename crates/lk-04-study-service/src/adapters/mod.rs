//! # Adapters
//!
//! Production: [`Argon2Hasher`].
//! Testing: [`InMemoryStore`], [`PlainTextHasher`].

mod memory;
mod password;

pub use memory::InMemoryStore;
pub use password::{Argon2Hasher, PlainTextHasher};
