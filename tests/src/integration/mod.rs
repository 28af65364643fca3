//! Cross-crate integration tests.

mod flows;
mod sharing_e2e;
