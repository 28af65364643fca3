//! # Lernkartei Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate choreography
//!     ├── flows.rs      # Policy, CRUD and user flows through the service
//!     └── sharing_e2e.rs# Share lifecycle and study sessions end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lk-tests
//!
//! # By category
//! cargo test -p lk-tests integration::
//!
//! # Benchmarks
//! cargo bench -p lk-tests
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

/// Install a tracing subscriber honoring `RUST_LOG`, once per test binary.
///
/// Call at the top of a test to see the `[lk-NN]` logs while debugging.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
