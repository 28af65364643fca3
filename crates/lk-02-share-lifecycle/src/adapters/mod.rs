//! # Port Adapters
//!
//! Production: `UuidTokenGenerator`, `SystemClock`.
//! Testing: `SequenceTokenGenerator`, `FixedClock`.

use crate::ports::{Clock, TokenGenerator};
use shared_types::{ShareToken, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default token generator: version-4 UUIDs.
///
/// 122 bits of randomness, URL-safe text form, no relation to any deck id.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn mint(&self) -> ShareToken {
        ShareToken::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Wall clock in unix seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Deterministic token generator for unit tests: `token-0`, `token-1`, ...
///
/// Never use outside tests; predictable tokens defeat the whole scheme.
/// Clones share the counter.
#[derive(Debug, Default, Clone)]
pub struct SequenceTokenGenerator {
    next: Arc<AtomicU64>,
}

impl TokenGenerator for SequenceTokenGenerator {
    fn mint(&self) -> ShareToken {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ShareToken::new(format!("token-{n}"))
    }
}

/// Fixed clock for unit tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
