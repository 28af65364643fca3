//! # Retrieval Strategy (lk-03)
//!
//! Decides, per deck, whether a client should load the whole word list in one
//! call or iterate a shuffled id sequence in fixed-size batches.
//!
//! Small decks (the common case) stay a single round trip. Large decks get a
//! randomly shuffled sequence of all word ids, shuffled once per request:
//! the client keeps a stable study order for the session, while nothing is
//! persisted that would bias repeated sessions toward one order.
//!
//! The shuffle uses `rand::thread_rng`: unpredictability is wanted,
//! cryptographic strength is not, and the source is never reused or cached
//! across calls.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared_types::{Word, WordId};
use std::collections::HashMap;

/// Default word-count threshold above which batch loading kicks in.
///
/// Overridable through [`RetrievalConfig`]; decks at or below the threshold
/// load normally.
pub const DEFAULT_BATCH_THRESHOLD: usize = 200;

/// Configuration for the retrieval strategy.
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Word count above which clients must batch-load.
    pub batch_threshold: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            batch_threshold: DEFAULT_BATCH_THRESHOLD,
        }
    }
}

impl RetrievalConfig {
    /// Override the batch threshold.
    pub fn with_batch_threshold(mut self, threshold: usize) -> Self {
        self.batch_threshold = threshold;
        self
    }
}

/// How a client should fetch a deck's words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrievalPlan {
    /// Fetch the full ordered word list in one call.
    LoadDirectly { word_count: usize },
    /// Fetch words in fixed-size batches by id, preserving this order.
    /// Contains every word id of the deck exactly once.
    Batched { shuffled_ids: Vec<WordId> },
}

impl RetrievalPlan {
    /// Number of words the plan covers.
    pub fn word_count(&self) -> usize {
        match self {
            RetrievalPlan::LoadDirectly { word_count } => *word_count,
            RetrievalPlan::Batched { shuffled_ids } => shuffled_ids.len(),
        }
    }
}

/// The retrieval strategy.
#[derive(Debug, Clone, Default)]
pub struct RetrievalStrategy {
    config: RetrievalConfig,
}

impl RetrievalStrategy {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    /// Plan retrieval for a deck given all of its word ids.
    pub fn plan(&self, word_ids: Vec<WordId>) -> RetrievalPlan {
        self.plan_with_rng(word_ids, &mut rand::thread_rng())
    }

    /// As [`plan`](Self::plan), with an injected randomness source.
    pub fn plan_with_rng<R: Rng>(&self, mut word_ids: Vec<WordId>, rng: &mut R) -> RetrievalPlan {
        if word_ids.len() <= self.config.batch_threshold {
            RetrievalPlan::LoadDirectly {
                word_count: word_ids.len(),
            }
        } else {
            word_ids.shuffle(rng);
            RetrievalPlan::Batched {
                shuffled_ids: word_ids,
            }
        }
    }
}

/// Reassemble a fetched batch in the caller-supplied id order.
///
/// Ids that did not resolve (or were filtered out as inaccessible) are
/// dropped silently; a partial batch is never an error.
pub fn reorder(requested_ids: &[WordId], fetched: Vec<Word>) -> Vec<Word> {
    let mut by_id: HashMap<WordId, Word> =
        fetched.into_iter().map(|word| (word.id, word)).collect();
    requested_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect()
}
