//! # Response Shapes

use serde::{Deserialize, Serialize};
use shared_types::Deck;

/// A deck with its word count attached, as returned by list and get.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSummary {
    #[serde(flatten)]
    pub deck: Deck,
    pub word_count: usize,
}
