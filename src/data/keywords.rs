use serde::{Deserialize, Serialize};

use super::WeightedWord;

/// Ordering applied before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Frequency,
    Sentiment,
    Relevance,
}

impl SortKey {
    fn key(self, word: &WeightedWord) -> f64 {
        match self {
            SortKey::Frequency => word.frequency,
            SortKey::Sentiment => word.sentiment as f64,
            SortKey::Relevance => word.relevance as f64,
        }
    }
}

/// Caller-side selection of the keywords handed to the word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordFilter {
    /// Words below this relevance are discarded
    pub min_relevance: f32,
    pub sort_by: SortKey,
    /// Keep at most this many words after sorting
    pub limit: usize,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self {
            min_relevance: 0.4,
            sort_by: SortKey::Frequency,
            limit: 50,
        }
    }
}

impl KeywordFilter {
    /// Filter by relevance, stable-sort descending by `sort_by`, truncate to `limit`.
    pub fn apply(&self, words: &[WeightedWord]) -> Vec<WeightedWord> {
        let mut selected: Vec<WeightedWord> = words
            .iter()
            .filter(|w| w.relevance >= self.min_relevance)
            .cloned()
            .collect();
        selected.sort_by(|a, b| self.sort_by.key(b).total_cmp(&self.sort_by.key(a)));
        selected.truncate(self.limit);

        tracing::trace!(
            "Keyword filter kept {} of {} words (min_relevance={}, sort={:?})",
            selected.len(),
            words.len(),
            self.min_relevance,
            self.sort_by
        );
        selected
    }
}
