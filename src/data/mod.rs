pub mod keywords;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A keyword with its mention statistics, as delivered by the sentiment API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    #[serde(alias = "keyword")]
    pub text: CompactString,
    /// Mention count (> 0)
    #[serde(alias = "value", alias = "count")]
    pub frequency: f64,
    /// Polarity in [0, 1]
    pub sentiment: f32,
    /// Extraction confidence in [0, 1]
    #[serde(default)]
    pub relevance: f32,
}

impl WeightedWord {
    pub fn new(text: &str, frequency: f64, sentiment: f32, relevance: f32) -> Self {
        Self {
            text: CompactString::new(text),
            frequency,
            sentiment,
            relevance,
        }
    }
}

/// A topic category or one of its sub-topics.
/// Only two levels are laid out; anything below `children` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchicalItem {
    pub name: CompactString,
    /// Mention count (> 0)
    pub size: f64,
    /// Polarity in [-1, 1]
    pub sentiment: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchicalItem>,
}

impl HierarchicalItem {
    pub fn leaf(name: &str, size: f64, sentiment: f32) -> Self {
        Self {
            name: CompactString::new(name),
            size,
            sentiment,
            children: Vec::new(),
        }
    }

    pub fn category(name: &str, size: f64, sentiment: f32, children: Vec<HierarchicalItem>) -> Self {
        Self {
            children,
            ..Self::leaf(name, size, sentiment)
        }
    }
}

/// Input document accepted by the diagnostic tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutInput {
    #[serde(default)]
    pub words: Vec<WeightedWord>,
    #[serde(default)]
    pub categories: Vec<HierarchicalItem>,
}

impl LayoutInput {
    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &std::path::Path) -> crate::Result<Self> {
        let bytes = crate::error::read_file(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
