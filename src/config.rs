use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::keywords::KeywordFilter;
use crate::error::read_file;
use crate::layout::{CloudConfig, TreemapConfig};

/// All layout tunables. Every section and field is optional in the TOML file.
///
/// ```toml
/// [cloud]
/// width = 640
/// max_font_size = 40
///
/// [treemap]
/// palette = "gradient"
///
/// [keywords]
/// sort_by = "relevance"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub cloud: CloudConfig,
    pub treemap: TreemapConfig,
    pub keywords: KeywordFilter,
}

impl LayoutSettings {
    pub fn from_toml_str(s: &str) -> crate::Result<Self> {
        let settings: LayoutSettings = toml::from_str(s)?;
        let (min, max) = (settings.cloud.min_font_size, settings.cloud.max_font_size);
        if min > max {
            tracing::warn!("Font range {min}..{max} is inverted; every word will get the minimum size");
        } else if min.is_nan() || max.is_nan() {
            tracing::warn!("Font range {min}..{max} is not numeric; the other bound is used for every word");
        }
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let bytes = read_file(path)?;
        let text = String::from_utf8_lossy(&bytes);
        tracing::debug!("Loading layout settings from {}", path.display());
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::keywords::SortKey;
    use crate::layout::BoxPalette;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(LayoutSettings::from_toml_str("").unwrap(), LayoutSettings::default());
    }

    #[test]
    fn partial_sections_override_only_named_fields() {
        let s = LayoutSettings::from_toml_str(
            r#"
            [cloud]
            width = 640
            max_font_size = 40
            seed = 7

            [treemap]
            palette = "gradient"

            [keywords]
            sort_by = "relevance"
            limit = 10
            "#,
        )
        .unwrap();

        assert_eq!(s.cloud.width, 640.0);
        assert_eq!(s.cloud.max_font_size, 40.0);
        assert_eq!(s.cloud.min_font_size, 14.0);
        assert_eq!(s.cloud.seed, 7);
        assert_eq!(s.treemap.palette, BoxPalette::Gradient);
        assert_eq!(s.treemap.parent_height, 30.0);
        assert_eq!(s.keywords.sort_by, SortKey::Relevance);
        assert_eq!(s.keywords.limit, 10);
        assert_eq!(s.keywords.min_relevance, 0.4);
    }

    #[test]
    fn inverted_font_range_loads_and_packs() {
        use crate::data::WeightedWord;
        use crate::layout::pack_words;
        use crate::render::EmMeasurer;

        let s = LayoutSettings::from_toml_str("[cloud]\nmin_font_size = 48\nmax_font_size = 14\n")
            .unwrap();
        let out = pack_words(
            &[WeightedWord::new("alpha", 100.0, 0.9, 1.0), WeightedWord::new("beta", 10.0, 0.2, 1.0)],
            &s.cloud,
            EmMeasurer::default(),
        );
        assert_eq!(out.placed.len(), 2);
        assert!(out.placed.iter().all(|w| w.font_size == 48.0));
    }

    #[test]
    fn unknown_palette_is_a_config_error() {
        let err = LayoutSettings::from_toml_str("[treemap]\npalette = \"neon\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
