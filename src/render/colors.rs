use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color as handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` literal.
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS functional notation, e.g. `rgb(229, 100, 25)`.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Red→blue sentiment gradient with a green offset for legibility.
///
/// Red falls and blue rises linearly with sentiment; green is
/// `green_base + green_lift * s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRamp {
    pub green_base: u8,
    pub green_lift: u8,
}

impl ColorRamp {
    /// Keyword cloud ramp: constant green.
    pub const KEYWORDS: Self = Self {
        green_base: 100,
        green_lift: 0,
    };

    /// Topic chart ramp: green brightens slightly toward positive.
    pub const TOPICS: Self = Self {
        green_base: 100,
        green_lift: 50,
    };

    /// Map a sentiment in [0, 1] to a color. Callers normalize first; values
    /// outside the domain saturate at the channel limits.
    pub fn color_for(&self, sentiment: f32) -> RgbColor {
        let r = (255.0 * (1.0 - sentiment)).floor();
        let b = (255.0 * sentiment).floor();
        let g = self.green_base as f32 + (self.green_lift as f32 * sentiment).floor();
        RgbColor {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::KEYWORDS
    }
}

/// Keyword ramp applied to a sentiment in [0, 1].
pub fn color_for(sentiment: f32) -> RgbColor {
    ColorRamp::KEYWORDS.color_for(sentiment)
}

/// Map a signed sentiment in [-1, 1] onto [0, 1].
pub fn normalize_signed(sentiment: f32) -> f32 {
    (sentiment + 1.0) / 2.0
}

/// Five-level discrete palette for signed sentiment (topic cluster map).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentBand {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentBand {
    /// Classify a signed sentiment in [-1, 1]. Thresholds are inclusive upper bounds.
    pub fn from_signed(sentiment: f32) -> Self {
        if sentiment <= -0.6 {
            SentimentBand::VeryNegative
        } else if sentiment <= -0.2 {
            SentimentBand::Negative
        } else if sentiment <= 0.2 {
            SentimentBand::Neutral
        } else if sentiment <= 0.6 {
            SentimentBand::Positive
        } else {
            SentimentBand::VeryPositive
        }
    }

    pub fn color(self) -> RgbColor {
        match self {
            SentimentBand::VeryNegative => RgbColor::from_hex(0xef4444),
            SentimentBand::Negative => RgbColor::from_hex(0xf97316),
            SentimentBand::Neutral => RgbColor::from_hex(0xa3a3a3),
            SentimentBand::Positive => RgbColor::from_hex(0x22c55e),
            SentimentBand::VeryPositive => RgbColor::from_hex(0x10b981),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBand::VeryNegative => "Very negative",
            SentimentBand::Negative => "Negative",
            SentimentBand::Neutral => "Neutral",
            SentimentBand::Positive => "Positive",
            SentimentBand::VeryPositive => "Very positive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_pure_red_and_pure_blue() {
        assert_eq!(color_for(0.0), RgbColor::new(255, 100, 0));
        assert_eq!(color_for(1.0), RgbColor::new(0, 100, 255));
    }

    #[test]
    fn red_falls_and_blue_rises_with_sentiment() {
        let mut prev = color_for(0.0);
        for i in 1..=20 {
            let c = color_for(i as f32 / 20.0);
            assert!(c.r <= prev.r);
            assert!(c.b >= prev.b);
            assert_eq!(c.g, 100);
            prev = c;
        }
    }

    #[test]
    fn topic_ramp_lifts_green() {
        assert_eq!(ColorRamp::TOPICS.color_for(0.0).g, 100);
        assert_eq!(ColorRamp::TOPICS.color_for(1.0).g, 150);
        assert_eq!(ColorRamp::TOPICS.color_for(0.5), RgbColor::new(127, 125, 127));
    }

    #[test]
    fn css_and_hex_formatting() {
        let c = RgbColor::new(229, 100, 25);
        assert_eq!(c.to_string(), "rgb(229, 100, 25)");
        assert_eq!(c.to_hex(), "#e56419");
    }

    #[test]
    fn signed_normalization() {
        assert_eq!(normalize_signed(-1.0), 0.0);
        assert_eq!(normalize_signed(0.0), 0.5);
        assert_eq!(normalize_signed(1.0), 1.0);
    }

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(SentimentBand::from_signed(-0.6), SentimentBand::VeryNegative);
        assert_eq!(SentimentBand::from_signed(-0.59), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_signed(0.2), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_signed(0.6), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_signed(0.61), SentimentBand::VeryPositive);
        assert_eq!(SentimentBand::VeryNegative.color().to_hex(), "#ef4444");
    }

    #[test]
    fn band_labels() {
        assert_eq!(SentimentBand::from_signed(-0.9).label(), "Very negative");
        assert_eq!(SentimentBand::from_signed(0.0).label(), "Neutral");
        assert_eq!(SentimentBand::from_signed(0.4).label(), "Positive");
    }
}
