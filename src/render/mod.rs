//! What the rendering surface must supply (text metrics) and what it receives
//! (fill colors). Drawing itself happens outside this crate.

pub mod colors;
pub mod text;

pub use colors::{color_for, normalize_signed, ColorRamp, RgbColor, SentimentBand};
pub use text::{EmMeasurer, FontdueMeasurer, TextExtent, TextMeasurer};
