use compact_str::CompactString;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::spiral::{Occupancy, Spiral, SpiralParams};
use super::Rect;
use crate::data::WeightedWord;
use crate::render::colors::{ColorRamp, RgbColor};
use crate::render::text::{TextExtent, TextMeasurer};

/// Seed used when the caller does not care about a particular arrangement.
pub const DEFAULT_SEED: u64 = 0x5EED_C10D;

/// Configuration for word-cloud placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Canvas size in pixels
    pub width: f32,
    pub height: f32,
    /// Font size given to the least / most frequent word
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Spiral radius before the first probe (px)
    pub start_radius: f32,
    /// Radius increase per probe (px)
    pub radius_step: f32,
    /// Angle increase per probe (rad)
    pub angle_step: f32,
    /// Width of the random angle offset per probe (rad), centered on zero
    pub angle_jitter: f32,
    /// Clearance kept around every word (px per side)
    pub padding: f32,
    /// Probes per word before it is dropped
    pub max_attempts: u32,
    pub seed: u64,
    pub ramp: ColorRamp,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            min_font_size: 14.0,
            max_font_size: 48.0,
            start_radius: 10.0,
            radius_step: 0.5,
            angle_step: 0.1,
            angle_jitter: 0.5,
            padding: 2.0,
            max_attempts: 2000,
            seed: DEFAULT_SEED,
            ramp: ColorRamp::KEYWORDS,
        }
    }
}

impl CloudConfig {
    /// Font size for a word of `frequency` when the most frequent word has
    /// `max_frequency`. Clamped to the configured range; an inverted range
    /// pins every word to `min_font_size`.
    pub fn font_size(&self, frequency: f64, max_frequency: f64) -> f32 {
        let ratio = (frequency / max_frequency) as f32;
        let ratio = if ratio.is_finite() { ratio } else { 0.0 };
        let size = self.min_font_size + ratio * (self.max_font_size - self.min_font_size);
        // Not `clamp`: it panics when min > max or either bound is NaN
        size.min(self.max_font_size).max(self.min_font_size)
    }
}

/// A word with its final position. `(x, y)` is the left end of the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub text: CompactString,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    /// CSS color string, `rgb(r, g, b)`
    pub color: String,
    pub fill: RgbColor,
    /// Measured text extent at `font_size`
    pub width: f32,
    pub height: f32,
    pub sentiment: f32,
}

impl PlacedWord {
    /// Text box: from the baseline up by the measured height.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y - self.height, self.width, self.height)
    }

    pub fn padded_bounds(&self, padding: f32) -> Rect {
        self.bounds().inflate(padding)
    }
}

/// Outcome of one packing pass.
#[derive(Debug, Clone, Default)]
pub struct CloudLayout {
    /// Placed words, largest first
    pub placed: Vec<PlacedWord>,
    /// Words that found no free spot within the attempt budget
    pub dropped: Vec<WeightedWord>,
}

impl CloudLayout {
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Pack words with jitter drawn from `config.seed`.
pub fn pack_words<M: TextMeasurer>(
    words: &[WeightedWord],
    config: &CloudConfig,
    measurer: M,
) -> CloudLayout {
    let mut rng = StdRng::seed_from_u64(config.seed);
    pack_words_with_rng(words, config, measurer, &mut rng)
}

/// Pack words, largest first, each on the first free spot along an outward
/// spiral from the canvas center. Words that do not fit are returned in
/// `dropped`; nothing is retried at a smaller size.
pub fn pack_words_with_rng<M: TextMeasurer, R: Rng + ?Sized>(
    words: &[WeightedWord],
    config: &CloudConfig,
    mut measurer: M,
    rng: &mut R,
) -> CloudLayout {
    let mut result = CloudLayout::default();
    if words.is_empty() {
        return result;
    }

    if config.width <= 0.0 || config.height <= 0.0 {
        tracing::warn!(
            "Word cloud canvas {}x{} has no area, dropping {} words",
            config.width,
            config.height,
            words.len()
        );
        result.dropped = words.to_vec();
        return result;
    }

    // Stable: equal frequencies keep input order
    let mut order: Vec<&WeightedWord> = words.iter().collect();
    order.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    let max_frequency = order[0].frequency;

    let mut occupied = Occupancy::new();

    for word in order {
        let font_size = config.font_size(word.frequency, max_frequency);
        let extent = measurer.measure(&word.text, font_size);

        match find_spot(&occupied, extent, config, rng) {
            Some((x, y)) => {
                let fill = config.ramp.color_for(word.sentiment);
                let placed = PlacedWord {
                    text: word.text.clone(),
                    x,
                    y,
                    font_size,
                    color: fill.to_string(),
                    fill,
                    width: extent.width,
                    height: extent.height,
                    sentiment: word.sentiment,
                };
                occupied = occupied.claim(placed.padded_bounds(config.padding));
                result.placed.push(placed);
            }
            None => {
                tracing::debug!(
                    "Dropped '{}' at {:.1}px ({:.0}x{:.0}) after {} attempts",
                    word.text,
                    font_size,
                    extent.width,
                    extent.height,
                    config.max_attempts
                );
                result.dropped.push(word.clone());
            }
        }
    }

    tracing::debug!(
        "Word cloud {}x{}: placed {} of {} words ({} dropped)",
        config.width,
        config.height,
        result.placed.len(),
        words.len(),
        result.dropped.len()
    );

    result
}

/// Walk the spiral until a baseline origin is found whose text box is on
/// canvas and whose padded box is clear of `occupied`.
fn find_spot<R: Rng + ?Sized>(
    occupied: &Occupancy,
    extent: TextExtent,
    config: &CloudConfig,
    rng: &mut R,
) -> Option<(f32, f32)> {
    let params = SpiralParams {
        center_x: config.width / 2.0,
        center_y: config.height / 2.0,
        start_radius: config.start_radius,
        radius_step: config.radius_step,
        angle_step: config.angle_step,
        angle_jitter: config.angle_jitter,
        max_attempts: config.max_attempts,
    };

    // The spiral point is the visual center of the word; the baseline sits a
    // quarter of the height below it.
    Spiral::new(params, rng)
        .map(|(px, py)| (px - extent.width / 2.0, py + extent.height / 4.0))
        .find(|&(x, y)| {
            let text_box = Rect::new(x, y - extent.height, extent.width, extent.height);
            text_box.within(config.width, config.height)
                && !occupied.collides(&text_box.inflate(config.padding))
        })
}
