use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::shelf::ShelfPacker;
use super::Rect;
use crate::data::HierarchicalItem;
use crate::render::colors::{normalize_signed, ColorRamp, RgbColor, SentimentBand};

/// How boxes are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxPalette {
    /// Continuous topic ramp on the normalized sentiment
    Gradient,
    /// Five discrete sentiment bands
    #[default]
    Bands,
}

impl BoxPalette {
    /// Fill for a signed sentiment in [-1, 1].
    pub fn color(self, sentiment: f32) -> RgbColor {
        match self {
            BoxPalette::Gradient => ColorRamp::TOPICS.color_for(normalize_signed(sentiment)),
            BoxPalette::Bands => SentimentBand::from_signed(sentiment).color(),
        }
    }
}

/// Configuration for the two-level topic treemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreemapConfig {
    /// Horizontal extent in percent of the container
    pub canvas_width: f32,
    /// Height of the category row (px)
    pub parent_height: f32,
    /// A child of this size gets `child_height_per_unit` pixels
    pub child_height_unit: f64,
    pub child_height_per_unit: f32,
    /// Floor for child heights (px)
    pub min_child_height: f32,
    /// Children narrower than this (percent) are drawn without a label
    pub label_min_width: f32,
    pub palette: BoxPalette,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            canvas_width: 100.0,
            parent_height: 30.0,
            child_height_unit: 500.0,
            child_height_per_unit: 60.0,
            min_child_height: 30.0,
            label_min_width: 10.0,
            palette: BoxPalette::Bands,
        }
    }
}

impl TreemapConfig {
    /// Pixel height for a child box. Independent of the parent's height.
    pub fn child_height(&self, size: f64) -> f32 {
        let scaled = (size / self.child_height_unit) as f32 * self.child_height_per_unit;
        if scaled.is_finite() {
            scaled.max(self.min_child_height)
        } else {
            self.min_child_height
        }
    }
}

/// A positioned treemap box. `x` and `width` are percentages of the
/// container width; `y` and `height` are pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedBox {
    pub name: CompactString,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_parent: bool,
    pub sentiment: f32,
    pub size: f64,
    /// Category name for child boxes
    pub parent: Option<CompactString>,
    /// Index of the owning category in the input (its own index for a category)
    pub category: usize,
    pub color: RgbColor,
}

impl PlacedBox {
    /// Mixed-unit rectangle (percent horizontally, px vertically).
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn show_label(&self, config: &TreemapConfig) -> bool {
        self.is_parent || self.width > config.label_min_width
    }
}

/// Ratio of `part` to `whole` scaled to `span`; zero when `whole` is empty.
fn share(part: f64, whole: f64, span: f32) -> f32 {
    if whole > 0.0 {
        ((part / whole) as f32) * span
    } else {
        0.0
    }
}

/// Lay out categories as one row across the full width, then wrap each
/// category's children into rows inside that category's column.
///
/// Output order: all categories left to right, then the children of each
/// category in category order.
pub fn pack_treemap(categories: &[HierarchicalItem], config: &TreemapConfig) -> Vec<PlacedBox> {
    let child_count: usize = categories.iter().map(|c| c.children.len()).sum();
    let mut boxes = Vec::with_capacity(categories.len() + child_count);

    // Only category totals count; children are already included in them.
    let total_size: f64 = categories.iter().map(|c| c.size).sum();
    if total_size <= 0.0 && !categories.is_empty() {
        tracing::warn!(
            "Treemap: {} categories with zero total size, all widths collapse",
            categories.len()
        );
    }

    let mut columns = Vec::with_capacity(categories.len());
    let mut x = 0.0f32;
    for (index, category) in categories.iter().enumerate() {
        let width = share(category.size, total_size, config.canvas_width);
        boxes.push(PlacedBox {
            name: category.name.clone(),
            x,
            y: 0.0,
            width,
            height: config.parent_height,
            is_parent: true,
            sentiment: category.sentiment,
            size: category.size,
            parent: None,
            category: index,
            color: config.palette.color(category.sentiment),
        });
        columns.push((x, width));
        x += width;
    }

    for (index, (category, &(column_x, column_width))) in
        categories.iter().zip(&columns).enumerate()
    {
        let mut shelf = ShelfPacker::new(column_x, config.parent_height, column_width);

        for child in &category.children {
            if !child.children.is_empty() {
                tracing::debug!(
                    "Treemap: ignoring {} nested items under '{}' / '{}'",
                    child.children.len(),
                    category.name,
                    child.name
                );
            }

            let width = share(child.size, category.size, column_width);
            let height = config.child_height(child.size);
            let (cx, cy) = shelf.place(width, height);

            boxes.push(PlacedBox {
                name: child.name.clone(),
                x: cx,
                y: cy,
                width,
                height,
                is_parent: false,
                sentiment: child.sentiment,
                size: child.size,
                parent: Some(category.name.clone()),
                category: index,
                color: config.palette.color(child.sentiment),
            });
        }

        if shelf.rows() > 1 {
            tracing::trace!(
                "Treemap: '{}' children wrapped into {} rows (bottom {:.0}px)",
                category.name,
                shelf.rows(),
                shelf.bottom()
            );
        }
    }

    tracing::debug!(
        "Treemap: {} categories, {} children, total size {}",
        categories.len(),
        child_count,
        total_size
    );

    boxes
}
