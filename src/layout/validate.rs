use std::collections::HashMap;
use std::fmt;

use compact_str::CompactString;

use super::cloud::{CloudConfig, CloudLayout};
use super::treemap::PlacedBox;

/// Width mismatch tolerated between a category and the sum of its children (percent).
const WIDTH_TOLERANCE: f32 = 1e-2;
const GEOMETRY_EPSILON: f32 = 1e-3;

/// A broken layout invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Overlap { a: CompactString, b: CompactString },
    OutOfBounds { name: CompactString },
    FontOutOfRange { name: CompactString, font_size: f32 },
    WidthMismatch { category: CompactString, expected: f32, actual: f32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Overlap { a, b } => write!(f, "'{a}' overlaps '{b}'"),
            Violation::OutOfBounds { name } => write!(f, "'{name}' leaves the canvas"),
            Violation::FontOutOfRange { name, font_size } => {
                write!(f, "'{name}' has font size {font_size:.2} outside the configured range")
            }
            Violation::WidthMismatch {
                category,
                expected,
                actual,
            } => write!(
                f,
                "children of '{category}' span {actual:.3}% instead of {expected:.3}%"
            ),
        }
    }
}

/// Check a word cloud: every text box on canvas, font sizes in range, and no
/// two padded boxes intersecting.
pub fn check_cloud(layout: &CloudLayout, config: &CloudConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    for word in &layout.placed {
        if !word.bounds().within(config.width, config.height) {
            violations.push(Violation::OutOfBounds {
                name: word.text.clone(),
            });
        }
        if word.font_size < config.min_font_size || word.font_size > config.max_font_size {
            violations.push(Violation::FontOutOfRange {
                name: word.text.clone(),
                font_size: word.font_size,
            });
        }
    }

    for (i, a) in layout.placed.iter().enumerate() {
        let ra = a.padded_bounds(config.padding);
        for b in &layout.placed[i + 1..] {
            if ra.intersects(&b.padded_bounds(config.padding)) {
                violations.push(Violation::Overlap {
                    a: a.text.clone(),
                    b: b.text.clone(),
                });
            }
        }
    }

    violations
}

/// Check a treemap: siblings under the same parent (and the category row
/// itself) never overlap, and children whose sizes add up to their
/// category's size span exactly the category's width.
pub fn check_treemap(boxes: &[PlacedBox]) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Categories form one group; children are keyed by their category's
    // index so that equally named categories stay apart.
    let mut groups: HashMap<Option<usize>, Vec<&PlacedBox>> = HashMap::new();
    for b in boxes {
        let key = (!b.is_parent).then_some(b.category);
        groups.entry(key).or_default().push(b);
    }

    for siblings in groups.values() {
        for (i, a) in siblings.iter().enumerate() {
            let ra = a.rect();
            for b in &siblings[i + 1..] {
                let rb = b.rect();
                // Shared edges that drifted by float error are not overlaps
                let overlap_w = ra.right().min(rb.right()) - ra.x.max(rb.x);
                let overlap_h = ra.bottom().min(rb.bottom()) - ra.y.max(rb.y);
                if overlap_w > GEOMETRY_EPSILON && overlap_h > GEOMETRY_EPSILON {
                    violations.push(Violation::Overlap {
                        a: a.name.clone(),
                        b: b.name.clone(),
                    });
                }
            }
        }
    }

    for category in boxes.iter().filter(|b| b.is_parent) {
        let Some(children) = groups.get(&Some(category.category)) else {
            continue;
        };
        let actual: f32 = children.iter().map(|c| c.width).sum();
        let child_size: f64 = children.iter().map(|c| c.size).sum();
        // Only meaningful when the children account for the category's size
        let accounted = category.size > 0.0
            && (child_size - category.size).abs() <= category.size * 1e-6;
        if accounted && (actual - category.width).abs() > WIDTH_TOLERANCE {
            violations.push(Violation::WidthMismatch {
                category: category.name.clone(),
                expected: category.width,
                actual,
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HierarchicalItem, WeightedWord};
    use crate::layout::cloud::pack_words;
    use crate::layout::treemap::{pack_treemap, TreemapConfig};
    use crate::render::text::EmMeasurer;

    #[test]
    fn packed_cloud_is_clean() {
        let words: Vec<WeightedWord> = (0..30)
            .map(|i| WeightedWord::new(&format!("kw{i}"), (30 - i) as f64, 0.5, 1.0))
            .collect();
        let cfg = CloudConfig::default();
        let layout = pack_words(&words, &cfg, EmMeasurer::default());
        assert_eq!(check_cloud(&layout, &cfg), vec![]);
    }

    #[test]
    fn detects_overlapping_words() {
        let cfg = CloudConfig::default();
        let mut layout = pack_words(
            &[WeightedWord::new("a", 2.0, 0.5, 1.0), WeightedWord::new("b", 1.0, 0.5, 1.0)],
            &cfg,
            EmMeasurer::default(),
        );
        let first = layout.placed[0].clone();
        layout.placed[1].x = first.x;
        layout.placed[1].y = first.y;
        let v = check_cloud(&layout, &cfg);
        assert!(v.iter().any(|v| matches!(v, Violation::Overlap { .. })));
    }

    #[test]
    fn packed_treemap_is_clean() {
        let cats = vec![
            HierarchicalItem::category(
                "Customer Service",
                1200.0,
                -0.6,
                vec![
                    HierarchicalItem::leaf("Response Time", 500.0, -0.8),
                    HierarchicalItem::leaf("Resolution Quality", 400.0, -0.5),
                    HierarchicalItem::leaf("Staff Knowledge", 300.0, -0.4),
                ],
            ),
            HierarchicalItem::category(
                "Delivery",
                500.0,
                -0.7,
                vec![
                    HierarchicalItem::leaf("Shipping Speed", 250.0, -0.8),
                    HierarchicalItem::leaf("Packaging", 150.0, -0.2),
                    HierarchicalItem::leaf("Tracking", 100.0, -0.6),
                ],
            ),
        ];
        let boxes = pack_treemap(&cats, &TreemapConfig::default());
        assert_eq!(check_treemap(&boxes), vec![]);
    }

    #[test]
    fn detects_width_mismatch() {
        let cats = vec![HierarchicalItem::category(
            "A",
            10.0,
            0.0,
            vec![HierarchicalItem::leaf("a1", 10.0, 0.0)],
        )];
        let mut boxes = pack_treemap(&cats, &TreemapConfig::default());
        boxes[1].width = 50.0;
        let v = check_treemap(&boxes);
        assert!(matches!(v[0], Violation::WidthMismatch { .. }));
        assert_eq!(v[0].to_string(), "children of 'A' span 50.000% instead of 100.000%");
    }

    #[test]
    fn equally_named_categories_are_checked_apart() {
        // "Email" outgrows its column and spills under the second "Support";
        // that is not a sibling overlap
        let cats = vec![
            HierarchicalItem::category("Support", 10.0, 0.4, vec![HierarchicalItem::leaf("Email", 30.0, 0.0)]),
            HierarchicalItem::category("Support", 10.0, -0.4, vec![HierarchicalItem::leaf("Chat", 10.0, 0.0)]),
        ];
        let boxes = pack_treemap(&cats, &TreemapConfig::default());
        assert_eq!((boxes[2].category, boxes[3].category), (0, 1));
        assert!(boxes[2].rect().intersects(&boxes[3].rect()));
        assert_eq!(check_treemap(&boxes), vec![]);
    }
}
