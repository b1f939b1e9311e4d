pub mod cloud;
pub mod shelf;
pub mod spiral;
pub mod treemap;
pub mod validate;

pub use cloud::{pack_words, pack_words_with_rng, CloudConfig, CloudLayout, PlacedWord};
pub use treemap::{pack_treemap, BoxPalette, PlacedBox, TreemapConfig};

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Grow by `pad` on every side.
    pub fn inflate(&self, pad: f32) -> Rect {
        Rect {
            x: self.x - pad,
            y: self.y - pad,
            w: self.w + 2.0 * pad,
            h: self.h + 2.0 * pad,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Whether this rect lies entirely inside `[0, width] x [0, height]`.
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9.5, 9.5, 1.0, 1.0)));
    }

    #[test]
    fn inflate_grows_symmetrically() {
        let r = Rect::new(5.0, 5.0, 10.0, 4.0).inflate(2.0);
        assert_eq!(r, Rect::new(3.0, 3.0, 14.0, 8.0));
    }

    #[test]
    fn within_checks_all_edges() {
        assert!(Rect::new(0.0, 0.0, 800.0, 400.0).within(800.0, 400.0));
        assert!(!Rect::new(-0.1, 0.0, 10.0, 10.0).within(800.0, 400.0));
        assert!(!Rect::new(795.0, 0.0, 10.0, 10.0).within(800.0, 400.0));
        assert!(!Rect::new(0.0, 395.0, 10.0, 10.0).within(800.0, 400.0));
    }
}
