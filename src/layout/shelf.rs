/// Tolerance for accumulated floating-point drift along a row.
const EPSILON: f32 = 1e-4;

/// Greedy row-wrapping packer over a fixed-width span.
///
/// Items go left to right; an item that would cross the right edge starts a
/// new row directly below the tallest item of the current row. Single pass,
/// no backtracking.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    left: f32,
    width: f32,
    cursor_x: f32,
    row_top: f32,
    row_height: f32,
    rows: u32,
}

impl ShelfPacker {
    pub fn new(left: f32, top: f32, width: f32) -> Self {
        Self {
            left,
            width,
            cursor_x: left,
            row_top: top,
            row_height: 0.0,
            rows: 1,
        }
    }

    /// Place an item, returning its top-left corner.
    pub fn place(&mut self, w: f32, h: f32) -> (f32, f32) {
        let row_started = self.cursor_x > self.left;
        if row_started && self.cursor_x + w > self.left + self.width + EPSILON {
            self.row_top += self.row_height;
            self.row_height = 0.0;
            self.cursor_x = self.left;
            self.rows += 1;
        }

        let pos = (self.cursor_x, self.row_top);
        self.cursor_x += w;
        self.row_height = self.row_height.max(h);
        pos
    }

    /// Rows opened so far (at least one).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Lowest edge reached by any placed item.
    pub fn bottom(&self) -> f32 {
        self.row_top + self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::ShelfPacker;

    #[test]
    fn exact_fit_stays_on_one_row() {
        let mut shelf = ShelfPacker::new(10.0, 30.0, 60.0);
        let third = 60.0 / 3.0;
        assert_eq!(shelf.place(third, 40.0), (10.0, 30.0));
        let (x2, _) = shelf.place(third, 30.0);
        assert!((x2 - 30.0).abs() < 1e-4);
        let (x3, y3) = shelf.place(third, 50.0);
        assert!((x3 - 50.0).abs() < 1e-4);
        assert_eq!(y3, 30.0);
        assert_eq!(shelf.rows(), 1);
        assert_eq!(shelf.bottom(), 80.0);
    }

    #[test]
    fn overflow_wraps_below_tallest() {
        let mut shelf = ShelfPacker::new(0.0, 0.0, 50.0);
        shelf.place(30.0, 40.0);
        shelf.place(10.0, 60.0);
        assert_eq!(shelf.place(20.0, 30.0), (0.0, 60.0));
        assert_eq!(shelf.rows(), 2);
        assert_eq!(shelf.place(25.0, 10.0), (20.0, 60.0));
    }

    #[test]
    fn oversized_item_takes_its_own_row() {
        let mut shelf = ShelfPacker::new(0.0, 0.0, 10.0);
        assert_eq!(shelf.place(25.0, 30.0), (0.0, 0.0));
        assert_eq!(shelf.place(5.0, 30.0), (0.0, 30.0));
        assert_eq!(shelf.rows(), 2);
    }
}
