use rand::Rng;

use super::Rect;

/// Parameters of the outward search path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    pub center_x: f32,
    pub center_y: f32,
    pub start_radius: f32,
    pub radius_step: f32,
    pub angle_step: f32,
    /// Total width of the uniform angle jitter, centered on zero
    pub angle_jitter: f32,
    pub max_attempts: u32,
}

/// Candidate points along an Archimedean spiral around the canvas center.
///
/// Attempt `k` sits at radius `start + (k + 1) * step` and angle
/// `k * angle_step + jitter`, so the first probe is already off-center.
pub struct Spiral<'r, R: Rng + ?Sized> {
    params: SpiralParams,
    rng: &'r mut R,
    attempt: u32,
    radius: f32,
}

impl<'r, R: Rng + ?Sized> Spiral<'r, R> {
    pub fn new(params: SpiralParams, rng: &'r mut R) -> Self {
        Self {
            params,
            rng,
            attempt: 0,
            radius: params.start_radius,
        }
    }

    /// Attempts consumed so far.
    pub fn attempts(&self) -> u32 {
        self.attempt
    }
}

impl<R: Rng + ?Sized> Iterator for Spiral<'_, R> {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<(f32, f32)> {
        if self.attempt >= self.params.max_attempts {
            return None;
        }
        let p = &self.params;
        let jitter = self.rng.random::<f32>() * p.angle_jitter - p.angle_jitter / 2.0;
        let angle = self.attempt as f32 * p.angle_step + jitter;
        self.radius += p.radius_step;
        self.attempt += 1;

        Some((
            p.center_x + angle.cos() * self.radius,
            p.center_y + angle.sin() * self.radius,
        ))
    }
}

/// Padded boxes already claimed during one packing pass.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    claimed: Vec<Rect>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collides(&self, rect: &Rect) -> bool {
        self.claimed.iter().any(|r| r.intersects(rect))
    }

    /// Record a box. Returns the grown accumulator.
    #[must_use]
    pub fn claim(mut self, rect: Rect) -> Self {
        self.claimed.push(rect);
        self
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(jitter: f32, max_attempts: u32) -> SpiralParams {
        SpiralParams {
            center_x: 400.0,
            center_y: 200.0,
            start_radius: 10.0,
            radius_step: 0.5,
            angle_step: 0.1,
            angle_jitter: jitter,
            max_attempts,
        }
    }

    #[test]
    fn radius_grows_by_step_from_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let points: Vec<_> = Spiral::new(params(0.0, 3), &mut rng).collect();
        assert_eq!(points.len(), 3);

        let dist = |(x, y): (f32, f32)| ((x - 400.0).powi(2) + (y - 200.0).powi(2)).sqrt();
        assert!((dist(points[0]) - 10.5).abs() < 1e-3);
        assert!((dist(points[1]) - 11.0).abs() < 1e-3);
        assert!((dist(points[2]) - 11.5).abs() < 1e-3);
        // No jitter: first probe lies on the +x axis
        assert!((points[0].1 - 200.0).abs() < 1e-4);
    }

    #[test]
    fn stops_after_budget() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spiral = Spiral::new(params(0.5, 7), &mut rng);
        assert_eq!(spiral.by_ref().count(), 7);
        assert_eq!(spiral.attempts(), 7);
        assert!(spiral.next().is_none());
    }

    #[test]
    fn same_seed_same_path() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let pa: Vec<_> = Spiral::new(params(0.5, 50), &mut a).collect();
        let pb: Vec<_> = Spiral::new(params(0.5, 50), &mut b).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn occupancy_accumulates() {
        let occ = Occupancy::new().claim(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(occ.len(), 1);
        assert!(occ.collides(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!occ.collides(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    }
}
