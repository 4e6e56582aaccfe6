//! Seedable random point generators

use heartbeat_core::Point2D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Owns the random source for every sampling step, so a fixed seed
/// reproduces the whole animation.
pub struct Sampler {
    rng: StdRng,
    center: (f64, f64),
}

impl Sampler {
    pub fn seeded(seed: u64, center: (f64, f64)) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            center,
        }
    }

    pub fn from_entropy(center: (f64, f64)) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            center,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Uniform angle in [0, 2pi)
    pub fn uniform_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Moves `point` toward the canvas center by an exponentially distributed
    /// fraction of its offset, independently per axis.
    ///
    /// The fraction is `-spread * ln(u)` with `u` in (0, 1], so it is unbounded
    /// and can carry a point past the center.
    pub fn scatter_toward(&mut self, point: Point2D, spread: f64) -> Point2D {
        let ratio_x = -spread * self.unit_open_zero().ln();
        let ratio_y = -spread * self.unit_open_zero().ln();

        Point2D::new(
            point.x - ratio_x * (point.x - self.center.0),
            point.y - ratio_y * (point.y - self.center.1),
        )
    }

    /// Uniform integer in [-radius, radius]; radii past `i32::MAX` saturate.
    pub fn jitter(&mut self, radius: u32) -> i32 {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        self.rng.gen_range(-r..=r)
    }

    /// Square side length, 1 or 2
    pub fn point_size(&mut self) -> u32 {
        self.rng.gen_range(1..=2)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        Some(&items[self.rng.gen_range(0..items.len())])
    }

    fn unit_open_zero(&mut self) -> f64 {
        1.0 - self.rng.gen::<f64>()
    }
}
