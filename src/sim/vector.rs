//! 2D vector used for positions and velocities
//!
//! Mutating operations (`add`, `scale`) work in place and return `&mut Self`
//! so call sites can chain them. The `std::ops` impls give value semantics
//! where a fresh vector is wanted instead; they are not imported by name so
//! `v.add(..)` always resolves to the in-place method.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point or direction in playfield space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, -1.0);
    pub const DOWN: Vector2 = Vector2::new(0.0, 1.0);
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Add `other` to this vector in place
    pub fn add(&mut self, other: Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    /// Multiply both components by `k` in place
    pub fn scale(&mut self, k: f64) -> &mut Self {
        self.x *= k;
        self.y *= k;
        self
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance_to(&self, other: Vector2) -> f64 {
        DVec2::from(*self).distance(DVec2::from(other))
    }

    #[inline]
    pub fn length(&self) -> f64 {
        DVec2::from(*self).length()
    }

    /// Unit vector pointing at `radians` from the +x axis
    pub fn from_angle(radians: f64) -> Self {
        Self::new(radians.cos(), radians.sin())
    }

    /// Each component is `±uniform[0, 1)` with an independent coin-flip sign.
    ///
    /// The result is neither unit length nor uniform over the disk.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random::<f64>() * random_sign(rng);
        let y = rng.random::<f64>() * random_sign(rng);
        Self::new(x, y)
    }

    /// Inclusive axis-aligned containment test
    pub fn is_in_area(v: Vector2, top_left: Vector2, bottom_right: Vector2) -> bool {
        v.x >= top_left.x && v.x <= bottom_right.x && v.y >= top_left.y && v.y <= bottom_right.y
    }

    /// Clamp each component into `[min, max]`
    ///
    /// Uses `max`-then-`min` so an inverted range resolves to `max` instead
    /// of panicking.
    pub fn clamp(self, min: Vector2, max: Vector2) -> Self {
        Self::new(self.x.max(min.x).min(max.x), self.y.max(min.y).min(max.y))
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.random::<f64>() > 0.5 { -1.0 } else { 1.0 }
}

impl std::ops::Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}
