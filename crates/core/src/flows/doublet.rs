//! Doublet flow
//!
//! Limiting superposition of a source and sink of equal and opposite
//! strength at vanishing separation, oriented along the x-axis. Superposed
//! with a uniform stream it produces the flow around a circular cylinder,
//! which is how the boundary-condition solver models solid bodies.
//!
//! ```text
//! ψ = −κ·sin θ / 2πr
//! φ =  κ·cos θ / 2πr
//! u_r = −κ·cos θ / 2πr²,   u_θ = −κ·sin θ / 2πr²
//! ```
//!
//! The velocity components are the polar gradient of φ (equivalently the
//! curl relations on ψ), so the superposed cylinder solution satisfies
//! non-penetration over the whole surface, not just at the solved
//! stagnation point.

use crate::core_types::polar::{to_cartesian_velocity, to_polar};
use crate::core_types::Vec2;
use crate::flows::CanonicalFlow;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Doublet with dipole moment κ, axis along +x
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Doublet {
    origin: Vec2,
    /// Dipole moment κ
    strength: f64,
}

impl Doublet {
    /// Create a doublet centered at `(x_0, y_0)` with moment `strength`
    pub fn new(x_0: f64, y_0: f64, strength: f64) -> Self {
        Doublet {
            origin: Vec2::new(x_0, y_0),
            strength,
        }
    }

    /// Dipole moment κ
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

impl CanonicalFlow for Doublet {
    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn stream_function(&self, x: f64, y: f64) -> f64 {
        if self.is_origin(x, y) {
            return 0.0;
        }
        let (x, y) = self.local(x, y);
        let (r, theta) = to_polar(x, y);

        -self.strength * theta.sin() / (TAU * r)
    }

    fn potential_function(&self, x: f64, y: f64) -> f64 {
        if self.is_origin(x, y) {
            return 0.0;
        }
        let (x, y) = self.local(x, y);
        let (r, theta) = to_polar(x, y);

        self.strength * theta.cos() / (TAU * r)
    }

    fn velocity(&self, x: f64, y: f64) -> Vec2 {
        if self.is_origin(x, y) {
            return Vec2::zeros();
        }
        let (x, y) = self.local(x, y);
        let (r, theta) = to_polar(x, y);

        let u_r = -self.strength * theta.cos() / (TAU * r * r);
        let u_theta = -self.strength * theta.sin() / (TAU * r * r);

        let (u, v) = to_cartesian_velocity(u_r, u_theta, theta);
        Vec2::new(u, v)
    }
}
