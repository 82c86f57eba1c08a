//! Point vortex flow
//!
//! Purely tangential flow around the origin with circulation Γ. The induced
//! speed decays as 1/r, so the circulation integral around any circle
//! centered on the vortex recovers Γ independent of radius.
//!
//! ```text
//! ψ = −Γ·ln r / 2π
//! φ = Γ·θ / 2π
//! u_r = 0,   u_θ = Γ / 2πr
//! ```

use crate::core_types::polar::{to_cartesian_velocity, to_polar};
use crate::core_types::Vec2;
use crate::flows::CanonicalFlow;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Point vortex with circulation Γ, positive counterclockwise
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vortex {
    origin: Vec2,
    /// Circulation Γ
    strength: f64,
}

impl Vortex {
    /// Create a vortex centered at `(x_0, y_0)` with circulation `strength`
    pub fn new(x_0: f64, y_0: f64, strength: f64) -> Self {
        Vortex {
            origin: Vec2::new(x_0, y_0),
            strength,
        }
    }

    /// Circulation Γ
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

impl CanonicalFlow for Vortex {
    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn stream_function(&self, x: f64, y: f64) -> f64 {
        if self.is_origin(x, y) {
            return 0.0;
        }
        let (x, y) = self.local(x, y);
        let (r, _theta) = to_polar(x, y);

        -self.strength * r.ln() / TAU
    }

    fn potential_function(&self, x: f64, y: f64) -> f64 {
        if self.is_origin(x, y) {
            return 0.0;
        }
        let (x, y) = self.local(x, y);
        let (_r, theta) = to_polar(x, y);

        self.strength * theta / TAU
    }

    fn velocity(&self, x: f64, y: f64) -> Vec2 {
        if self.is_origin(x, y) {
            return Vec2::zeros();
        }
        let (x, y) = self.local(x, y);
        let (r, theta) = to_polar(x, y);

        let u_r = 0.0;
        let u_theta = self.strength / (TAU * r);

        let (u, v) = to_cartesian_velocity(u_r, u_theta, theta);
        Vec2::new(u, v)
    }
}
