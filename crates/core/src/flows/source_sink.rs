//! Point source and sink flow
//!
//! Purely radial flow from (source, Λ > 0) or toward (sink, Λ < 0) the
//! origin. Λ is the volume flow rate per unit depth.
//!
//! ```text
//! ψ = Λ·θ / 2π
//! φ = Λ·ln r / 2π
//! u_r = Λ / 2πr,   u_θ = 0
//! ```

use crate::core_types::polar::{to_cartesian_velocity, to_polar};
use crate::core_types::Vec2;
use crate::flows::CanonicalFlow;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Point source (positive strength) or sink (negative strength)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SourceSink {
    origin: Vec2,
    /// Volume flow rate Λ; positive emits, negative absorbs
    strength: f64,
}

impl SourceSink {
    /// Create a source/sink centered at `(x_0, y_0)` with rate `strength`
    pub fn new(x_0: f64, y_0: f64, strength: f64) -> Self {
        SourceSink {
            origin: Vec2::new(x_0, y_0),
            strength,
        }
    }

    /// Volume flow rate Λ
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

impl CanonicalFlow for SourceSink {
    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn stream_function(&self, x: f64, y: f64) -> f64 {
        if self.is_origin(x, y) {
            return 0.0;
        }
        let (x, y) = self.local(x, y);
        let (_r, theta) = to_polar(x, y);

        self.strength * theta / TAU
    }

    fn potential_function(&self, x: f64, y: f64) -> f64 {
        if self.is_origin(x, y) {
            return 0.0;
        }
        let (x, y) = self.local(x, y);
        let (r, _theta) = to_polar(x, y);

        self.strength * r.ln() / TAU
    }

    fn velocity(&self, x: f64, y: f64) -> Vec2 {
        if self.is_origin(x, y) {
            return Vec2::zeros();
        }
        let (x, y) = self.local(x, y);
        let (r, theta) = to_polar(x, y);

        let u_r = self.strength / (TAU * r);
        let u_theta = 0.0;

        let (u, v) = to_cartesian_velocity(u_r, u_theta, theta);
        Vec2::new(u, v)
    }
}
