//! Uniform freestream flow
//!
//! Constant-velocity flow at a fixed angle. The only canonical flow with no
//! singularity; its origin is irrelevant because the solution is spatially
//! invariant, so it is fixed at `(0, 0)`.
//!
//! ```text
//! ψ = V·(y·cos α − x·sin α)
//! φ = V·(x·cos α + y·sin α)
//! (u, v) = (V·cos α, V·sin α)      everywhere
//! ```

use crate::core_types::{AngleUnit, Vec2};
use crate::flows::CanonicalFlow;
use serde::{Deserialize, Serialize};

/// Uniform flow with freestream speed `V` at angle `α` from the x-axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UniformFlow {
    /// Freestream speed (m/s)
    freestream_velocity: f64,
    /// Flow direction, stored in radians
    angle: f64,
}

impl UniformFlow {
    /// Create a uniform flow
    ///
    /// The angle is interpreted according to `unit`; see
    /// [`AngleUnit`] for the recognized selectors.
    pub fn new(freestream_velocity: f64, angle: f64, unit: AngleUnit) -> Self {
        UniformFlow {
            freestream_velocity,
            angle: unit.to_radians(angle),
        }
    }

    /// Freestream speed
    pub fn freestream_velocity(&self) -> f64 {
        self.freestream_velocity
    }

    /// Flow direction in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl CanonicalFlow for UniformFlow {
    fn origin(&self) -> Vec2 {
        Vec2::zeros()
    }

    fn stream_function(&self, x: f64, y: f64) -> f64 {
        self.freestream_velocity * (y * self.angle.cos() - x * self.angle.sin())
    }

    fn potential_function(&self, x: f64, y: f64) -> f64 {
        self.freestream_velocity * (x * self.angle.cos() + y * self.angle.sin())
    }

    fn velocity(&self, _x: f64, _y: f64) -> Vec2 {
        Vec2::new(
            self.freestream_velocity * self.angle.cos(),
            self.freestream_velocity * self.angle.sin(),
        )
    }
}
