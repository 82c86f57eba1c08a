//! Superposed flow field
//!
//! A [`FlowField`] owns an ordered collection of canonical flows and
//! evaluates superposed quantities at any point. Because Laplace's equation
//! is linear, the superposed stream function, potential, and velocity are
//! the plain arithmetic sums of each flow's contribution; no clipping or
//! weighting is applied. The only exception is the interior of a registered
//! body, where the velocity is defined as zero by convention and sampled
//! grids mark the points invalid.

use crate::core_types::Vec2;
use crate::error::FlowError;
use crate::flows::{CanonicalFlow, FlowElement, UniformFlow};
use serde::{Deserialize, Serialize};

/// Scalar quantity kinds a flow field can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    /// Stream function ψ; contours are streamlines
    StreamFunction,
    /// Velocity potential φ
    PotentialFunction,
    /// Per-flow velocity magnitudes, summed
    AbsoluteVelocity,
}

/// Configuration for a flow field's domain and sampling resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowFieldConfig {
    /// Width and height of the domain
    pub size: (f64, f64),
    /// Center of the domain
    pub center: (f64, f64),
    /// Sample counts per axis; `None` derives `size + 1` per axis
    pub resolution: Option<(usize, usize)>,
}

impl Default for FlowFieldConfig {
    fn default() -> Self {
        FlowFieldConfig {
            size: (10.0, 10.0),
            center: (0.0, 0.0),
            resolution: None, // One sample per unit length plus the end point
        }
    }
}

/// Circular body registered by the boundary-condition solver
///
/// Records the geometry and the strengths that were solved for it, so a
/// caller can inspect what the calibration produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Center of the cylinder
    pub center: Vec2,
    /// Cylinder radius
    pub radius: f64,
    /// Rotation rate ω, if the body spins
    pub angular_velocity: Option<f64>,
    /// Solved doublet moment
    pub doublet_strength: f64,
    /// Solved vortex circulation, present only for rotating bodies
    pub vortex_strength: Option<f64>,
}

/// Superposed two-dimensional potential flow field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowField {
    pub(crate) elements: Vec<FlowElement>,
    pub(crate) x_min: f64,
    pub(crate) x_max: f64,
    pub(crate) y_min: f64,
    pub(crate) y_max: f64,
    pub(crate) resolution: (usize, usize),
    pub(crate) body: Option<Body>,
    /// Total bound circulation of a calibrated wing (counterclockwise positive)
    pub(crate) wing_circulation: Option<f64>,
}

impl FlowField {
    /// Create an empty flow field over the configured domain
    pub fn new(config: &FlowFieldConfig) -> Self {
        let (width, height) = config.size;
        let (cx, cy) = config.center;
        let resolution = config
            .resolution
            .unwrap_or((width as usize + 1, height as usize + 1));

        FlowField {
            elements: Vec::new(),
            x_min: cx - width / 2.0,
            x_max: cx + width / 2.0,
            y_min: cy - height / 2.0,
            y_max: cy + height / 2.0,
            resolution,
            body: None,
            wing_circulation: None,
        }
    }

    /// Append a canonical flow to the field
    pub fn add(&mut self, element: impl Into<FlowElement>) {
        self.elements.push(element.into());
    }

    /// The flows currently in the field, in insertion order
    pub fn elements(&self) -> &[FlowElement] {
        &self.elements
    }

    /// Domain bounds as `(x_min, x_max, y_min, y_max)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }

    /// Sample counts per axis
    pub fn resolution(&self) -> (usize, usize) {
        self.resolution
    }

    /// The registered body, if the boundary-condition solver added one
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Whether the point lies inside the domain bounds
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Whether the point lies strictly inside the registered body
    ///
    /// Points on the surface are not inside, so boundary sampling (surface
    /// pressure distributions) sees the full superposed field.
    pub fn is_inside_body(&self, x: f64, y: f64) -> bool {
        self.body.is_some_and(|body| {
            let dx = x - body.center.x;
            let dy = y - body.center.y;
            dx.hypot(dy) < body.radius
        })
    }

    /// Superposed scalar quantity at a point
    ///
    /// Arithmetic sum of each flow's contribution; the body mask does not
    /// apply to point queries, only to sampled grids.
    pub fn evaluate_scalar(&self, kind: ScalarKind, x: f64, y: f64) -> f64 {
        self.elements
            .iter()
            .map(|element| match kind {
                ScalarKind::StreamFunction => element.stream_function(x, y),
                ScalarKind::PotentialFunction => element.potential_function(x, y),
                ScalarKind::AbsoluteVelocity => element.absolute_velocity(x, y),
            })
            .sum()
    }

    /// Superposed velocity at a point, zeroed strictly inside the body
    pub fn evaluate_velocity(&self, x: f64, y: f64) -> Vec2 {
        if self.is_inside_body(x, y) {
            return Vec2::zeros();
        }
        self.superposed_velocity(x, y)
    }

    /// Raw superposed velocity, ignoring the body mask
    ///
    /// Used for surface sampling, where the evaluation points lie exactly on
    /// the boundary and rounding must not zero them out.
    pub(crate) fn superposed_velocity(&self, x: f64, y: f64) -> Vec2 {
        self.elements
            .iter()
            .fold(Vec2::zeros(), |sum, element| sum + element.velocity(x, y))
    }

    /// The single uniform flow in the field
    ///
    /// # Errors
    /// [`FlowError::MissingUniformFlow`] if none is present,
    /// [`FlowError::AmbiguousUniformFlow`] if more than one is.
    pub fn require_uniform_flow(&self) -> Result<&UniformFlow, FlowError> {
        let mut found = None;
        let mut count = 0;
        for element in &self.elements {
            if let FlowElement::Uniform(uniform) = element {
                found = Some(uniform);
                count += 1;
            }
        }
        match count {
            0 => Err(FlowError::MissingUniformFlow),
            1 => Ok(found.expect("counted one uniform flow")),
            _ => Err(FlowError::AmbiguousUniformFlow { count }),
        }
    }
}
