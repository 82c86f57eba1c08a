//! Canonical elementary potential flows
//!
//! Each flow is an exact closed-form solution of Laplace's equation for the
//! stream function ψ and velocity potential φ of two-dimensional inviscid,
//! irrotational flow. Superposing them (see [`crate::field::FlowField`])
//! yields new exact solutions, which is how simple bodies such as the
//! rotating cylinder are modeled.
//!
//! # Singular origins
//!
//! Every flow except the uniform stream is singular at its own origin. By
//! convention evaluation exactly at that point returns zero for the scalar
//! functions and a zero vector for the velocity, rather than dividing by
//! zero or taking `ln(0)`. The sentinel is applied uniformly across all
//! variants and all capability functions.

pub mod doublet;
pub mod source_sink;
pub mod uniform;
pub mod vortex;

pub use doublet::Doublet;
pub use source_sink::SourceSink;
pub use uniform::UniformFlow;
pub use vortex::Vortex;

use crate::core_types::Vec2;
use serde::{Deserialize, Serialize};

/// Capability set shared by every canonical flow
///
/// All evaluation points are in the global frame; implementations transform
/// to their local frame `(x − x₀, y − y₀)` internally.
pub trait CanonicalFlow {
    /// Origin of the flow in the global frame
    fn origin(&self) -> Vec2;

    /// Stream function ψ at the given point
    fn stream_function(&self, x: f64, y: f64) -> f64;

    /// Velocity potential φ at the given point
    fn potential_function(&self, x: f64, y: f64) -> f64;

    /// Velocity vector `(u, v)` at the given point
    fn velocity(&self, x: f64, y: f64) -> Vec2;

    /// Velocity magnitude `√(u² + v²)` at the given point
    fn absolute_velocity(&self, x: f64, y: f64) -> f64 {
        self.velocity(x, y).norm()
    }

    /// Transform a global point to the flow's local frame
    fn local(&self, x: f64, y: f64) -> (f64, f64) {
        let origin = self.origin();
        (x - origin.x, y - origin.y)
    }

    /// Whether the point coincides exactly with the flow's origin
    ///
    /// Most canonical flows are undefined at their own center; callers use
    /// this to return the zero sentinel instead of evaluating there.
    fn is_origin(&self, x: f64, y: f64) -> bool {
        let origin = self.origin();
        x == origin.x && y == origin.y
    }
}

/// Sum type over the canonical flows
///
/// A flow field stores its flows as `FlowElement` values; dispatch goes
/// through the [`CanonicalFlow`] impl below. The enum form lets callers like
/// [`crate::field::FlowField::require_uniform_flow`] match on the variant
/// instead of downcasting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FlowElement {
    /// Uniform freestream
    Uniform(UniformFlow),
    /// Point vortex
    Vortex(Vortex),
    /// Point source (positive strength) or sink (negative strength)
    SourceSink(SourceSink),
    /// Doublet (source/sink pair in the vanishing-separation limit)
    Doublet(Doublet),
}

impl CanonicalFlow for FlowElement {
    fn origin(&self) -> Vec2 {
        match self {
            FlowElement::Uniform(flow) => flow.origin(),
            FlowElement::Vortex(flow) => flow.origin(),
            FlowElement::SourceSink(flow) => flow.origin(),
            FlowElement::Doublet(flow) => flow.origin(),
        }
    }

    fn stream_function(&self, x: f64, y: f64) -> f64 {
        match self {
            FlowElement::Uniform(flow) => flow.stream_function(x, y),
            FlowElement::Vortex(flow) => flow.stream_function(x, y),
            FlowElement::SourceSink(flow) => flow.stream_function(x, y),
            FlowElement::Doublet(flow) => flow.stream_function(x, y),
        }
    }

    fn potential_function(&self, x: f64, y: f64) -> f64 {
        match self {
            FlowElement::Uniform(flow) => flow.potential_function(x, y),
            FlowElement::Vortex(flow) => flow.potential_function(x, y),
            FlowElement::SourceSink(flow) => flow.potential_function(x, y),
            FlowElement::Doublet(flow) => flow.potential_function(x, y),
        }
    }

    fn velocity(&self, x: f64, y: f64) -> Vec2 {
        match self {
            FlowElement::Uniform(flow) => flow.velocity(x, y),
            FlowElement::Vortex(flow) => flow.velocity(x, y),
            FlowElement::SourceSink(flow) => flow.velocity(x, y),
            FlowElement::Doublet(flow) => flow.velocity(x, y),
        }
    }
}

impl From<UniformFlow> for FlowElement {
    fn from(flow: UniformFlow) -> Self {
        FlowElement::Uniform(flow)
    }
}

impl From<Vortex> for FlowElement {
    fn from(flow: Vortex) -> Self {
        FlowElement::Vortex(flow)
    }
}

impl From<SourceSink> for FlowElement {
    fn from(flow: SourceSink) -> Self {
        FlowElement::SourceSink(flow)
    }
}

impl From<Doublet> for FlowElement {
    fn from(flow: Doublet) -> Self {
        FlowElement::Doublet(flow)
    }
}
