//! Potential Flow Core Library
//!
//! Computes and samples two-dimensional potential (inviscid, irrotational)
//! flow fields built from the superposition of canonical elementary flows,
//! and derives aerodynamic quantities from them.
//!
//! ## What it provides
//!
//! - Canonical flows with exact closed-form contracts: uniform stream,
//!   vortex, source/sink, doublet
//! - A flow field that superposes registered flows and samples scalar and
//!   velocity grids with body-interior masking
//! - A boundary-condition solver that calibrates doublet and vortex
//!   strengths for a (possibly rotating) circular body
//! - A forward-Euler streamline integrator
//! - Pressure coefficient and lift evaluation, including a lumped-vortex
//!   thin wing with ground effect

// Core types and coordinate utilities
pub mod core_types;

// Canonical elementary flows
pub mod flows;

// Superposition and grid sampling
pub mod field;

// Boundary-condition calibration and streamline tracing
pub mod solver;

// Pressure and lift coefficients
pub mod aero;

pub mod error;

// Re-export core types
pub use core_types::{AngleUnit, Vec2};
pub use error::FlowError;

// Re-export the flow primitives and their dispatch types
pub use flows::{CanonicalFlow, Doublet, FlowElement, SourceSink, UniformFlow, Vortex};

// Re-export the field and sampling types
pub use field::{Body, FlowField, FlowFieldConfig, ScalarGrid, ScalarKind, VelocityGrid};

// Re-export solver entry points
pub use aero::WING_PANELS;
pub use solver::{find_root, RootFindParams};
