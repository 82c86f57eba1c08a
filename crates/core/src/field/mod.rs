//! Flow field superposition and sampling

pub mod flow_field;
pub mod sampling;

pub use flow_field::{Body, FlowField, FlowFieldConfig, ScalarKind};
pub use sampling::{ScalarGrid, VelocityGrid};
