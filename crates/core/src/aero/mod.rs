//! Aerodynamic coefficient evaluation

pub mod pressure;
pub mod wing;

pub use wing::WING_PANELS;
