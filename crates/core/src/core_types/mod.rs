//! Core types and coordinate utilities

pub mod angle;
pub mod polar;
pub mod vec2;

pub use angle::AngleUnit;
pub use vec2::Vec2;
