//! Vector type alias for 2D positions and velocities.

use nalgebra::Vector2;

/// 2D vector type for positions and velocities.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used throughout
/// the crate for evaluation points, velocity vectors, and streamline traces.
pub type Vec2 = Vector2<f64>;
