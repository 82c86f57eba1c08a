//! Streamline integration
//!
//! Advances a particle through the superposed velocity field with explicit
//! forward Euler at a fixed timestep. Termination is normal, never an
//! error: the trace stops when the position leaves the domain bounds or
//! the iteration cap is reached, and the partial trace is returned.
//!
//! The step size is not adapted; dt must be small relative to the flow
//! length scale for the trace to stay stable.

use crate::core_types::Vec2;
use crate::field::flow_field::FlowField;

impl FlowField {
    /// Trace a streamline seeded at `(x_start, y_start)`
    ///
    /// Returns the ordered sequence of visited positions, seed included.
    /// A seed outside the domain bounds yields only the seed point, as does
    /// `max_iterations = 0`. Each call produces a fresh trace; identical
    /// inputs on an unchanged field give identical sequences.
    pub fn trace_streamline(
        &self,
        x_start: f64,
        y_start: f64,
        dt: f64,
        max_iterations: usize,
    ) -> Vec<Vec2> {
        let mut trace = Vec::with_capacity(max_iterations + 1);
        let mut position = Vec2::new(x_start, y_start);
        trace.push(position);

        for _ in 0..max_iterations {
            if !self.contains(position.x, position.y) {
                break;
            }
            let velocity = self.evaluate_velocity(position.x, position.y);
            position += velocity * dt;
            trace.push(position);
        }

        trace
    }
}
