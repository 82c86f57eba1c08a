//! Cylinder boundary-condition solver
//!
//! Calibrates auxiliary flows so an existing field approximates flow around
//! a solid circular body:
//!
//! - A doublet whose moment κ cancels the x-velocity at the upstream
//!   stagnation point `(x₀ − r, y₀)`, enforcing non-penetration there:
//!   `f(κ) = u_doublet(κ) + u_uniform = 0`.
//! - If a rotation rate ω is given, a vortex whose circulation Γ makes the
//!   tangential surface speed equal the rim speed `2πωr`:
//!   `g(Γ) = v_vortex(Γ) − 2πωr = 0`.
//!
//! Both objectives are pure functions of a trial strength; nothing touches
//! the field until every solve has converged, so a failed calibration
//! leaves the field exactly as it was.

use crate::error::FlowError;
use crate::field::flow_field::{Body, FlowField};
use crate::flows::{CanonicalFlow, Doublet, Vortex};
use crate::solver::root_find::{find_root, RootFindParams};
use std::f64::consts::TAU;
use tracing::info;

impl FlowField {
    /// Add a circular body at `(x_0, y_0)` with the given radius
    ///
    /// Solves for the doublet moment (and vortex circulation when
    /// `angular_velocity` is given) that satisfy the boundary conditions,
    /// then commits the calibrated flows and the body record to the field.
    /// Calibration is all-or-nothing: on error the field is unchanged.
    ///
    /// # Errors
    /// - [`FlowError::NonPositiveRadius`] for `radius <= 0`
    /// - [`FlowError::MissingUniformFlow`] / [`FlowError::AmbiguousUniformFlow`]
    ///   unless exactly one uniform flow is present
    /// - [`FlowError::Convergence`] if a strength solve fails
    pub fn add_body(
        &mut self,
        radius: f64,
        x_0: f64,
        y_0: f64,
        angular_velocity: Option<f64>,
        tolerance: f64,
    ) -> Result<(), FlowError> {
        if radius <= 0.0 {
            return Err(FlowError::NonPositiveRadius(radius));
        }
        let uniform = *self.require_uniform_flow()?;

        // Upstream stagnation point on the body surface
        let stag_x = x_0 - radius;
        let stag_y = y_0;
        let u_uniform = uniform.velocity(stag_x, stag_y).x;

        let params = RootFindParams {
            initial_guess: 1.0,
            tolerance,
            max_iterations: 100,
        };

        let doublet_strength = find_root(
            |kappa| Doublet::new(x_0, y_0, kappa).velocity(stag_x, stag_y).x + u_uniform,
            params,
        )?;

        let vortex_strength = angular_velocity
            .map(|omega| {
                let rim_speed = TAU * omega * radius;
                find_root(
                    |gamma| Vortex::new(x_0, y_0, gamma).velocity(stag_x, stag_y).y - rim_speed,
                    params,
                )
            })
            .transpose()?;

        // Every solve converged; commit
        self.add(Doublet::new(x_0, y_0, doublet_strength));
        if let Some(strength) = vortex_strength {
            self.add(Vortex::new(x_0, y_0, strength));
        }
        self.body = Some(Body {
            center: crate::core_types::Vec2::new(x_0, y_0),
            radius,
            angular_velocity,
            doublet_strength,
            vortex_strength,
        });

        info!(
            radius,
            doublet_strength,
            vortex_strength = vortex_strength.unwrap_or(0.0),
            "calibrated circular body"
        );
        Ok(())
    }
}
