//! Pressure coefficient evaluation
//!
//! For incompressible potential flow, Bernoulli's equation reduces the
//! local static pressure to a speed ratio against the freestream:
//!
//! ```text
//! Cp = 1 − (|V| / V∞)²
//! ```
//!
//! The freestream reference V∞ comes from the field's single uniform flow.
//! For the classical non-rotating cylinder the surface distribution is
//! `Cp = 1 − 4·sin²θ`, which the validation tests check at θ = 90°.

use crate::error::FlowError;
use crate::field::flow_field::FlowField;
use std::f64::consts::TAU;

impl FlowField {
    /// Pressure coefficient at a point
    ///
    /// Returns `None` strictly inside a registered body; the value is
    /// conventionally excluded there rather than computed.
    ///
    /// # Errors
    /// Propagates the configuration error from
    /// [`FlowField::require_uniform_flow`] when no single freestream
    /// reference exists.
    pub fn pressure_coefficient(&self, x: f64, y: f64) -> Result<Option<f64>, FlowError> {
        let freestream = self.require_uniform_flow()?.freestream_velocity();
        if self.is_inside_body(x, y) {
            return Ok(None);
        }
        let speed = self.superposed_velocity(x, y).norm();
        Ok(Some(1.0 - (speed / freestream).powi(2)))
    }

    /// Surface pressure distribution on the registered body
    ///
    /// Samples Cp at `resolution` equally spaced angles on the body circle,
    /// starting at θ = 0 (downstream side) and sweeping counterclockwise.
    /// The sample points lie exactly on the boundary, so the full superposed
    /// velocity is used without the interior mask.
    ///
    /// # Errors
    /// [`FlowError::MissingBody`] if no body is registered, plus the
    /// freestream configuration errors.
    pub fn surface_pressure_coefficient(
        &self,
        resolution: usize,
    ) -> Result<Vec<(f64, f64)>, FlowError> {
        let body = self.body.ok_or(FlowError::MissingBody)?;
        let freestream = self.require_uniform_flow()?.freestream_velocity();

        let mut distribution = Vec::with_capacity(resolution);
        for k in 0..resolution {
            let theta = TAU * k as f64 / resolution as f64;
            let x = body.center.x + body.radius * theta.cos();
            let y = body.center.y + body.radius * theta.sin();
            let speed = self.superposed_velocity(x, y).norm();
            distribution.push((theta, 1.0 - (speed / freestream).powi(2)));
        }
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::AngleUnit;
    use crate::field::flow_field::FlowFieldConfig;
    use crate::flows::UniformFlow;
    use approx::assert_relative_eq;

    fn cylinder_field() -> FlowField {
        let mut field = FlowField::new(&FlowFieldConfig {
            size: (20.0, 20.0),
            center: (0.0, 0.0),
            resolution: None,
        });
        field.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
        field.add_body(5.0, 0.0, 0.0, None, 1e-9).unwrap();
        field
    }

    #[test]
    fn test_freestream_alone_has_zero_cp() {
        let mut field = FlowField::new(&FlowFieldConfig::default());
        field.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
        let cp = field.pressure_coefficient(1.0, 1.0).unwrap().unwrap();
        assert_relative_eq!(cp, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cp_requires_uniform_flow() {
        let field = FlowField::new(&FlowFieldConfig::default());
        assert_eq!(
            field.pressure_coefficient(0.0, 0.0).unwrap_err(),
            FlowError::MissingUniformFlow
        );
    }

    #[test]
    fn test_cp_masked_inside_body() {
        let field = cylinder_field();
        assert_eq!(field.pressure_coefficient(0.0, 0.0).unwrap(), None);
        assert!(field.pressure_coefficient(7.0, 0.0).unwrap().is_some());
    }

    #[test]
    fn test_stagnation_point_cp_is_one() {
        let field = cylinder_field();
        let cp = field.pressure_coefficient(-5.0, 0.0).unwrap().unwrap();
        assert_relative_eq!(cp, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_surface_distribution_requires_body() {
        let mut field = FlowField::new(&FlowFieldConfig::default());
        field.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
        assert_eq!(
            field.surface_pressure_coefficient(36).unwrap_err(),
            FlowError::MissingBody
        );
    }

    #[test]
    fn test_surface_distribution_matches_classical_cylinder() {
        // Cp(θ) = 1 − 4·sin²θ for the non-rotating cylinder
        let field = cylinder_field();
        let distribution = field.surface_pressure_coefficient(360).unwrap();
        assert_eq!(distribution.len(), 360);
        for &(theta, cp) in &distribution {
            assert_relative_eq!(cp, 1.0 - 4.0 * theta.sin().powi(2), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_top_of_cylinder_cp_is_minus_three() {
        let field = cylinder_field();
        let distribution = field.surface_pressure_coefficient(4).unwrap();
        let (theta, cp) = distribution[1];
        assert_relative_eq!(theta, TAU / 4.0, epsilon = 1e-12);
        assert_relative_eq!(cp, -3.0, epsilon = 1e-6);
    }
}
