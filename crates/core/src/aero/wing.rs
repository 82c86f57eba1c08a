//! Thin wing via a lumped-vortex distribution
//!
//! Models a flat, unit-chord wing as discrete vortices along the chord
//! line: the chord is split into panels, each carrying one vortex at its
//! quarter-chord point with a collocation point at three-quarter chord.
//! Non-penetration at the collocation points gives a dense linear system
//! for the vortex strengths, solved by LU factorization.
//!
//! ```text
//! Σᵢ Γᵢ / 2π(xⱼ − xᵢ) = −V∞·sin α      for every collocation point j
//! ```
//!
//! Ground effect is modeled with mirror-image vortices of opposite sign
//! reflected through the ground plane y = 0; the images enter the influence
//! matrix and are added to the field so the ground plane stays a streamline.
//!
//! The lift coefficient follows Kutta–Joukowski over the summed bound
//! circulation, `C_L = −2·ΣΓ / (V∞·c)` (counterclockwise-positive Γ, so a
//! lifting wing carries negative circulation). For the flat plate this
//! reproduces the thin-airfoil result `C_L = 2π·sin α` at any panel count.

use crate::error::FlowError;
use crate::field::flow_field::FlowField;
use crate::flows::Vortex;
use nalgebra::{DMatrix, DVector};
use std::f64::consts::TAU;
use tracing::info;

/// Number of chordwise panels in the lumped-vortex wing model
pub const WING_PANELS: usize = 50;

impl FlowField {
    /// Add a unit-chord thin wing at the given angle of attack (degrees)
    ///
    /// The wing is placed on the horizontal line through the domain center,
    /// chord centered in x. Requires exactly one uniform flow as the
    /// freestream reference.
    ///
    /// # Errors
    /// Freestream configuration errors, or [`FlowError::SingularSystem`] if
    /// the influence matrix cannot be factorized.
    pub fn add_wing(&mut self, angle_of_attack: f64) -> Result<(), FlowError> {
        let x_le = (self.x_min + self.x_max) / 2.0 - 0.5;
        let y = (self.y_min + self.y_max) / 2.0;
        self.install_wing(angle_of_attack, x_le, y, None)
    }

    /// Add a unit-chord thin wing flying at `height` above the ground plane
    ///
    /// The ground plane is y = 0; the leading edge sits at `x_0`. Mirror
    /// vortices below the plane enforce the ground as a streamline.
    ///
    /// # Errors
    /// Same as [`FlowField::add_wing`].
    pub fn add_wing_ground_effect(
        &mut self,
        angle_of_attack: f64,
        x_0: f64,
        height: f64,
    ) -> Result<(), FlowError> {
        self.install_wing(angle_of_attack, x_0, height, Some(height))
    }

    fn install_wing(
        &mut self,
        angle_of_attack: f64,
        x_le: f64,
        y: f64,
        image_height: Option<f64>,
    ) -> Result<(), FlowError> {
        let freestream = self.require_uniform_flow()?.freestream_velocity();
        let alpha = angle_of_attack.to_radians();

        let n = WING_PANELS;
        let panel = 1.0 / n as f64; // unit chord
        let vortex_x: Vec<f64> = (0..n).map(|i| x_le + (i as f64 + 0.25) * panel).collect();
        let colloc_x: Vec<f64> = (0..n).map(|j| x_le + (j as f64 + 0.75) * panel).collect();

        // Influence of vortex i on the normal velocity at collocation j
        let influence = DMatrix::from_fn(n, n, |j, i| {
            let dx = colloc_x[j] - vortex_x[i];
            let direct = 1.0 / (TAU * dx);
            image_height.map_or(direct, |h| direct - dx / (TAU * (dx * dx + 4.0 * h * h)))
        });
        let rhs = DVector::from_element(n, -freestream * alpha.sin());

        let strengths = influence
            .lu()
            .solve(&rhs)
            .ok_or(FlowError::SingularSystem)?;
        let circulation: f64 = strengths.sum();

        // Solved; commit the bound vortices (and their images) to the field
        for (i, &gamma) in strengths.iter().enumerate() {
            self.add(Vortex::new(vortex_x[i], y, gamma));
            if let Some(h) = image_height {
                self.add(Vortex::new(vortex_x[i], -h, -gamma));
            }
        }
        self.wing_circulation = Some(circulation);

        info!(
            angle_of_attack,
            circulation,
            panels = n,
            ground_effect = image_height.is_some(),
            "calibrated lumped-vortex wing"
        );
        Ok(())
    }

    /// Lift coefficient of the calibrated wing
    ///
    /// Kutta–Joukowski over the total bound circulation with the given
    /// reference chord: `C_L = −2·ΣΓ / (V∞·c)`.
    ///
    /// # Errors
    /// [`FlowError::MissingWing`] before a wing has been added, plus the
    /// freestream configuration errors.
    pub fn lift_coefficient(&self, chord: f64) -> Result<f64, FlowError> {
        let circulation = self.wing_circulation.ok_or(FlowError::MissingWing)?;
        let freestream = self.require_uniform_flow()?.freestream_velocity();
        Ok(-2.0 * circulation / (freestream * chord))
    }
}
