//! Grid sampling of superposed quantities
//!
//! Evaluates the field over the cartesian product of linearly spaced
//! coordinates derived from the domain bounds and per-axis resolution.
//! Points strictly inside a registered body are marked invalid in a
//! parallel validity mask rather than carrying sentinel values, so numeric
//! comparisons stay unambiguous.
//!
//! Sampling is embarrassingly parallel across points; rows are distributed
//! with rayon. Each point is still summed in insertion order, so the
//! parallel result is bit-identical to a serial sweep.

use crate::core_types::Vec2;
use crate::field::flow_field::{FlowField, ScalarKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Linearly spaced coordinates from `min` to `max` inclusive
pub(crate) fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count).map(|i| min + step * i as f64).collect()
}

/// Sampled scalar grid with a validity mask
///
/// Values are stored row-major: index `j * nx + i` holds the sample at
/// `(x_values[i], y_values[j])`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarGrid {
    /// Sample coordinates along x
    pub x_values: Vec<f64>,
    /// Sample coordinates along y
    pub y_values: Vec<f64>,
    /// Superposed scalar values, row-major
    pub values: Vec<f64>,
    /// Validity mask parallel to `values`; `false` marks body interior
    pub valid: Vec<bool>,
}

impl ScalarGrid {
    /// Value at column `i`, row `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[j * self.x_values.len() + i]
    }

    /// Whether the sample at column `i`, row `j` is outside the body mask
    pub fn is_valid(&self, i: usize, j: usize) -> bool {
        self.valid[j * self.x_values.len() + i]
    }
}

/// Sampled velocity grid with a validity mask
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityGrid {
    /// Sample coordinates along x
    pub x_values: Vec<f64>,
    /// Sample coordinates along y
    pub y_values: Vec<f64>,
    /// x velocity components, row-major
    pub u: Vec<f64>,
    /// y velocity components, row-major
    pub v: Vec<f64>,
    /// Validity mask; `false` marks body interior
    pub valid: Vec<bool>,
}

impl VelocityGrid {
    /// Velocity at column `i`, row `j`
    pub fn get(&self, i: usize, j: usize) -> Vec2 {
        let idx = j * self.x_values.len() + i;
        Vec2::new(self.u[idx], self.v[idx])
    }

    /// Whether the sample at column `i`, row `j` is outside the body mask
    pub fn is_valid(&self, i: usize, j: usize) -> bool {
        self.valid[j * self.x_values.len() + i]
    }
}

impl FlowField {
    /// Axis coordinates for the configured resolution
    fn axes(&self) -> (Vec<f64>, Vec<f64>) {
        let (nx, ny) = self.resolution;
        (
            linspace(self.x_min, self.x_max, nx),
            linspace(self.y_min, self.y_max, ny),
        )
    }

    /// Sample a superposed scalar quantity over the whole domain
    pub fn sample_scalar_grid(&self, kind: ScalarKind) -> ScalarGrid {
        let (x_values, y_values) = self.axes();
        let nx = x_values.len();

        let mut values = vec![0.0; nx * y_values.len()];
        let mut valid = vec![true; nx * y_values.len()];

        values
            .par_chunks_mut(nx)
            .zip(valid.par_chunks_mut(nx))
            .enumerate()
            .for_each(|(j, (row_values, row_valid))| {
                let y = y_values[j];
                for (i, &x) in x_values.iter().enumerate() {
                    if self.is_inside_body(x, y) {
                        row_valid[i] = false;
                    } else {
                        row_values[i] = self.evaluate_scalar(kind, x, y);
                    }
                }
            });

        ScalarGrid {
            x_values,
            y_values,
            values,
            valid,
        }
    }

    /// Sample the superposed velocity over the whole domain
    pub fn sample_velocity_grid(&self) -> VelocityGrid {
        let (x_values, y_values) = self.axes();
        let nx = x_values.len();

        let mut u = vec![0.0; nx * y_values.len()];
        let mut v = vec![0.0; nx * y_values.len()];
        let mut valid = vec![true; nx * y_values.len()];

        u.par_chunks_mut(nx)
            .zip(v.par_chunks_mut(nx))
            .zip(valid.par_chunks_mut(nx))
            .enumerate()
            .for_each(|(j, ((row_u, row_v), row_valid))| {
                let y = y_values[j];
                for (i, &x) in x_values.iter().enumerate() {
                    if self.is_inside_body(x, y) {
                        row_valid[i] = false;
                    } else {
                        let vel = self.evaluate_velocity(x, y);
                        row_u[i] = vel.x;
                        row_v[i] = vel.y;
                    }
                }
            });

        VelocityGrid {
            x_values,
            y_values,
            u,
            v,
            valid,
        }
    }
}
