//! Scalar root finding
//!
//! Secant iteration on a one-dimensional objective. The boundary-condition
//! solver uses this to pick primitive strengths; the objectives there are
//! linear in the strength, so convergence takes a couple of iterations, but
//! the solver is kept general with a tolerance and a hard iteration budget.

use crate::error::FlowError;
use tracing::debug;

/// Parameters for the secant root finder
#[derive(Debug, Clone, Copy)]
pub struct RootFindParams {
    /// Starting iterate
    pub initial_guess: f64,
    /// Convergence tolerance on |f(x)|
    pub tolerance: f64,
    /// Iteration budget; exhausting it is a convergence error
    pub max_iterations: usize,
}

impl Default for RootFindParams {
    fn default() -> Self {
        RootFindParams {
            initial_guess: 1.0,
            tolerance: 1e-3,
            max_iterations: 100,
        }
    }
}

/// Find `x` with `|objective(x)| <= tolerance` by secant iteration
///
/// # Errors
/// [`FlowError::Convergence`] if the iteration budget is exhausted or the
/// secant degenerates (two iterates with identical objective values) before
/// reaching tolerance.
pub fn find_root<F>(objective: F, params: RootFindParams) -> Result<f64, FlowError>
where
    F: Fn(f64) -> f64,
{
    let mut x0 = params.initial_guess;
    let mut f0 = objective(x0);
    if f0.abs() <= params.tolerance {
        return Ok(x0);
    }

    // Second starting iterate offset proportionally to the guess scale
    let mut x1 = x0 + 0.1 * x0.abs().max(1.0);
    let mut f1 = objective(x1);

    for iteration in 0..params.max_iterations {
        if f1.abs() <= params.tolerance {
            debug!(
                iterations = iteration,
                root = x1,
                residual = f1.abs(),
                "secant iteration converged"
            );
            return Ok(x1);
        }

        let denominator = f1 - f0;
        if denominator == 0.0 {
            return Err(FlowError::Convergence {
                iterations: iteration,
                residual: f1.abs(),
            });
        }

        let x2 = x1 - f1 * (x1 - x0) / denominator;
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = objective(x1);
    }

    if f1.abs() <= params.tolerance {
        return Ok(x1);
    }
    Err(FlowError::Convergence {
        iterations: params.max_iterations,
        residual: f1.abs(),
    })
}
