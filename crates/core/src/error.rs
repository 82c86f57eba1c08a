//! Error types for flow field construction and calibration

use std::fmt;

/// Errors raised while building or calibrating a potential flow field
///
/// Configuration errors (`MissingUniformFlow`, `AmbiguousUniformFlow`,
/// `InvalidAngleUnit`, `NonPositiveRadius`, `MissingBody`, `MissingWing`)
/// abort the requested operation immediately and leave the field untouched.
/// `Convergence` and `SingularSystem` are numerical faults surfaced from the
/// boundary-condition and wing solvers.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowError {
    /// A computation needed a freestream reference and no uniform flow was present
    MissingUniformFlow,
    /// More than one uniform flow where a single freestream reference is required
    AmbiguousUniformFlow {
        /// Number of uniform flows found in the field
        count: usize,
    },
    /// Angle unit selector was not a recognized option
    InvalidAngleUnit(String),
    /// Body radius must be strictly positive
    NonPositiveRadius(f64),
    /// An operation needed a registered body and none was present
    MissingBody,
    /// An operation needed a calibrated wing and none was present
    MissingWing,
    /// Root finder exhausted its iteration budget before reaching tolerance
    Convergence {
        /// Iterations spent before giving up
        iterations: usize,
        /// Magnitude of the objective at the last iterate
        residual: f64,
    },
    /// Wing influence matrix could not be factorized
    SingularSystem,
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::MissingUniformFlow => {
                write!(f, "must define a uniform flow before this computation")
            }
            FlowError::AmbiguousUniformFlow { count } => write!(
                f,
                "expected exactly one uniform flow as freestream reference, found {count}"
            ),
            FlowError::InvalidAngleUnit(unit) => write!(
                f,
                "invalid angle units {unit:?}: either \"rad\" for radians or \"deg\" for degrees"
            ),
            FlowError::NonPositiveRadius(radius) => {
                write!(f, "body radius must be positive, got {radius}")
            }
            FlowError::MissingBody => write!(f, "no body registered in the flow field"),
            FlowError::MissingWing => write!(f, "no wing registered in the flow field"),
            FlowError::Convergence {
                iterations,
                residual,
            } => write!(
                f,
                "root finder failed to converge after {iterations} iterations (residual {residual:e})"
            ),
            FlowError::SingularSystem => write!(f, "wing influence matrix is singular"),
        }
    }
}

impl std::error::Error for FlowError {}
