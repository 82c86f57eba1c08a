//! Angle unit selection for flow construction
//!
//! Uniform flows accept their direction in either radians or degrees. The
//! selector is an enum so a typo cannot silently fall through; parsing an
//! unrecognized unit string fails fast with a configuration error.

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit of an angle supplied to a flow constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Angle given in degrees
    Degrees,
    /// Angle given in radians
    Radians,
}

impl AngleUnit {
    /// Convert an angle expressed in this unit to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radians" => Ok(AngleUnit::Radians),
            other => Err(FlowError::InvalidAngleUnit(other.to_string())),
        }
    }
}
