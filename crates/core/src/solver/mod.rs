//! Numerical solvers: boundary-condition calibration and streamline tracing

pub mod boundary;
pub mod root_find;
pub mod streamline;

pub use root_find::{find_root, RootFindParams};
