//! Polar coordinate transforms
//!
//! The singular flows (vortex, source/sink, doublet) are naturally expressed
//! in polar coordinates around their own origin. These helpers convert
//! between the cartesian evaluation frame and the local polar frame.

/// Transform cartesian coordinates to polar `(r, θ)`
///
/// θ is measured counterclockwise from the positive x-axis in `(-π, π]`.
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    let r = x.hypot(y);
    let theta = y.atan2(x);
    (r, theta)
}

/// Transform polar velocity components to cartesian components
///
/// ```text
/// u = u_r·cos θ − u_θ·sin θ
/// v = u_r·sin θ + u_θ·cos θ
/// ```
pub fn to_cartesian_velocity(u_r: f64, u_theta: f64, theta: f64) -> (f64, f64) {
    let u = u_r * theta.cos() - u_theta * theta.sin();
    let v = u_r * theta.sin() + u_theta * theta.cos();
    (u, v)
}
