//! Cylinder Flow Validation Test Suite
//!
//! End-to-end checks of the superposition engine and the boundary-condition
//! solver against classical potential-flow results.
//!
//! # Test Categories
//! 1. Singular-origin sentinel behavior
//! 2. Superposition linearity
//! 3. Vortex circulation recovery
//! 4. Cylinder boundary conditions (non-penetration, rotation rim speed)
//! 5. Surface pressure distribution (Cp = 1 − 4·sin²θ)
//! 6. Streamline integrator termination and determinism
//!
//! # References
//! - Anderson, "Fundamentals of Aerodynamics": elementary flows and the
//!   non-lifting/lifting cylinder
//! - Kutta–Joukowski theorem for the circulation–lift relationship
//!
//! Run with: `cargo test --test cylinder_validation`

use approx::assert_relative_eq;
use potential_flow_core::{
    AngleUnit, CanonicalFlow, Doublet, FlowError, FlowField, FlowFieldConfig, ScalarKind,
    SourceSink, UniformFlow, Vec2, Vortex,
};
use std::f64::consts::{FRAC_PI_2, TAU};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn field(size: (f64, f64)) -> FlowField {
    FlowField::new(&FlowFieldConfig {
        size,
        center: (0.0, 0.0),
        resolution: None,
    })
}

// ─── Singular origins ────────────────────────────────────────────────────────

/// Every singular flow returns the zero sentinel at its own origin, for
/// every capability function
#[test]
fn test_zero_sentinel_at_every_singular_origin() {
    let vortex = Vortex::new(2.0, -1.0, 3.0);
    let source = SourceSink::new(2.0, -1.0, 3.0);
    let doublet = Doublet::new(2.0, -1.0, 3.0);

    assert_eq!(vortex.stream_function(2.0, -1.0), 0.0);
    assert_eq!(vortex.potential_function(2.0, -1.0), 0.0);
    assert_eq!(vortex.velocity(2.0, -1.0), Vec2::zeros());
    assert_eq!(vortex.absolute_velocity(2.0, -1.0), 0.0);

    assert_eq!(source.stream_function(2.0, -1.0), 0.0);
    assert_eq!(source.potential_function(2.0, -1.0), 0.0);
    assert_eq!(source.velocity(2.0, -1.0), Vec2::zeros());

    assert_eq!(doublet.stream_function(2.0, -1.0), 0.0);
    assert_eq!(doublet.potential_function(2.0, -1.0), 0.0);
    assert_eq!(doublet.velocity(2.0, -1.0), Vec2::zeros());
}

// ─── Superposition ───────────────────────────────────────────────────────────

/// Evaluating the union of two disjoint fields equals the sum of evaluating
/// each separately, at any point and for every quantity
#[test]
fn test_superposition_linearity_across_fields() {
    init_tracing();
    let mut a = field((10.0, 10.0));
    a.add(UniformFlow::new(5.0, 15.0, AngleUnit::Degrees));
    a.add(Vortex::new(1.0, 1.0, 2.0));

    let mut b = field((10.0, 10.0));
    b.add(SourceSink::new(-2.0, 0.0, 4.0));
    b.add(Doublet::new(0.0, -3.0, 1.5));

    let mut union = field((10.0, 10.0));
    for element in a.elements().iter().chain(b.elements()) {
        union.add(*element);
    }

    for &(x, y) in &[(0.5, 0.5), (-4.0, 3.0), (2.5, -2.5)] {
        for kind in [
            ScalarKind::StreamFunction,
            ScalarKind::PotentialFunction,
            ScalarKind::AbsoluteVelocity,
        ] {
            assert_relative_eq!(
                union.evaluate_scalar(kind, x, y),
                a.evaluate_scalar(kind, x, y) + b.evaluate_scalar(kind, x, y),
                epsilon = 1e-12
            );
        }
        let summed = a.evaluate_velocity(x, y) + b.evaluate_velocity(x, y);
        let combined = union.evaluate_velocity(x, y);
        assert_relative_eq!(combined.x, summed.x, epsilon = 1e-12);
        assert_relative_eq!(combined.y, summed.y, epsilon = 1e-12);
    }
}

/// A uniform flow samples to the same velocity at every grid point
#[test]
fn test_uniform_flow_translation_invariance() {
    let mut f = field((10.0, 10.0));
    f.add(UniformFlow::new(7.0, 30.0, AngleUnit::Degrees));

    let grid = f.sample_velocity_grid();
    let reference = grid.get(0, 0);
    let (nx, ny) = f.resolution();
    for j in 0..ny {
        for i in 0..nx {
            assert_eq!(grid.get(i, j), reference);
        }
    }
}

// ─── Circulation ─────────────────────────────────────────────────────────────

/// ∮ u_θ·r dθ around a vortex recovers Γ regardless of loop radius
#[test]
fn test_circulation_independent_of_radius() {
    let strength = 12.0;
    let vortex = Vortex::new(0.0, 0.0, strength);
    for &radius in &[0.25, 1.0, 7.5] {
        let n = 1440;
        let mut circulation = 0.0;
        for k in 0..n {
            let theta = TAU * f64::from(k) / f64::from(n);
            let vel = vortex.velocity(radius * theta.cos(), radius * theta.sin());
            let tangent = Vec2::new(-theta.sin(), theta.cos());
            circulation += vel.dot(&tangent) * radius * (TAU / f64::from(n));
        }
        assert_relative_eq!(circulation, strength, max_relative = 1e-9);
    }
}

// ─── Cylinder boundary conditions ────────────────────────────────────────────

/// Non-rotating cylinder: x-velocity at the upstream stagnation point is
/// zero within solver tolerance
#[test]
fn test_cylinder_upstream_stagnation() {
    init_tracing();
    let tolerance = 1e-6;
    let mut f = field((20.0, 20.0));
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(5.0, 0.0, 0.0, None, tolerance).unwrap();

    let vel = f.evaluate_velocity(-5.0, 0.0);
    assert!(vel.x.abs() <= tolerance);
}

/// Rotating cylinder: tangential surface speed at the stagnation point
/// equals the rim speed 2πωR
#[test]
fn test_rotating_cylinder_rim_speed() {
    let omega = 0.4;
    let radius = 3.0;
    let mut f = field((20.0, 20.0));
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(radius, 0.0, 0.0, Some(omega), 1e-9).unwrap();

    let vel = f.evaluate_velocity(-radius, 0.0);
    assert_relative_eq!(vel.y.abs(), TAU * omega * radius, max_relative = 1e-6);
}

/// add_body without a freestream is a configuration error and leaves the
/// primitive collection untouched
#[test]
fn test_add_body_without_freestream_is_all_or_nothing() {
    let mut f = field((10.0, 10.0));
    f.add(Vortex::new(0.0, 0.0, 1.0));
    f.add(SourceSink::new(1.0, 0.0, 1.0));

    let err = f.add_body(2.0, 0.0, 0.0, Some(0.1), 1e-3).unwrap_err();
    assert_eq!(err, FlowError::MissingUniformFlow);
    assert_eq!(f.elements().len(), 2);
    assert!(f.body().is_none());
}

/// The body interior masks grid samples and zeroes point velocities
#[test]
fn test_body_interior_masking() {
    let mut f = FlowField::new(&FlowFieldConfig {
        size: (20.0, 20.0),
        center: (0.0, 0.0),
        resolution: Some((41, 41)),
    });
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(5.0, 0.0, 0.0, None, 1e-6).unwrap();

    assert_eq!(f.evaluate_velocity(0.0, 0.0), Vec2::zeros());

    let grid = f.sample_scalar_grid(ScalarKind::StreamFunction);
    // Center of the grid is the body center
    assert!(!grid.is_valid(20, 20));
    // Far corner is outside the body
    assert!(grid.is_valid(0, 0));
}

// ─── Surface pressure ────────────────────────────────────────────────────────

/// Classical non-rotating cylinder: Cp at the top (θ = 90°) is −3
#[test]
fn test_surface_cp_at_top_is_minus_three() {
    init_tracing();
    let mut f = field((20.0, 20.0));
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(5.0, 0.0, 0.0, None, 1e-9).unwrap();

    let distribution = f.surface_pressure_coefficient(360).unwrap();
    let (theta, cp) = distribution[90];
    assert_relative_eq!(theta, FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(cp, -3.0, max_relative = 0.02);
}

/// Surface Cp integrates to zero net drag (d'Alembert) for the
/// non-rotating cylinder
#[test]
fn test_dalembert_zero_drag() {
    let mut f = field((20.0, 20.0));
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(5.0, 0.0, 0.0, None, 1e-9).unwrap();

    let distribution = f.surface_pressure_coefficient(720).unwrap();
    let drag: f64 = distribution
        .iter()
        .map(|&(theta, cp)| -cp * theta.cos() * (TAU / 720.0))
        .sum();
    assert_relative_eq!(drag, 0.0, epsilon = 1e-9);
}

// ─── Streamlines ─────────────────────────────────────────────────────────────

/// Streamlines around the cylinder never enter the body
#[test]
fn test_streamline_avoids_cylinder() {
    let mut f = field((20.0, 20.0));
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(5.0, 0.0, 0.0, None, 1e-6).unwrap();

    let trace = f.trace_streamline(-9.5, 0.5, 0.001, 5000);
    for point in &trace {
        let r = point.x.hypot(point.y);
        assert!(
            r >= 5.0 - 1e-3,
            "streamline entered the body at ({}, {})",
            point.x,
            point.y
        );
    }
}

/// Two identical traces on an unchanged field are bit-identical
#[test]
fn test_streamline_determinism() {
    let mut f = field((20.0, 20.0));
    f.add(UniformFlow::new(10.0, 0.0, AngleUnit::Degrees));
    f.add_body(5.0, 0.0, 0.0, None, 1e-6).unwrap();

    let a = f.trace_streamline(-9.0, 1.0, 0.005, 1000);
    let b = f.trace_streamline(-9.0, 1.0, 0.005, 1000);
    assert_eq!(a, b);
}

/// Seed outside the bounds and a zero iteration cap both return just the seed
#[test]
fn test_streamline_degenerate_traces() {
    let mut f = field((10.0, 10.0));
    f.add(UniformFlow::new(1.0, 0.0, AngleUnit::Degrees));

    assert_eq!(f.trace_streamline(50.0, 0.0, 0.1, 100).len(), 1);
    assert_eq!(f.trace_streamline(0.0, 0.0, 0.1, 0).len(), 1);
}
