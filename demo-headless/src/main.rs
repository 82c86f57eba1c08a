use clap::Parser;
use potential_flow_core::{
    AngleUnit, FlowField, FlowFieldConfig, ScalarKind, UniformFlow,
};

/// Potential flow demo: flow around a (rotating) cylinder
#[derive(Parser, Debug)]
#[command(name = "potential-flow-demo")]
#[command(about = "Cylinder-in-freestream potential flow demo", long_about = None)]
struct Args {
    /// Freestream velocity in m/s
    #[arg(short, long, default_value_t = 10.0)]
    velocity: f64,

    /// Freestream angle in degrees
    #[arg(short, long, default_value_t = 0.0)]
    angle: f64,

    /// Cylinder radius
    #[arg(short, long, default_value_t = 5.0)]
    radius: f64,

    /// Cylinder rotation rate (rad/s); omit for a non-rotating body
    #[arg(long)]
    omega: Option<f64>,

    /// Boundary-condition solver tolerance
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Domain size (square domain)
    #[arg(long, default_value_t = 20.0)]
    size: f64,

    /// Surface pressure sample count
    #[arg(long, default_value_t = 12)]
    surface_samples: usize,

    /// Number of streamlines to trace
    #[arg(long, default_value_t = 5)]
    streamlines: usize,

    /// Streamline timestep
    #[arg(long, default_value_t = 0.001)]
    dt: f64,

    /// Streamline iteration cap
    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,

    /// Thin-wing angle of attack in degrees; replaces the cylinder scenario
    #[arg(long)]
    wing: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut field = FlowField::new(&FlowFieldConfig {
        size: (args.size, args.size),
        center: (0.0, 0.0),
        resolution: None,
    });
    field.add(UniformFlow::new(args.velocity, args.angle, AngleUnit::Degrees));

    if let Some(alpha) = args.wing {
        run_wing(&mut field, alpha)?;
        return Ok(());
    }

    field.add_body(args.radius, 0.0, 0.0, args.omega, args.tolerance)?;
    let body = field.body().expect("body was just calibrated");

    println!("=== Cylinder in freestream ===");
    println!("freestream:       {} m/s at {}°", args.velocity, args.angle);
    println!("radius:           {}", body.radius);
    println!("doublet strength: {:.6}", body.doublet_strength);
    if let Some(gamma) = body.vortex_strength {
        println!("vortex strength:  {gamma:.6}");
    }

    let stagnation = field.evaluate_velocity(-args.radius, 0.0);
    println!(
        "stagnation point velocity: ({:.2e}, {:.2e})",
        stagnation.x, stagnation.y
    );

    println!("\nsurface pressure distribution:");
    for (theta, cp) in field.surface_pressure_coefficient(args.surface_samples)? {
        println!("  θ = {:6.1}°   Cp = {:+.4}", theta.to_degrees(), cp);
    }

    println!("\nstreamlines (seeded on the inflow edge):");
    let half = args.size / 2.0;
    for k in 0..args.streamlines {
        let y = -half + args.size * (k as f64 + 0.5) / args.streamlines as f64;
        let trace = field.trace_streamline(-half + 0.01, y, args.dt, args.max_iterations);
        let last = trace.last().expect("trace always contains the seed");
        println!(
            "  seed ({:6.2}, {:6.2})  ->  {} points, ends at ({:6.2}, {:6.2})",
            -half + 0.01,
            y,
            trace.len(),
            last.x,
            last.y
        );
    }

    let psi = field.sample_scalar_grid(ScalarKind::StreamFunction);
    let masked = psi.valid.iter().filter(|&&ok| !ok).count();
    println!(
        "\nstream function grid: {}x{} samples, {} masked inside the body",
        psi.x_values.len(),
        psi.y_values.len(),
        masked
    );

    Ok(())
}

fn run_wing(field: &mut FlowField, alpha: f64) -> Result<(), Box<dyn std::error::Error>> {
    field.add_wing(alpha)?;
    let cl = field.lift_coefficient(1.0)?;

    println!("=== Thin wing ===");
    println!("angle of attack: {alpha}°");
    println!("lift coefficient: {cl:.4}");
    println!(
        "thin-airfoil reference (2π·sin α): {:.4}",
        std::f64::consts::TAU * alpha.to_radians().sin()
    );
    Ok(())
}
