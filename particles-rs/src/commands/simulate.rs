//! Headless simulation command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::ProgressBar;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use tf_math::Vector3;
use tf_particles::{Scene, SimulationConfig};

use crate::utils::{create_progress_bar, format_share, format_vector, property_table};

/// Options for a headless run
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of particles, overriding the configuration
    #[arg(short = 'n', long)]
    pub particles: Option<usize>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    pub frames: u64,

    /// Frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Random seed, overriding the configuration
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summary of the particle state after a run
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    /// Number of particles
    pub particles: usize,
    /// Number of frames advanced
    pub frames: u64,
    /// Total simulated time in seconds
    pub simulated_time: f64,
    /// Smallest coordinate on each axis
    pub bounds_min: Vector3,
    /// Largest coordinate on each axis
    pub bounds_max: Vector3,
    /// Mean particle speed
    pub mean_speed: f32,
    /// Particles at or beyond a wall of the box
    pub outside_box: usize,
    /// Vertices drawn per particle
    pub sphere_vertices: usize,
    /// Indices drawn per particle
    pub sphere_indices: usize,
}

impl SimulationReport {
    /// Summarize the current state of `scene`
    pub fn from_scene(scene: &Scene) -> Self {
        let particles = scene.particles();
        let state = particles.buffers().read();
        let physics = particles.physics();

        let mut bounds_min = Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
        let mut bounds_max = -bounds_min;
        let mut speed_sum = 0.0f64;
        let mut outside_box = 0;

        for i in 0..state.len() {
            let (Some(p), Some(v)) = (state.position(i), state.velocity(i)) else {
                continue;
            };
            bounds_min = Vector3::new(
                bounds_min.x.min(p.x),
                bounds_min.y.min(p.y),
                bounds_min.z.min(p.z),
            );
            bounds_max = Vector3::new(
                bounds_max.x.max(p.x),
                bounds_max.y.max(p.y),
                bounds_max.z.max(p.z),
            );
            speed_sum += f64::from(v.magnitude());
            if !physics.contains(p) {
                outside_box += 1;
            }
        }

        let count = state.len();
        Self {
            particles: count,
            frames: scene.frame_count(),
            simulated_time: scene.simulated_time(),
            bounds_min,
            bounds_max,
            mean_speed: if count == 0 {
                0.0
            } else {
                (speed_sum / count as f64) as f32
            },
            outside_box,
            sphere_vertices: scene.mesh().vertex_count(),
            sphere_indices: scene.mesh().index_count(),
        }
    }
}

pub fn execute(args: SimulateArgs, quiet: bool) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(particles) = args.particles {
        config.particle_count = particles;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut scene = Scene::new(config).context("Failed to set up the simulation")?;
    info!(
        "Running {} particles for {} frames of {:.4}s",
        scene.particles().len(),
        args.frames,
        args.dt
    );

    let pb = if args.json || quiet {
        ProgressBar::hidden()
    } else {
        create_progress_bar(args.frames, "frames")?
    };
    for _ in 0..args.frames {
        scene.advance(args.dt)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = SimulationReport::from_scene(&scene);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", style("Simulation Summary").bold().underlined());
    let table = property_table([
        ("Particles", report.particles.to_string()),
        ("Frames", report.frames.to_string()),
        ("Simulated time", format!("{:.3} s", report.simulated_time)),
        ("Bounds min", format_vector(report.bounds_min)),
        ("Bounds max", format_vector(report.bounds_max)),
        ("Mean speed", format!("{:.4}", report.mean_speed)),
        (
            "Outside box",
            format!(
                "{} ({})",
                report.outside_box,
                format_share(report.outside_box, report.particles)
            ),
        ),
        (
            "Sphere",
            format!(
                "{} vertices, {} indices",
                report.sphere_vertices, report.sphere_indices
            ),
        ),
    ]);
    table.printstd();

    Ok(())
}
