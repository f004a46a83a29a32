//! Camera command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use tf_math::{Matrix4, Vector3};
use tf_particles::OrbitCamera;

use crate::utils::format_vector;

/// Orbit camera placement
#[derive(Args, Debug, Clone)]
pub struct CameraArgs {
    /// Orbit angle in degrees, measured from +x towards +z
    #[arg(short, long, default_value_t = -45.0, allow_negative_numbers = true)]
    pub angle: f32,

    /// Horizontal distance from the vertical axis
    #[arg(short, long, default_value_t = 1000.0)]
    pub distance: f32,

    /// Height above the origin
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub height: f32,

    /// Viewport width over height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect: f32,

    /// Print the matrices as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CameraReport {
    eye: Vector3,
    camera: Matrix4,
    view: Matrix4,
    projection: Matrix4,
    view_projection: Matrix4,
}

pub fn execute(args: CameraArgs) -> Result<()> {
    let camera = OrbitCamera {
        angle_degrees: args.angle,
        distance: args.distance,
        height: args.height,
        ..OrbitCamera::default()
    };

    let view = camera
        .view_matrix()
        .context("Camera sits on the vertical axis; use a non-zero distance")?;
    let projection = camera.projection(args.aspect);
    let report = CameraReport {
        eye: camera.eye(),
        camera: camera.camera_matrix(),
        view,
        projection,
        view_projection: view * projection,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", style("Orbit Camera").bold().underlined());
    println!("Eye: {}", style(format_vector(report.eye)).cyan());
    println!(
        "Field of view: {}°  Clip: {} to {}",
        camera.fov_degrees, camera.near, camera.far
    );

    for (title, matrix) in [
        ("Camera (look-at)", &report.camera),
        ("View", &report.view),
        ("Projection", &report.projection),
        ("View-projection", &report.view_projection),
    ] {
        println!("\n{}", style(title).bold());
        println!("{matrix}");
    }

    Ok(())
}
