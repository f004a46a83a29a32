//! Sphere mesh command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use log::info;
use std::fs;
use std::path::PathBuf;

use tf_mesh::{SphereMesh, SphereParams};

use crate::utils::{format_bytes, property_table};

#[derive(Subcommand)]
pub enum MeshCommands {
    /// Show vertex, index and buffer statistics for a sphere
    Info {
        #[command(flatten)]
        sphere: SphereArgs,
    },

    /// Write a sphere mesh as JSON
    Export {
        #[command(flatten)]
        sphere: SphereArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// Sphere generator parameters
#[derive(Args, Debug, Clone)]
pub struct SphereArgs {
    /// Sphere radius
    #[arg(short, long, default_value_t = 5.0)]
    pub radius: f32,

    /// Latitude bands from pole to pole
    #[arg(short, long, default_value_t = 16)]
    pub theta: u32,

    /// Longitude slices around the vertical axis
    #[arg(short, long, default_value_t = 16)]
    pub phi: u32,
}

impl SphereArgs {
    fn build(&self) -> Result<SphereMesh> {
        SphereMesh::new(SphereParams::new(self.radius, self.theta, self.phi)).with_context(|| {
            format!(
                "Failed to build sphere (radius {}, theta {}, phi {})",
                self.radius, self.theta, self.phi
            )
        })
    }
}

pub fn execute(cmd: MeshCommands) -> Result<()> {
    match cmd {
        MeshCommands::Info { sphere } => handle_info(&sphere),
        MeshCommands::Export {
            sphere,
            output,
            pretty,
        } => handle_export(&sphere, output, pretty),
    }
}

fn handle_info(args: &SphereArgs) -> Result<()> {
    let mesh = args.build()?;
    let indices = mesh.indices();
    let float_bytes = std::mem::size_of::<f32>() as u64;

    println!("\n{}", style("Sphere Mesh").bold().underlined());
    println!(
        "Radius: {}  Theta segments: {}  Phi segments: {}",
        style(args.radius).cyan(),
        style(args.theta).cyan(),
        style(args.phi).cyan()
    );

    let table = property_table([
        ("Vertices", mesh.vertex_count().to_string()),
        ("Indices", mesh.index_count().to_string()),
        ("Triangles", mesh.triangle_count().to_string()),
        ("Index format", indices.format().to_string()),
        (
            "Position buffer",
            format_bytes(mesh.positions().len() as u64 * float_bytes),
        ),
        (
            "Normal buffer",
            format_bytes(mesh.normals().len() as u64 * float_bytes),
        ),
        ("Index buffer", format_bytes(indices.byte_size() as u64)),
        ("Total", format_bytes(mesh.byte_size() as u64)),
    ]);
    println!();
    table.printstd();

    Ok(())
}

fn handle_export(args: &SphereArgs, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let mesh = args.build()?;
    let json = if pretty {
        serde_json::to_string_pretty(&mesh)?
    } else {
        serde_json::to_string(&mesh)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write mesh to {}", path.display()))?;
            info!(
                "Wrote {} vertices and {} indices to {}",
                mesh.vertex_count(),
                mesh.index_count(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
