//! Root CLI structure for particles-rs

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "particles-rs")]
#[command(about = "Inspect particle meshes and cameras, and run the particle simulation headless", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sphere mesh operations
    Mesh {
        #[command(subcommand)]
        command: crate::commands::mesh::MeshCommands,
    },

    /// Print the orbit camera position and matrices
    Camera(crate::commands::camera::CameraArgs),

    /// Run the particle simulation without a window
    Simulate(crate::commands::simulate::SimulateArgs),

    /// Print the default simulation configuration
    Config(crate::commands::config::ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
