//! Config command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use tf_particles::SimulationConfig;

/// Output format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Print the default configuration as a starting point for a config file
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub format: ConfigFormat,
}

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = SimulationConfig::default();
    let text = match args.format {
        ConfigFormat::Yaml => config.to_yaml_string()?,
        ConfigFormat::Json => config.to_json_string()?,
    };
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
