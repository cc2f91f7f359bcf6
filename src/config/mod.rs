pub mod fleet_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "car-service")]
#[command(about = "Check which vehicles in a fleet are due for service")]
pub struct CliConfig {
    /// Path to the fleet TOML file
    #[arg(short, long, default_value = "fleet.toml")]
    pub config: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
