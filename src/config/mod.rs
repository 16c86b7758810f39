pub mod cli;
pub mod links;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "map-props")]
#[command(about = "Derive display properties and deep links for a georeferenced map")]
pub struct CliConfig {
    /// Map record as JSON
    #[arg(long)]
    pub map: PathBuf,

    /// GeoJSON Polygon (or Feature) with the map's footprint
    #[arg(long)]
    pub polygon: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference time for "time ago" (RFC 3339) instead of the system clock
    #[arg(long)]
    pub now: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
