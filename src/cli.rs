//! Command line interface for the orrery

use clap::Parser;
use std::fmt;

use crate::catalog::{BodyCatalog, CatalogError};
use crate::config::{ConfigError, OrreryConfig};

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be written
    ConfigWrite(String),
    /// Configured rate is not a finite number
    InvalidRate(f32),
    /// Configured body catalog failed validation
    Catalog(CatalogError),
    /// Configured scene settings failed validation
    Config(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigWrite(msg) => write!(f, "Failed to write configuration: {msg}"),
            CliError::InvalidRate(rate) => write!(f, "Invalid simulation rate: {rate}"),
            CliError::Catalog(err) => write!(f, "Invalid body catalog: {err}"),
            CliError::Config(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Catalog(err) => Some(err),
            CliError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        CliError::Catalog(err)
    }
}

/// Orrery - interactive 3D solar system
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Random seed for initial orbit angles
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Global simulation rate in radians per frame (overrides config file)
    #[arg(short = 'r', long, value_name = "RATE", allow_hyphen_values = true)]
    pub rate: Option<f32>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List the configured bodies and exit
    #[arg(long)]
    pub list_bodies: bool,

    /// Write the default configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub write_default_config: Option<String>,
}

/// Handles the --list-bodies flag by printing the catalog
pub fn handle_list_bodies(catalog: &BodyCatalog) {
    println!("Bodies:");
    for (id, body) in catalog.iter() {
        println!(
            "  {id} {:<10} radius {:>6.1}  speed {:>7.4}  size {:>4.1}{}",
            body.name,
            body.orbit_radius,
            body.angular_speed,
            body.visual_size,
            if body.has_rings { "  (rings)" } else { "" }
        );
    }
}

/// Handles the --write-default-config flag
pub fn handle_write_default_config(path: &str) -> Result<(), CliError> {
    OrreryConfig::default()
        .save(path)
        .map_err(|err| CliError::ConfigWrite(err.to_string()))?;
    println!("Wrote default configuration to: {path}");
    Ok(())
}

/// Loads configuration from file or defaults, applies command-line overrides,
/// then validates the scene settings and the body catalog
pub fn load_and_apply_config(args: &Args) -> Result<(OrreryConfig, BodyCatalog), CliError> {
    let config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        OrreryConfig::load_or_default(config_path)
    } else {
        OrreryConfig::load_from_user_config()
    };

    apply_overrides(config, args)
}

/// Applies command-line overrides to an already loaded configuration, then
/// validates the scene settings and the body catalog
pub fn apply_overrides(
    mut config: OrreryConfig,
    args: &Args,
) -> Result<(OrreryConfig, BodyCatalog), CliError> {
    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.simulation.initial_seed = Some(seed);
    }

    if let Some(rate) = args.rate {
        if !rate.is_finite() {
            return Err(CliError::InvalidRate(rate));
        }
        println!("Overriding simulation rate to: {rate}");
        config.simulation.global_rate = rate;
    }

    if args.paused {
        config.simulation.start_paused = true;
    }

    config.validate()?;
    let catalog = config.catalog()?;
    Ok((config, catalog))
}
