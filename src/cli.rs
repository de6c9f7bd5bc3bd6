//! Command-line argument parsing for the console driver
//!
//! Supports:
//! - A fixed random seed for reproducible grids
//! - An alternate config file
//! - Reading the command script from a file instead of stdin
//! - JSON snapshot output
//! - Writing the effective config back to disk

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;

/// Drive an impact grid session from a command script
#[derive(Parser, Debug, Default)]
#[command(name = "impactgrid", version, about = "Change point × impact viewpoint grid")]
pub struct CliArgs {
    /// Random seed (overrides the config file)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read commands from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print the final state as a JSON snapshot
    #[arg(long)]
    pub json: bool,

    /// Save the effective config (after --seed) to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// Where the command script comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptInput {
    Stdin,
    File(PathBuf),
}

/// How the final state is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid settings with CLI overrides applied
    pub grid: GridConfig,
    pub input: ScriptInput,
    pub output: OutputFormat,
    /// Explicit config file, if `--config` was given
    pub config_path: Option<PathBuf>,
    pub save_config: bool,
}

impl RunConfig {
    /// Write the grid config to `--config`, or the default location
    pub fn save_grid_config(&self) -> Result<(), String> {
        match &self.config_path {
            Some(path) => self.grid.save_to(path),
            None => self.grid.save(),
        }
    }
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    ///
    /// Loads the grid config from `--config` (or the default location) and
    /// applies `--seed` on top of it.
    pub fn into_config(self) -> RunConfig {
        let mut grid = match &self.config {
            Some(path) => GridConfig::load_from(path),
            None => GridConfig::load(),
        };
        if let Some(seed) = self.seed {
            grid.seed = Some(seed);
        }

        RunConfig {
            grid,
            input: self.script.map_or(ScriptInput::Stdin, ScriptInput::File),
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            config_path: self.config,
            save_config: self.save_config,
        }
    }
}
