pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Calculator for Arabic (1-10) and Roman (I-X) numerals")]
pub struct CliConfig {
    /// Evaluate this expression instead of reading standard input
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
