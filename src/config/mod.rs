pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "trivia-board")]
#[command(about = "Author, import, validate and play 5x5 trivia boards")]
pub struct CliConfig {
    /// Board text file to import
    #[arg(long)]
    pub input: Option<String>,

    /// Validate strictly and set the file as the active game
    #[arg(long)]
    pub play: bool,

    /// Clear every session slot and start fresh
    #[arg(long)]
    pub reset: bool,

    /// Override the session storage directory from config
    #[arg(long)]
    pub store_path: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(store_path) = &self.store_path {
            validate_path("store_path", store_path)?;
        }
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        Ok(())
    }
}
