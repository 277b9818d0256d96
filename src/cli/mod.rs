pub mod completions;
pub mod ore;
pub mod recolour;

use clap::{Parser, Subcommand};

/// packtex - Procedural resource pack texture generator
#[derive(Parser, Debug)]
#[command(name = "packtex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recolour a grayscale item texture through a gradient palette
    Recolour(recolour::RecolourArgs),

    /// Generate ore block face textures
    Ore(ore::OreArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
