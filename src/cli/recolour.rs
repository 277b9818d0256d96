//! Recolour command implementation.
//!
//! Reads a grayscale source texture and maps every pixel through the
//! gradient palette by brightness.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PacktexError, Result};
use crate::gen::recolour;
use crate::output::{display_path, Printer};
use crate::render::{read_png, write_png};
use crate::types::{Colour, GradientPalette};

/// Recolour a grayscale item texture through a gradient palette
#[derive(Args, Debug)]
pub struct RecolourArgs {
    /// Source image to recolour
    #[arg(default_value = "iron_ingot.png")]
    pub source: PathBuf,

    /// Output file
    #[arg(
        long,
        short,
        default_value = "catalyst_resourcepack/assets/minecraft/textures/item/catalyst_ingot.png"
    )]
    pub output: PathBuf,

    /// Shadow colour (hex)
    #[arg(long, default_value_t = GradientPalette::CATALYST.shadow)]
    pub shadow: Colour,

    /// Base colour (hex)
    #[arg(long, default_value_t = GradientPalette::CATALYST.base)]
    pub base: Colour,

    /// Highlight colour (hex)
    #[arg(long, default_value_t = GradientPalette::CATALYST.highlight)]
    pub highlight: Colour,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: RecolourArgs, printer: &Printer) -> Result<()> {
    // A missing or unreadable source aborts this run without failing the
    // process.
    if !args.source.exists() {
        printer.error(
            "Missing",
            &format!("{} not found", display_path(&args.source)),
        );
        return Ok(());
    }

    let source = match read_png(&args.source) {
        Ok(grid) => grid,
        Err(e) => {
            printer.error("Failed", &e.to_string());
            return Ok(());
        }
    };

    let palette = GradientPalette {
        shadow: args.shadow,
        base: args.base,
        highlight: args.highlight,
    };

    printer.status(
        "Recolouring",
        &format!(
            "{} ({}x{})",
            display_path(&args.source),
            source.width(),
            source.height()
        ),
    );

    let result = recolour(&source, &palette);

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PacktexError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    match write_png(&result, &args.output, args.scale) {
        Ok(()) => printer.success("Created", &display_path(&args.output)),
        Err(e) => printer.error("Failed", &e.to_string()),
    }

    Ok(())
}
