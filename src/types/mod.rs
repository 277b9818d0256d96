//! Core domain types for packtex.
//!
//! This module contains the fundamental types used throughout the pipelines:
//! - `Colour` - RGBA colour values
//! - `GradientPalette`, `OrePalette`, `StonePalette` - fixed named palettes

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{GradientPalette, OrePalette, StonePalette};
