//! Pixel grids and PNG persistence for packtex.

mod grid;
mod png;

pub use grid::PixelGrid;
pub use png::{read_png, write_png};
