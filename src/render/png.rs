//! PNG input and output for pixel grids.
//!
//! Writes grids to PNG files with optional integer scaling, and reads
//! source images back into grids for recolouring.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PacktexError, Result};
use crate::types::Colour;

use super::PixelGrid;

/// Write a pixel grid to a PNG file.
///
/// # Arguments
///
/// * `grid` - The pixel grid to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(grid: &PixelGrid, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in grid.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| PacktexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Read an image file into a pixel grid, converting to RGBA.
///
/// Any decode failure (truncated file, wrong format, missing codec) is
/// reported uniformly as an image error.
pub fn read_png(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).map_err(|e| PacktexError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to open image: {}", e),
    })?;

    let rgba = img.to_rgba8();
    let rows = rgba
        .rows()
        .map(|row| row.map(|p| Colour::new(p.0[0], p.0[1], p.0[2], p.0[3])).collect())
        .collect();

    Ok(PixelGrid::from_rows(rows))
}
