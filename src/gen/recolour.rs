//! Brightness-based palette recolouring.
//!
//! Maps every source pixel onto a two-segment gradient: darker pixels fall
//! on the shadow-to-base segment, brighter pixels on base-to-highlight.
//! Alpha passes through untouched, so item silhouettes survive the remap.

use crate::render::PixelGrid;
use crate::types::{Colour, GradientPalette};

/// Brightness at which the two gradient segments meet.
const MIDPOINT: f32 = 128.0;

/// Brightness at or below which pixels clamp to the shadow colour.
const SHADOW_FLOOR: f32 = 50.0;

/// Brightness at or above which pixels clamp to the highlight colour.
const HIGHLIGHT_CEILING: f32 = 230.0;

/// Recolour a source grid through a gradient palette.
///
/// The output has the same dimensions as the source. Fully transparent
/// pixels come out as transparent black; every other pixel keeps its alpha.
pub fn recolour(source: &PixelGrid, palette: &GradientPalette) -> PixelGrid {
    let mut out = PixelGrid::new(source.width(), source.height(), Colour::TRANSPARENT);

    for (y, row) in source.pixels().iter().enumerate() {
        for (x, &pixel) in row.iter().enumerate() {
            if pixel.is_transparent() {
                continue;
            }

            let brightness = pixel.brightness();
            let mut mapped = if brightness < MIDPOINT {
                gradient(brightness, SHADOW_FLOOR, MIDPOINT, palette.shadow, palette.base)
            } else {
                gradient(
                    brightness,
                    MIDPOINT,
                    HIGHLIGHT_CEILING,
                    palette.base,
                    palette.highlight,
                )
            };

            mapped.a = pixel.a;
            out.set(x, y, mapped);
        }
    }

    out
}

/// Interpolate between two colours by the position of `value` within
/// `min..max`, clamped to the endpoints.
fn gradient(value: f32, min: f32, max: f32, start: Colour, end: Colour) -> Colour {
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    start.lerp(end, t)
}
