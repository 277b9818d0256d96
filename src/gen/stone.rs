//! Stone base texture generation.
//!
//! Builds a mottled 16x16 stone texture in three passes: Voronoi patches
//! seeded with random palette colours, per-pixel noise to break up the
//! patch edges, and a few dark pockets.

use rand::Rng;

use crate::render::PixelGrid;
use crate::types::StonePalette;

use super::TEXTURE_SIZE;

/// Number of Voronoi seed points.
const SEED_COUNT: usize = 8;

/// Per-pixel chance of overwriting a cell with a fresh palette colour.
const NOISE_CHANCE: f64 = 0.15;

/// Generate a stone base texture.
///
/// Every pixel of the result is one of the palette colours, fully opaque.
pub fn generate_stone_base<R: Rng>(rng: &mut R, palette: &StonePalette) -> PixelGrid {
    let mut grid = PixelGrid::new(TEXTURE_SIZE, TEXTURE_SIZE, palette.darkest());
    let colours = palette.colours();

    // Voronoi patches: each cell takes the colour of its nearest seed.
    let seeds: Vec<((i32, i32), usize)> = (0..SEED_COUNT)
        .map(|_| {
            let x = rng.gen_range(0..TEXTURE_SIZE as i32);
            let y = rng.gen_range(0..TEXTURE_SIZE as i32);
            ((x, y), rng.gen_range(0..colours.len()))
        })
        .collect();

    for y in 0..TEXTURE_SIZE {
        for x in 0..TEXTURE_SIZE {
            let mut best_dist = i32::MAX;
            let mut best = 0;
            // Strict comparison: the first seed at minimal distance wins.
            for &((sx, sy), colour) in &seeds {
                let dx = x as i32 - sx;
                let dy = y as i32 - sy;
                let dist = dx * dx + dy * dy;
                if dist < best_dist {
                    best_dist = dist;
                    best = colour;
                }
            }
            grid.set(x, y, colours[best]);
        }
    }

    // Noise to break the patch edges.
    for y in 0..TEXTURE_SIZE {
        for x in 0..TEXTURE_SIZE {
            if rng.gen_bool(NOISE_CHANCE) {
                grid.set(x, y, colours[rng.gen_range(0..colours.len())]);
            }
        }
    }

    // Dark pockets: an interior cell plus one adjacent cell, darkest colour.
    let pockets = rng.gen_range(3..=5);
    for _ in 0..pockets {
        let px = rng.gen_range(1..TEXTURE_SIZE as i32 - 1);
        let py = rng.gen_range(1..TEXTURE_SIZE as i32 - 1);
        grid.set(px as usize, py as usize, palette.darkest());

        let nx = px + rng.gen_range(-1..=1);
        let ny = py + rng.gen_range(-1..=1);
        if grid.in_bounds(nx, ny) {
            grid.set(nx as usize, ny as usize, palette.darkest());
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate_stone_base(&mut rng, &StonePalette::DEEPSLATE);
        assert_eq!(grid.size(), (TEXTURE_SIZE, TEXTURE_SIZE));
    }

    #[test]
    fn test_every_pixel_from_palette() {
        let palette = StonePalette::DEEPSLATE;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_stone_base(&mut rng, &palette);
            for row in grid.pixels() {
                for &colour in row {
                    assert!(palette.contains(colour), "off-palette colour {}", colour);
                    assert!(colour.is_opaque());
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_texture() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_stone_base(&mut a, &StonePalette::DEEPSLATE),
            generate_stone_base(&mut b, &StonePalette::DEEPSLATE)
        );
    }

    #[test]
    fn test_textures_vary_across_seeds() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(
            generate_stone_base(&mut a, &StonePalette::DEEPSLATE),
            generate_stone_base(&mut b, &StonePalette::DEEPSLATE)
        );
    }
}
