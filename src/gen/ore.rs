//! Per-face ore texture generation.
//!
//! Each block face gets a fresh stone base and its own run of ore
//! clusters. Side faces are the most visible and carry the densest veins.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::render::PixelGrid;
use crate::types::{OrePalette, StonePalette};

use super::cluster::{paint_cluster, MAX_CLUSTER_SIZE};
use super::stone::generate_stone_base;

/// The block faces and their output filenames.
pub const FACES: [(&str, &str); 3] = [
    ("side", "reinforced_deepslate_side.png"),
    ("top", "reinforced_deepslate_top.png"),
    ("bottom", "reinforced_deepslate_bottom.png"),
];

/// How many clusters a face receives.
///
/// Unrecognised face names get exactly 3.
pub fn cluster_range(face: &str) -> RangeInclusive<u32> {
    match face {
        "side" => 6..=10,
        "top" => 3..=6,
        "bottom" => 2..=4,
        _ => 3..=3,
    }
}

/// Generate one face texture: a stone base with `clusters` ore clusters.
pub fn generate_face_texture<R: Rng>(rng: &mut R, clusters: u32) -> PixelGrid {
    let mut grid = generate_stone_base(rng, &StonePalette::DEEPSLATE);

    // The occupied set is shared across all clusters on this face so veins
    // never overlap.
    let mut occupied = HashSet::new();
    for _ in 0..clusters {
        paint_cluster(
            &mut grid,
            &mut occupied,
            rng,
            &OrePalette::CATALYST,
            MAX_CLUSTER_SIZE,
        );
    }

    grid
}
