//! Ore cluster painting.
//!
//! Grows one connected random-walk cluster onto a stone base and colours
//! it from the ore palette. A shared occupied set keeps clusters on the
//! same face from overlapping.

use std::collections::HashSet;

use rand::Rng;

use crate::render::PixelGrid;
use crate::types::OrePalette;

/// Attempts to find an unoccupied starting position before giving up.
const START_ATTEMPTS: usize = 20;

/// Consecutive rejected growth proposals before the walk gives up.
/// A saturated 3x3 neighbourhood can otherwise starve the walk forever.
const GROWTH_STALL_LIMIT: usize = 256;

/// Default maximum cluster size.
pub const MAX_CLUSTER_SIZE: usize = 6;

/// Chance that a cluster pixel is painted with the shadow colour.
const SHADOW_CHANCE: f64 = 0.3;

/// Roll above which a pixel becomes a highlight (capped at 2 per cluster).
const HIGHLIGHT_THRESHOLD: f64 = 0.85;

/// Chance that a highlight pixel is the rare sparkle colour.
const SPARKLE_CHANCE: f64 = 0.05;

/// Paint one ore cluster onto the grid.
///
/// Positions already in `occupied` are never reused; every painted pixel
/// is added to it. Returns the number of pixels painted. Failing to find
/// a free starting position within the attempt limit is a normal outcome
/// on a dense face: the cluster is skipped and 0 is returned with no
/// mutation.
pub fn paint_cluster<R: Rng>(
    grid: &mut PixelGrid,
    occupied: &mut HashSet<(usize, usize)>,
    rng: &mut R,
    palette: &OrePalette,
    max_size: usize,
) -> usize {
    let mut start = None;
    for _ in 0..START_ATTEMPTS {
        let candidate = (
            rng.gen_range(0..grid.width()),
            rng.gen_range(0..grid.height()),
        );
        if !occupied.contains(&candidate) {
            start = Some(candidate);
            break;
        }
    }
    let Some(start) = start else {
        return 0;
    };

    let mut members = vec![start];
    occupied.insert(start);

    let target = rng.gen_range(2..=max_size);
    let mut stalled = 0;

    while members.len() < target && stalled < GROWTH_STALL_LIMIT {
        let (px, py) = members[rng.gen_range(0..members.len())];
        let nx = px as i32 + rng.gen_range(-1..=1);
        let ny = py as i32 + rng.gen_range(-1..=1);

        if grid.in_bounds(nx, ny) && !occupied.contains(&(nx as usize, ny as usize)) {
            let next = (nx as usize, ny as usize);
            members.push(next);
            occupied.insert(next);
            stalled = 0;
        } else {
            stalled += 1;
        }
    }

    // Colour the cluster: mostly base, ~30% shadow, at most two highlights.
    let mut highlights = 0;
    for &(x, y) in &members {
        let roll: f64 = rng.gen();
        let colour = if roll < SHADOW_CHANCE {
            palette.shadow
        } else if roll > HIGHLIGHT_THRESHOLD && highlights < 2 {
            highlights += 1;
            if rng.gen_bool(SPARKLE_CHANCE) {
                palette.sparkle
            } else {
                palette.light
            }
        } else {
            palette.base
        };
        grid.set(x, y, colour);
    }

    members.len()
}
