//! Texture generation pipelines.
//!
//! Two independent pipelines share nothing but the colour types: the
//! recolourer maps an existing image through a gradient palette, and the
//! ore generator synthesizes block faces from scratch. All randomness
//! comes in through an explicitly passed `Rng` so runs can be reproduced
//! from a seed.

mod cluster;
mod ore;
mod recolour;
mod stone;

pub use cluster::{paint_cluster, MAX_CLUSTER_SIZE};
pub use ore::{cluster_range, generate_face_texture, FACES};
pub use recolour::recolour;
pub use stone::generate_stone_base;

/// Edge length of generated block textures, in pixels.
pub const TEXTURE_SIZE: usize = 16;
