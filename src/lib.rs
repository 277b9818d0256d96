//! packtex - Procedural resource pack texture generator
//!
//! A library for generating small pixel-art textures for game resource
//! packs: brightness-based recolouring of existing item textures, and
//! from-scratch synthesis of ore block faces.

pub mod cli;
pub mod error;
pub mod gen;
pub mod output;
pub mod render;
pub mod types;

pub use error::{PacktexError, Result};
pub use gen::{
    cluster_range, generate_face_texture, generate_stone_base, paint_cluster, recolour,
    FACES, MAX_CLUSTER_SIZE, TEXTURE_SIZE,
};
pub use render::{read_png, write_png, PixelGrid};
pub use types::{Colour, GradientPalette, OrePalette, StonePalette};
