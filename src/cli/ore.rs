//! Ore command implementation.
//!
//! Generates one texture per block face. Faces are fully independent: a
//! face that fails to save is reported and the remaining faces are still
//! generated.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PacktexError, Result};
use crate::gen::{cluster_range, generate_face_texture, FACES};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, PixelGrid};

/// Generate ore block face textures
#[derive(Args, Debug)]
pub struct OreArgs {
    /// Output directory
    #[arg(
        long,
        short,
        default_value = "catalyst_resourcepack/assets/minecraft/textures/block"
    )]
    pub output: PathBuf,

    /// Generate only the named face (side, top, or bottom)
    #[arg(long)]
    pub face: Option<String>,

    /// RNG seed for reproducible output (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: OreArgs, printer: &Printer) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => {
            printer.info("Seeding", &seed.to_string());
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let faces: Vec<(String, String)> = match &args.face {
        Some(face) => vec![(face.clone(), filename_for(face))],
        None => FACES
            .iter()
            .map(|&(face, filename)| (face.to_string(), filename.to_string()))
            .collect(),
    };

    let mut written = 0;
    for (face, filename) in &faces {
        let clusters = rng.gen_range(cluster_range(face));
        printer.status(
            "Generating",
            &format!("{} ({})", face, plural(clusters as usize, "cluster", "clusters")),
        );

        let grid = generate_face_texture(&mut rng, clusters);
        let path = args.output.join(filename);

        match save_face(&grid, &path, args.scale) {
            Ok(()) => {
                printer.success("Created", &display_path(&path));
                written += 1;
            }
            Err(e) => printer.error("Failed", &e.to_string()),
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written, "texture", "textures"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

/// Output filename for a face. Unknown faces get `<face>.png`.
fn filename_for(face: &str) -> String {
    FACES
        .iter()
        .find(|&&(name, _)| name == face)
        .map(|&(_, filename)| filename.to_string())
        .unwrap_or_else(|| format!("{}.png", face))
}

/// Create the output directory and write one face texture.
fn save_face(grid: &PixelGrid, path: &Path, scale: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PacktexError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_png(grid, path, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen::TEXTURE_SIZE;
    use crate::render::read_png;
    use crate::types::{OrePalette, StonePalette};
    use tempfile::tempdir;

    fn seeded_args(output: PathBuf) -> OreArgs {
        OreArgs {
            output,
            face: None,
            seed: Some(1234),
            scale: 1,
        }
    }

    #[test]
    fn test_generates_all_three_faces() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("block");

        run(seeded_args(output.clone()), &Printer::new()).unwrap();

        for (_, filename) in FACES {
            let grid = read_png(&output.join(filename)).unwrap();
            assert_eq!(grid.size(), (TEXTURE_SIZE, TEXTURE_SIZE));
        }
    }

    #[test]
    fn test_face_pixels_come_from_known_palettes() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("block");

        run(seeded_args(output.clone()), &Printer::new()).unwrap();

        let stone = StonePalette::DEEPSLATE;
        let ore = OrePalette::CATALYST;
        for (_, filename) in FACES {
            let grid = read_png(&output.join(filename)).unwrap();
            for row in grid.pixels() {
                for &colour in row {
                    assert!(stone.contains(colour) || ore.contains(colour));
                }
            }
        }
    }

    #[test]
    fn test_single_face_filter() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("block");

        let mut args = seeded_args(output.clone());
        args.face = Some("bottom".to_string());
        run(args, &Printer::new()).unwrap();

        assert!(output.join("reinforced_deepslate_bottom.png").exists());
        assert!(!output.join("reinforced_deepslate_side.png").exists());
        assert!(!output.join("reinforced_deepslate_top.png").exists());
    }

    #[test]
    fn test_unknown_face_uses_face_name_as_filename() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("block");

        let mut args = seeded_args(output.clone());
        args.face = Some("east".to_string());
        run(args, &Printer::new()).unwrap();

        assert!(output.join("east.png").exists());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");

        run(seeded_args(first.clone()), &Printer::new()).unwrap();
        run(seeded_args(second.clone()), &Printer::new()).unwrap();

        for (_, filename) in FACES {
            assert_eq!(
                read_png(&first.join(filename)).unwrap(),
                read_png(&second.join(filename)).unwrap()
            );
        }
    }

    #[test]
    fn test_save_failure_does_not_abort_run() {
        let dir = tempdir().unwrap();
        // A file where the output directory should be makes every save fail.
        let output = dir.path().join("blocked");
        fs::write(&output, b"in the way").unwrap();

        run(seeded_args(output), &Printer::new()).unwrap();
    }
}
