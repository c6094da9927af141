//! Skeletonize a binary NIfTI mask
//!
//! Usage:
//! cargo run --release --example skeletonize_nifti -- <input> <output> [--max-iterations N]
//!
//! Input and output may be .nii or .nii.gz.
//!
//! Set `RUST_LOG=debug` to see per-direction deletion counts.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use skeleton_core::nifti_io::{read_mask_file, save_mask_to_file};
use skeleton_core::utils::analysis::{count_components, euler_characteristic};
use skeleton_core::{thin_with_progress, ThinningParams};

#[derive(Parser)]
struct Cli {
    /// Binary mask to skeletonize (.nii or .nii.gz)
    input: PathBuf,

    /// Where to write the skeleton (.nii or .nii.gz)
    output: PathBuf,

    /// Stop after this many iterations even if not converged
    #[arg(long)]
    max_iterations: Option<usize>,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let total_start = Instant::now();

    let cli = Cli::parse();
    let (input, output) = (cli.input, cli.output);

    // ========================================================================
    // Load mask
    // ========================================================================
    println!("[INFO] Loading {}...", input.display());
    let start = Instant::now();
    let mask = read_mask_file(&input)?;
    let mut volume = mask.volume;

    let (nx, ny, nz) = volume.dims();
    let (vsx, vsy, vsz) = mask.voxel_size;
    println!("[INFO] Loaded in {:.2?}", start.elapsed());
    println!("[INFO] Volume: {}x{}x{}, Voxel: {:.2}x{:.2}x{:.2} mm", nx, ny, nz, vsx, vsy, vsz);

    let foreground = volume.count_foreground();
    let components = count_components(&volume);
    let euler = euler_characteristic(&volume);
    println!(
        "[INFO] Foreground: {} voxels, {} components, Euler characteristic {}",
        foreground, components, euler
    );

    // ========================================================================
    // Thin
    // ========================================================================
    println!("[INFO] Thinning...");
    let start = Instant::now();
    let params = ThinningParams {
        max_iterations: cli.max_iterations,
        ..Default::default()
    };
    let stats = thin_with_progress(&mut volume, &params, |iteration, deleted| {
        println!("[INFO]   Iteration {}: {} voxels deleted so far", iteration, deleted);
    });
    println!(
        "[INFO] Thinning completed in {:.2?} ({} iterations, converged: {})",
        start.elapsed(),
        stats.iterations,
        stats.converged
    );

    let remaining = volume.count_foreground();
    println!(
        "[INFO] Skeleton: {} voxels ({:.2}% of foreground), {} components, Euler characteristic {}",
        remaining,
        100.0 * remaining as f64 / foreground.max(1) as f64,
        count_components(&volume),
        euler_characteristic(&volume)
    );
    println!("[INFO] Deleted per direction (N, S, E, W, U, B): {:?}", stats.deleted_per_direction);

    // ========================================================================
    // Save
    // ========================================================================
    save_mask_to_file(&output, &volume, mask.voxel_size, &mask.affine)?;
    println!("[INFO] Saved {}", output.display());

    println!("\n{}", "=".repeat(60));
    println!("Skeletonization complete in {:.2?}", total_start.elapsed());
    println!("{}", "=".repeat(60));

    Ok(())
}
