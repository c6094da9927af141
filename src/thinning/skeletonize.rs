//! Flat-array skeletonization
//!
//! Binarizes an arbitrary volume, thins it and returns the skeleton as a new
//! mask, leaving the input untouched.

use super::driver::{thin_with_progress, ThinningParams, ThinningStats};
use crate::volume::Volume;

/// Skeletonize a volume
///
/// # Arguments
/// * `data` - Input volume (nx * ny * nz), any non-zero value is foreground
/// * `nx`, `ny`, `nz` - Volume dimensions
/// * `params` - Thinning parameters
///
/// # Returns
/// Binary skeleton mask (1 = skeleton) and run statistics
pub fn skeletonize(
    data: &[f64],
    nx: usize, ny: usize, nz: usize,
    params: &ThinningParams,
) -> Result<(Vec<u8>, ThinningStats), String> {
    skeletonize_with_progress(data, nx, ny, nz, params, |_, _| {})
}

/// Skeletonize with progress callback
///
/// Same as `skeletonize` but calls `progress_callback(iteration, deleted)`
/// after each full iteration.
pub fn skeletonize_with_progress<F>(
    data: &[f64],
    nx: usize, ny: usize, nz: usize,
    params: &ThinningParams,
    progress_callback: F,
) -> Result<(Vec<u8>, ThinningStats), String>
where
    F: FnMut(usize, usize),
{
    let mut volume = Volume::from_values(data, nx, ny, nz)?;
    let stats = thin_with_progress(&mut volume, params, progress_callback);
    Ok((volume.into_vec(), stats))
}

/// Simple wrapper with default parameters
pub fn skeletonize_default(
    data: &[f64],
    nx: usize, ny: usize, nz: usize,
) -> Result<Vec<u8>, String> {
    skeletonize(data, nx, ny, nz, &ThinningParams::default()).map(|(mask, _)| mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeletonize_binarizes_input() {
        // A rod of arbitrary intensities along x
        let (nx, ny, nz) = (7, 3, 3);
        let mut data = vec![0.0f64; nx * ny * nz];
        for x in 1..6 {
            data[x + nx + nx * ny] = 0.25 * x as f64;
        }

        let mask = skeletonize_default(&data, nx, ny, nz).unwrap();
        assert_eq!(mask.len(), data.len());
        for x in 1..6 {
            assert_eq!(mask[x + nx + nx * ny], 1);
        }
        assert_eq!(mask.iter().map(|&v| v as usize).sum::<usize>(), 5);
    }

    #[test]
    fn test_skeletonize_dimension_mismatch() {
        let result = skeletonize_default(&[1.0; 10], 2, 2, 2);
        assert!(result.is_err(), "Mismatched dimensions should error");
    }

    #[test]
    fn test_skeletonize_with_progress_reports() {
        let data = vec![1.0f64; 125];
        let mut last = (0, 0);
        let (mask, stats) = skeletonize_with_progress(
            &data, 5, 5, 5,
            &ThinningParams::default(),
            |it, deleted| last = (it, deleted),
        ).unwrap();

        assert_eq!(last, (stats.iterations, stats.deleted));
        assert_eq!(mask.iter().filter(|&&v| v == 1).count(), 125 - stats.deleted);
        assert!(stats.deleted > 0);
    }
}
