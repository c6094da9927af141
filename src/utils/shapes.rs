//! Shape mask generation
//!
//! Provides binary masks for simple solids (boxes, spheres, rods, tori) on 3D
//! volumes. Uses Fortran (column-major) ordering to match NIfTI convention:
//! index = x + y*nx + z*nx*ny.

use crate::volume::idx3d;

/// Create a binary sphere mask on a 3D volume
///
/// # Arguments
/// * `nx`, `ny`, `nz` - Volume dimensions
/// * `center` - Sphere center in voxel coordinates
/// * `radius` - Sphere radius in voxels
///
/// # Returns
/// Flattened binary mask of length nx*ny*nz
pub fn sphere_mask(
    nx: usize, ny: usize, nz: usize,
    center: (f64, f64, f64),
    radius: f64,
) -> Vec<u8> {
    let r2 = radius * radius;
    fill_where(nx, ny, nz, |i, j, k| {
        let dx = i - center.0;
        let dy = j - center.1;
        let dz = k - center.2;
        dx * dx + dy * dy + dz * dz <= r2
    })
}

/// Create an axis-aligned box mask covering `min..max` (exclusive) per axis
pub fn box_mask(
    nx: usize, ny: usize, nz: usize,
    min: (usize, usize, usize),
    max: (usize, usize, usize),
) -> Vec<u8> {
    let mut mask = vec![0u8; nx * ny * nz];
    for k in min.2..max.2.min(nz) {
        for j in min.1..max.1.min(ny) {
            for i in min.0..max.0.min(nx) {
                mask[idx3d(i, j, k, nx, ny)] = 1;
            }
        }
    }
    mask
}

/// Create a one-voxel-wide rod along x starting at `start`
pub fn rod_mask(
    nx: usize, ny: usize, nz: usize,
    start: (usize, usize, usize),
    length: usize,
) -> Vec<u8> {
    let (i0, j, k) = start;
    box_mask(nx, ny, nz, (i0, j, k), (i0 + length, j + 1, k + 1))
}

/// Create a solid torus mask with its axis along z
///
/// # Arguments
/// * `center` - Torus center in voxel coordinates
/// * `major_radius` - Distance from the center to the tube center line
/// * `minor_radius` - Tube radius
pub fn torus_mask(
    nx: usize, ny: usize, nz: usize,
    center: (f64, f64, f64),
    major_radius: f64,
    minor_radius: f64,
) -> Vec<u8> {
    let r2 = minor_radius * minor_radius;
    fill_where(nx, ny, nz, |i, j, k| {
        let dx = i - center.0;
        let dy = j - center.1;
        let dz = k - center.2;
        let q = (dx * dx + dy * dy).sqrt() - major_radius;
        q * q + dz * dz <= r2
    })
}

fn fill_where<F>(nx: usize, ny: usize, nz: usize, inside: F) -> Vec<u8>
where
    F: Fn(f64, f64, f64) -> bool,
{
    let mut mask = vec![0u8; nx * ny * nz];
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                if inside(i as f64, j as f64, k as f64) {
                    mask[idx3d(i, j, k, nx, ny)] = 1;
                }
            }
        }
    }
    mask
}
