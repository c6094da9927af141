//! Common test utilities for skeleton-core integration tests

#![allow(dead_code)] // Not all test files use all functions

use skeleton_core::thinning::Neighborhood;
use skeleton_core::utils::shapes::box_mask;
use skeleton_core::Volume;

/// Neighborhood index to (dx, dy, dz) offsets in 0..3
fn offsets(p: usize) -> (i32, i32, i32) {
    ((p % 3) as i32, ((p / 3) % 3) as i32, (p / 9) as i32)
}

/// Count 26-connected components among the 26 neighbors of the center
///
/// Plain depth-first search over all neighbor pairs, independent of the
/// octant tables used by the library.
pub fn brute_force_components(n: &Neighborhood) -> usize {
    let cells: Vec<usize> = (0..27).filter(|&p| p != 13 && n[p] == 1).collect();
    let mut seen = vec![false; 27];
    let mut components = 0;

    for &start in &cells {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        let mut stack = vec![start];

        while let Some(a) = stack.pop() {
            let (ax, ay, az) = offsets(a);
            for &b in &cells {
                if seen[b] {
                    continue;
                }
                let (bx, by, bz) = offsets(b);
                let chebyshev = (ax - bx).abs().max((ay - by).abs()).max((az - bz).abs());
                if chebyshev == 1 {
                    seen[b] = true;
                    stack.push(b);
                }
            }
        }
    }

    components
}

/// Build a neighborhood from a 26-bit occupancy mask (center set)
pub fn neighborhood_from_bits(bits: u32) -> Neighborhood {
    let mut n = [0u8; 27];
    n[13] = 1;
    for cell in 0..26 {
        if bits & (1 << cell) != 0 {
            let p = if cell < 13 { cell } else { cell + 1 };
            n[p] = 1;
        }
    }
    n
}

/// Solid n×n×n cube with `pad` voxels of background on every side
pub fn solid_cube(n: usize, pad: usize) -> Volume {
    let size = n + 2 * pad;
    let mask = box_mask(size, size, size, (pad, pad, pad), (pad + n, pad + n, pad + n));
    Volume::from_vec(mask, size, size, size).unwrap()
}

/// Coordinates of all foreground voxels
pub fn foreground(vol: &Volume) -> Vec<(usize, usize, usize)> {
    let (nx, ny, nz) = vol.dims();
    let mut out = Vec::new();
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                if vol.as_slice()[i + j * nx + k * nx * ny] == 1 {
                    out.push((i, j, k));
                }
            }
        }
    }
    out
}

/// Voxels of `vol` with exactly one foreground neighbor
pub fn endpoints(vol: &Volume) -> Vec<(usize, usize, usize)> {
    use skeleton_core::thinning::is_endpoint;
    foreground(vol)
        .into_iter()
        .filter(|&(i, j, k)| is_endpoint(vol, i as i64, j as i64, k as i64))
        .collect()
}
