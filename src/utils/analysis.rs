//! Topological measurements on binary volumes
//!
//! Used to check that thinning preserved the topology of the input: the
//! number of 26-connected foreground components and the Euler characteristic
//! must both be unchanged.

use crate::volume::{idx3d, VoxelGrid};

/// Count 26-connected foreground components
pub fn count_components<G: VoxelGrid + ?Sized>(grid: &G) -> usize {
    let (nx, ny, nz) = (grid.width(), grid.height(), grid.depth());
    let mut visited = vec![false; nx * ny * nz];
    let mut stack: Vec<(i64, i64, i64)> = Vec::new();
    let mut components = 0;

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let idx = idx3d(i, j, k, nx, ny);
                if visited[idx] || grid.get(i as i64, j as i64, k as i64) != 1 {
                    continue;
                }

                components += 1;
                visited[idx] = true;
                stack.push((i as i64, j as i64, k as i64));

                while let Some((x, y, z)) = stack.pop() {
                    for dz in -1..=1 {
                        for dy in -1..=1 {
                            for dx in -1..=1 {
                                let (px, py, pz) = (x + dx, y + dy, z + dz);
                                if grid.get(px, py, pz) != 1 {
                                    continue;
                                }
                                let n_idx = idx3d(px as usize, py as usize, pz as usize, nx, ny);
                                if !visited[n_idx] {
                                    visited[n_idx] = true;
                                    stack.push((px, py, pz));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    components
}

/// Euler characteristic of the foreground as a union of closed unit cubes
///
/// Computed as V - E + F - C over the cubical complex, which matches
/// 26-connectivity for the foreground. A solid ball gives 1, a solid torus 0
/// and a hollow sphere 2.
pub fn euler_characteristic<G: VoxelGrid + ?Sized>(grid: &G) -> i64 {
    let fg = |x: i64, y: i64, z: i64| grid.get(x, y, z) == 1;
    let (nx, ny, nz) = (grid.width() as i64, grid.height() as i64, grid.depth() as i64);

    let (mut vertices, mut edges, mut faces, mut cubes) = (0i64, 0i64, 0i64, 0i64);

    // Lattice point (x, y, z) is the lower corner of voxel (x, y, z)
    for z in 0..=nz {
        for y in 0..=ny {
            for x in 0..=nx {
                if (0..8).any(|c| fg(x - (c & 1), y - ((c >> 1) & 1), z - ((c >> 2) & 1))) {
                    vertices += 1;
                }

                // Edges along x, y and z starting at this lattice point
                if (0..4).any(|c| fg(x, y - (c & 1), z - ((c >> 1) & 1))) {
                    edges += 1;
                }
                if (0..4).any(|c| fg(x - (c & 1), y, z - ((c >> 1) & 1))) {
                    edges += 1;
                }
                if (0..4).any(|c| fg(x - (c & 1), y - ((c >> 1) & 1), z)) {
                    edges += 1;
                }

                // Faces normal to x, y and z
                if fg(x, y, z) || fg(x - 1, y, z) {
                    faces += 1;
                }
                if fg(x, y, z) || fg(x, y - 1, z) {
                    faces += 1;
                }
                if fg(x, y, z) || fg(x, y, z - 1) {
                    faces += 1;
                }

                if fg(x, y, z) {
                    cubes += 1;
                }
            }
        }
    }

    vertices - edges + faces - cubes
}
