//! Simple point test
//!
//! A point is simple if, after removing it, its 26 neighbors still form at
//! most one 26-connected foreground component. Components are found by
//! labeling the neighbors octant by octant: two neighbors are adjacent iff
//! they lie in a common 2x2x2 octant around the center, which is exactly
//! 26-adjacency restricted to the neighborhood.

use super::neighborhood::{Neighborhood, CENTER};

/// Neighborhood with the center removed
pub type Cube = [u8; 26];

/// Cube cells of each octant, octant bit 0 = +x, bit 1 = +y, bit 2 = +z
pub const OCTANT_CELLS: [[usize; 7]; 8] = [
    [0, 1, 3, 4, 9, 10, 12],
    [1, 2, 4, 5, 10, 11, 13],
    [3, 4, 6, 7, 12, 14, 15],
    [4, 5, 7, 8, 13, 15, 16],
    [9, 10, 12, 17, 18, 20, 21],
    [10, 11, 13, 18, 19, 21, 22],
    [12, 14, 15, 20, 21, 23, 24],
    [13, 15, 16, 21, 22, 24, 25],
];

/// Bitmask of the octants containing each cube cell
pub const CELL_OCTANTS: [u8; 26] = build_cell_octants();

const fn build_cell_octants() -> [u8; 26] {
    let mut masks = [0u8; 26];
    let mut o = 0;
    while o < 8 {
        let mut k = 0;
        while k < 7 {
            masks[OCTANT_CELLS[o][k]] |= 1 << o;
            k += 1;
        }
        o += 1;
    }
    masks
}

/// Copy the neighborhood into a 26-cell cube, dropping the center
#[inline]
pub fn to_cube(n: &Neighborhood) -> Cube {
    let mut cube = [0u8; 26];
    cube[..CENTER].copy_from_slice(&n[..CENTER]);
    cube[CENTER..].copy_from_slice(&n[CENTER + 1..]);
    cube
}

/// Assign `label` to every 1-cell reachable from `start_octant`
fn label_from_octant(cube: &mut Cube, start_octant: usize, label: u8) {
    // An octant only needs visiting once per label: after the visit none of
    // its cells is still 1.
    let mut queued: u8 = 1 << start_octant;
    let mut stack = [0usize; 8];
    stack[0] = start_octant;
    let mut len = 1;

    while len > 0 {
        len -= 1;
        let octant = stack[len];
        for &cell in &OCTANT_CELLS[octant] {
            if cube[cell] != 1 {
                continue;
            }
            cube[cell] = label;
            let mut fresh = CELL_OCTANTS[cell] & !queued;
            queued |= fresh;
            while fresh != 0 {
                stack[len] = fresh.trailing_zeros() as usize;
                len += 1;
                fresh &= fresh - 1;
            }
        }
    }
}

/// Count the 26-connected components among the neighbors, stopping at `limit`
pub fn count_components(n: &Neighborhood, limit: usize) -> usize {
    let mut cube = to_cube(n);
    let mut label = 2u8;
    let mut components = 0;

    for i in 0..cube.len() {
        if cube[i] != 1 {
            continue;
        }
        let octant = CELL_OCTANTS[i].trailing_zeros() as usize;
        label_from_octant(&mut cube, octant, label);
        label += 1;
        components += 1;
        if components >= limit {
            break;
        }
    }
    components
}

/// True if deleting the center keeps its neighbors in a single component
///
/// A point with no foreground neighbors counts as simple here; the Euler
/// test is what rejects isolated points.
#[inline]
pub fn is_simple(n: &Neighborhood) -> bool {
    count_components(n, 2) < 2
}
