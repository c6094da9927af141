//! 3x3x3 neighborhoods, endpoints and directional borders

use crate::volume::VoxelGrid;

/// Number of entries in a 3x3x3 neighborhood
pub const NEIGHBORHOOD_SIZE: usize = 27;

/// Index of the center voxel in a [`Neighborhood`]
pub const CENTER: usize = 13;

/// 3x3x3 block around a voxel, index = (dz+1)*9 + (dy+1)*3 + (dx+1)
pub type Neighborhood = [u8; NEIGHBORHOOD_SIZE];

/// Build the 27-voxel neighborhood of (x, y, z), zero outside the grid
pub fn extract<G: VoxelGrid + ?Sized>(grid: &G, x: i64, y: i64, z: i64) -> Neighborhood {
    let mut n = [0u8; NEIGHBORHOOD_SIZE];
    let mut idx = 0;
    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                n[idx] = grid.get(x + dx, y + dy, z + dz);
                idx += 1;
            }
        }
    }
    n
}

/// Number of foreground (== 1) voxels in the neighborhood, center excluded
#[inline]
pub fn foreground_neighbors(n: &Neighborhood) -> usize {
    n.iter()
        .enumerate()
        .filter(|&(i, &v)| i != CENTER && v == 1)
        .count()
}

/// True if the voxel has exactly one foreground neighbor
///
/// Such voxels are the tips of curves and surfaces and are never deleted.
pub fn is_endpoint<G: VoxelGrid + ?Sized>(grid: &G, x: i64, y: i64, z: i64) -> bool {
    foreground_neighbors(&extract(grid, x, y, z)) == 1
}

/// Border direction, in the order the thinning loop visits them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// y - 1
    North,
    /// y + 1
    South,
    /// x + 1
    East,
    /// x - 1
    West,
    /// z + 1
    Up,
    /// z - 1
    Bottom,
}

impl Direction {
    /// Visiting order within one iteration
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Bottom,
    ];

    /// Unit offset (dx, dy, dz) of the neighbor in this direction
    pub const fn offset(self) -> (i64, i64, i64) {
        match self {
            Direction::North => (0, -1, 0),
            Direction::South => (0, 1, 0),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 0, 1),
            Direction::Bottom => (0, 0, -1),
        }
    }

    /// Position in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// True if the neighbor of (x, y, z) in `dir` is background or outside the grid
#[inline]
pub fn is_border<G: VoxelGrid + ?Sized>(grid: &G, x: i64, y: i64, z: i64, dir: Direction) -> bool {
    let (dx, dy, dz) = dir.offset();
    grid.get(x + dx, y + dy, z + dz) == 0
}
