//! Euler characteristic invariance
//!
//! The change in Euler characteristic caused by deleting the center voxel is
//! the sum of per-octant contributions. Each octant is one of the eight 2x2x2
//! sub-cubes of the neighborhood that contain the center; its seven other
//! voxels form an index into [`EULER_LUT`].

use super::neighborhood::Neighborhood;

/// Signed Euler contribution of an octant, stored for odd indices only
///
/// Entry k is the LUT value for index 2k + 1.
const EULER_ODD: [i8; 128] = [
     1, -1, -1,  1, -3, -1, -1,  1, -1,  1,  1, -1,  3,  1,  1, -1,
    -3, -1,  3,  1,  1, -1,  3,  1, -1,  1,  1, -1,  3,  1,  1, -1,
    -3,  3, -1,  1,  1,  3, -1,  1, -1,  1,  1, -1,  3,  1,  1, -1,
     1,  3,  3,  1,  5,  3,  3,  1, -1,  1,  1, -1,  3,  1,  1, -1,
    -7, -1, -1,  1, -3, -1, -1,  1, -1,  1,  1, -1,  3,  1,  1, -1,
    -3, -1,  3,  1,  1, -1,  3,  1, -1,  1,  1, -1,  3,  1,  1, -1,
    -3,  3, -1,  1,  1,  3, -1,  1, -1,  1,  1, -1,  3,  1,  1, -1,
     1,  3,  3,  1,  5,  3,  3,  1, -1,  1,  1, -1,  3,  1,  1, -1,
];

const fn build_euler_lut() -> [i8; 256] {
    let mut lut = [0i8; 256];
    let mut k = 0;
    while k < 128 {
        lut[2 * k + 1] = EULER_ODD[k];
        k += 1;
    }
    lut
}

/// Euler characteristic lookup table indexed by an octant pattern
///
/// Bit 0 of the index is the center voxel and is always set, so even entries
/// are never read and hold 0.
pub static EULER_LUT: [i8; 256] = build_euler_lut();

/// Neighborhood positions read for each octant, in bit-weight order 128 → 2
///
/// Octant order: SWU, SEU, NWU, NEU, SWB, SEB, NWB, NEB.
pub const OCTANT_POSITIONS: [[usize; 7]; 8] = [
    [24, 25, 15, 16, 21, 22, 12], // SWU
    [26, 23, 17, 14, 25, 22, 16], // SEU
    [18, 21, 9, 12, 19, 22, 10],  // NWU
    [20, 23, 19, 22, 11, 14, 10], // NEU
    [6, 15, 7, 16, 3, 12, 4],     // SWB
    [8, 7, 17, 16, 5, 4, 14],     // SEB
    [0, 9, 3, 12, 1, 10, 4],      // NWB
    [2, 1, 11, 10, 5, 4, 14],     // NEB
];

/// 8-bit pattern of one octant, bit 0 set as sentinel
#[inline]
pub fn octant_index(n: &Neighborhood, octant: usize) -> u8 {
    let mut v = 1u8;
    for (bit, &pos) in OCTANT_POSITIONS[octant].iter().enumerate() {
        if n[pos] != 0 {
            v |= 128 >> bit;
        }
    }
    v
}

/// Summed Euler contribution of all eight octants
#[inline]
pub fn euler_change(n: &Neighborhood) -> i32 {
    (0..8).map(|o| EULER_LUT[octant_index(n, o) as usize] as i32).sum()
}

/// True if deleting the center leaves the Euler characteristic unchanged
#[inline]
pub fn is_euler_invariant(n: &Neighborhood) -> bool {
    euler_change(n) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thinning::neighborhood::CENTER;

    #[test]
    fn test_lut_reference_values() {
        assert_eq!(EULER_LUT[1], 1);
        assert_eq!(EULER_LUT[9], -3);
        assert_eq!(EULER_LUT[105], 5);
        assert_eq!(EULER_LUT[129], -7);
        assert_eq!(EULER_LUT[233], 5);
        assert_eq!(EULER_LUT[255], -1);
    }

    #[test]
    fn test_lut_even_entries_zero() {
        for i in (0..256).step_by(2) {
            assert_eq!(EULER_LUT[i], 0, "even entry {} should be unused", i);
        }
        let min = EULER_LUT.iter().min().copied().unwrap();
        let max = EULER_LUT.iter().max().copied().unwrap();
        assert_eq!((min, max), (-7, 5));
    }

    #[test]
    fn test_octants_cover_neighborhood() {
        // A neighbor with m non-zero offsets lies in 2^(3-m) octants.
        // Corners appear once, at weight 128.
        let mut seen = [0usize; 27];
        for positions in OCTANT_POSITIONS.iter() {
            for &p in positions {
                assert_ne!(p, CENTER);
                seen[p] += 1;
            }
        }
        for (p, &count) in seen.iter().enumerate() {
            if p == CENTER {
                continue;
            }
            let (dx, dy, dz) = ((p % 3) as i32 - 1, ((p / 3) % 3) as i32 - 1, (p / 9) as i32 - 1);
            let nonzero = [dx, dy, dz].iter().filter(|&&d| d != 0).count();
            let expected = 1 << (3 - nonzero);
            assert_eq!(count, expected, "position {} appears {} times", p, count);
        }
        for positions in OCTANT_POSITIONS.iter() {
            let p = positions[0];
            assert!(p % 3 != 1 && (p / 3) % 3 != 1 && p / 9 != 1, "weight 128 must be a corner");
        }
    }

    #[test]
    fn test_octant_index_sentinel() {
        let empty = [0u8; 27];
        for o in 0..8 {
            assert_eq!(octant_index(&empty, o), 1);
        }
        let full = [1u8; 27];
        for o in 0..8 {
            assert_eq!(octant_index(&full, o), 255);
        }
    }

    #[test]
    fn test_isolated_and_interior_points_not_invariant() {
        // Deleting an isolated point removes a component
        let mut n = [0u8; 27];
        n[CENTER] = 1;
        assert_eq!(euler_change(&n), 8);
        assert!(!is_euler_invariant(&n));

        // Deleting an interior point creates a cavity
        let full = [1u8; 27];
        assert_eq!(euler_change(&full), -8);
        assert!(!is_euler_invariant(&full));
    }

    #[test]
    fn test_surface_point_invariant() {
        // Center on the top face of a solid slab: z-1 and z layers filled
        let mut n = [0u8; 27];
        n[..18].fill(1);
        assert!(is_euler_invariant(&n));
    }

    #[test]
    fn test_rod_interior_point_not_invariant() {
        // Deleting the middle of a rod splits it in two
        let mut n = [0u8; 27];
        n[12] = 1;
        n[CENTER] = 1;
        n[14] = 1;
        assert!(!is_euler_invariant(&n));
    }
}
