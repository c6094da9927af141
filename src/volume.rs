//! Binary voxel volumes
//!
//! The thinning engine works on any type implementing [`VoxelGrid`]; [`Volume`]
//! is the owned implementation used throughout the crate. Data is stored in
//! Fortran (column-major) order to match NIfTI convention:
//! index = x + y*nx + z*nx*ny.

/// Convert 3D index to flat index (Fortran order)
#[inline(always)]
pub fn idx3d(i: usize, j: usize, k: usize, nx: usize, ny: usize) -> usize {
    i + j * nx + k * nx * ny
}

/// Mutable 3D grid of small integers
///
/// Out-of-range reads through [`VoxelGrid::get`] are background (0) and
/// out-of-range writes through [`VoxelGrid::set`] are ignored, so the thinning
/// code can probe neighbors of boundary voxels without special cases.
pub trait VoxelGrid {
    /// Extent along x
    fn width(&self) -> usize;
    /// Extent along y
    fn height(&self) -> usize;
    /// Extent along z
    fn depth(&self) -> usize;

    /// Bounds-checked read, 0 outside the grid
    fn get(&self, x: i64, y: i64, z: i64) -> u8;

    /// Read without bounds checking
    ///
    /// # Safety
    /// `x < width()`, `y < height()` and `z < depth()` must hold.
    unsafe fn get_unchecked(&self, x: usize, y: usize, z: usize) -> u8;

    /// Bounds-checked write, no-op outside the grid
    fn set(&mut self, x: i64, y: i64, z: i64, value: u8);

    /// True if (x, y, z) lies inside the extents
    #[inline]
    fn contains(&self, x: i64, y: i64, z: i64) -> bool {
        x >= 0 && y >= 0 && z >= 0
            && (x as usize) < self.width()
            && (y as usize) < self.height()
            && (z as usize) < self.depth()
    }
}

/// Dense owned voxel volume
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume {
    data: Vec<u8>,
    nx: usize,
    ny: usize,
    nz: usize,
}

impl Volume {
    /// Create an all-background volume
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { data: vec![0u8; nx * ny * nz], nx, ny, nz }
    }

    /// Wrap an existing flat buffer (Fortran order)
    ///
    /// Values are stored as given; call [`Volume::binarize`] if they may be
    /// anything other than 0/1.
    pub fn from_vec(data: Vec<u8>, nx: usize, ny: usize, nz: usize) -> Result<Self, String> {
        let expected = nx * ny * nz;
        if data.len() != expected {
            return Err(format!(
                "Volume buffer has {} voxels, expected {}x{}x{} = {}",
                data.len(), nx, ny, nz, expected
            ));
        }
        Ok(Self { data, nx, ny, nz })
    }

    /// Build a binary volume from arbitrary values: non-zero becomes 1
    pub fn from_values(values: &[f64], nx: usize, ny: usize, nz: usize) -> Result<Self, String> {
        let data = values.iter().map(|&v| if v != 0.0 { 1 } else { 0 }).collect();
        Self::from_vec(data, nx, ny, nz)
    }

    /// Force every voxel to 0 or 1
    pub fn binarize(&mut self) {
        for v in self.data.iter_mut() {
            if *v != 0 {
                *v = 1;
            }
        }
    }

    /// Dimensions (nx, ny, nz)
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Flat voxel data in Fortran order
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the volume and return its flat buffer
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Number of voxels equal to 1
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }
}

impl VoxelGrid for Volume {
    #[inline]
    fn width(&self) -> usize { self.nx }
    #[inline]
    fn height(&self) -> usize { self.ny }
    #[inline]
    fn depth(&self) -> usize { self.nz }

    #[inline]
    fn get(&self, x: i64, y: i64, z: i64) -> u8 {
        if self.contains(x, y, z) {
            self.data[idx3d(x as usize, y as usize, z as usize, self.nx, self.ny)]
        } else {
            0
        }
    }

    #[inline]
    unsafe fn get_unchecked(&self, x: usize, y: usize, z: usize) -> u8 {
        debug_assert!(x < self.nx && y < self.ny && z < self.nz);
        *self.data.get_unchecked(idx3d(x, y, z, self.nx, self.ny))
    }

    #[inline]
    fn set(&mut self, x: i64, y: i64, z: i64, value: u8) {
        if self.contains(x, y, z) {
            let idx = idx3d(x as usize, y as usize, z as usize, self.nx, self.ny);
            self.data[idx] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_reads_are_background() {
        let mut vol = Volume::new(2, 2, 2);
        vol.set(1, 1, 1, 1);
        assert_eq!(vol.get(1, 1, 1), 1);
        assert_eq!(vol.get(-1, 0, 0), 0);
        assert_eq!(vol.get(2, 0, 0), 0);
        assert_eq!(vol.get(0, 0, 5), 0);
    }

    #[test]
    fn test_out_of_range_writes_ignored() {
        let mut vol = Volume::new(2, 3, 4);
        vol.set(-1, 0, 0, 1);
        vol.set(0, 3, 0, 1);
        vol.set(0, 0, 4, 1);
        assert_eq!(vol.count_foreground(), 0);
    }

    #[test]
    fn test_fortran_order() {
        let mut vol = Volume::new(3, 4, 5);
        vol.set(2, 1, 3, 1);
        assert_eq!(vol.as_slice()[2 + 3 + 3 * 12], 1);
        assert_eq!(unsafe { vol.get_unchecked(2, 1, 3) }, 1);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Volume::from_vec(vec![0; 7], 2, 2, 2).unwrap_err();
        assert!(err.contains("expected 2x2x2"), "unexpected message: {}", err);
    }

    #[test]
    fn test_binarize() {
        let mut vol = Volume::from_vec(vec![0, 3, 255, 1, 0, 0, 7, 0], 2, 2, 2).unwrap();
        vol.binarize();
        assert_eq!(vol.as_slice(), &[0, 1, 1, 1, 0, 0, 1, 0]);

        let vol = Volume::from_values(&[0.0, -2.5, 0.1, 0.0], 4, 1, 1).unwrap();
        assert_eq!(vol.as_slice(), &[0, 1, 1, 0]);
    }
}
