//! Skeleton-Core: topology-preserving thinning of binary 3D volumes
//!
//! This crate reduces binary volumes to one-voxel-thin skeletons with the
//! same connectivity, cavities and tunnels as the input.
//!
//! # Modules
//! - `volume`: Voxel grid trait and the owned `Volume` type
//! - `thinning`: Neighborhoods, Euler and simple-point tests, thinning loop
//! - `utils`: Shape masks and topological measurements
//! - `nifti_io`: NIfTI mask loading and saving

// Core modules
pub mod volume;
pub mod thinning;

// Utilities
pub mod utils;

// I/O modules
pub mod nifti_io;

pub use volume::{Volume, VoxelGrid};
pub use thinning::{
    skeletonize, skeletonize_default, skeletonize_with_progress,
    thin, thin_with_params, thin_with_progress,
    ThinningParams, ThinningStats,
};
