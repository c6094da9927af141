//! Utility functions
//!
//! - `shapes`: Box, sphere, rod and torus masks
//! - `analysis`: Component count and Euler characteristic of binary volumes

pub mod shapes;
pub mod analysis;

pub use shapes::{box_mask, rod_mask, sphere_mask, torus_mask};
pub use analysis::{count_components, euler_characteristic};
