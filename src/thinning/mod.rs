//! Topology-preserving 3D thinning
//!
//! Reference:
//! Lee, T.C., Kashyap, R.L., Chu, C.N. (1994). "Building skeleton models via
//! 3-D medial surface/axis thinning algorithms."
//! CVGIP: Graphical Models and Image Processing, 56(6):462-478.
//!
//! Boundary voxels are removed direction by direction as long as removal
//! keeps both the Euler characteristic and the 26-connectivity of the
//! neighborhood unchanged. Curve and surface tips (voxels with a single
//! neighbor) are kept.

pub mod neighborhood;
pub mod euler;
pub mod simple_point;
mod driver;
mod skeletonize;

pub use neighborhood::{extract, is_endpoint, is_border, Direction, Neighborhood};
pub use euler::{is_euler_invariant, EULER_LUT};
pub use simple_point::is_simple;
pub use driver::{thin, thin_with_params, thin_with_progress, Point, ThinningParams, ThinningStats};
pub use skeletonize::{skeletonize, skeletonize_default, skeletonize_with_progress};
