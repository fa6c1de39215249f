//! Point-set generators for the two configurations of the tree:
//! a scattered spherical cloud and the assembled cone.

pub mod sampling;
pub mod shapes;

pub use sampling::{sample_sphere_volume, sample_cone_volume, cone_radius_at};
pub use shapes::{SphereShape, ConeShape};
