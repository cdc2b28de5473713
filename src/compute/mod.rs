//! Compute module - Numerical core for profile-curve deformation.

mod curve;
mod falloff;
mod vec3;

pub use curve::*;
pub use falloff::*;
pub use vec3::*;
