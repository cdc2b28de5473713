//! Clay Lathe - Profile-curve deformation for simulated wheel-thrown pottery.
//!
//! This crate models the radial profile ("silhouette") of a lathed surface of
//! revolution as an ordered sequence of 3D points along a vertical axis, and
//! provides localized, weighted deformation of that profile: pushing the clay
//! inward, pulling it outward, and querying how far a point sits from the
//! surface.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types for procedural curve construction
//! - `compute`: Numerical core (vector math, falloff windows, the curve itself)
//!
//! Mesh generation, the lathe sweep, and contact detection are external
//! collaborators: they consume this crate's API but live elsewhere.
//!
//! # Example
//!
//! ```rust
//! use clay_lathe::{ProfileConfig, ProfileCurve, Vec3};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! // Create configuration
//! let config = ProfileConfig {
//!     radius: 1.0,
//!     height: 10.0,
//!     subdivisions: 32,
//!     variance: 0.01,
//! };
//! config.validate().unwrap();
//!
//! // Build a curve with a seeded source for reproducibility
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut curve = ProfileCurve::generate(&config, &mut rng);
//!
//! // Push into the clay at mid-height
//! let contact = Vec3::new(0.0, 5.0, 0.9);
//! curve.push_at(contact, 0.5, 0.0, 0.3);
//!
//! println!("Distance to surface: {}", curve.distance_to_point(contact));
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{CurveError, ProfileCurve, Vec3};
pub use schema::{ConfigError, ProfileConfig};
