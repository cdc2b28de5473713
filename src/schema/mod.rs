//! Schema module - Configuration types for profile-curve construction.

mod config;

pub use config::*;
