//! Physics type re-exports from glam
//!
//! The simulation does all of its vector math through glam; this module
//! re-exports the types the evaluators rely on.

pub use glam::Vec3;
