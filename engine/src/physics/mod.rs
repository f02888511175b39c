//! Physics module for the gravity playground
//!
//! Pure displacement evaluation for the player. No external physics library
//! dependencies: the pull math is small enough to own outright.
//!
//! # Unit System
//!
//! Positions are in world units; displacement rates are in units per second
//! and get multiplied by the frame delta time in the stepper.
//!
//! # Submodules
//!
//! - [`types`] - Core math types re-exported from glam
//! - [`gravity`] - Nearest-attractor selection and per-profile pull rates
//! - [`singularity`] - Distance-gated inverse-distance pull

pub mod gravity;
pub mod singularity;
pub mod types;

// Re-export commonly used items at the physics module level
pub use gravity::{GravityProfile, LOW_GRAVITY_RATE, NORMAL_GRAVITY_RATE, REVERSE_GRAVITY_RATE};
pub use singularity::{ENGAGEMENT_RADIUS, MIN_PULL_DISTANCE, PULL_CONSTANT};
pub use types::Vec3;
