//! Fixed bodies of the playground world
//!
//! Attractors and the singularity are created once from configuration and
//! never move or change profile afterwards. The simulation reads them; only
//! renderers care about their radii.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::gravity::GravityProfile;

/// A fixed spherical body that pulls (or pushes) the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attractor {
    /// World position, fixed for the attractor's lifetime.
    pub position: Vec3,
    /// Visual radius in units. Informational only: the pull does not depend
    /// on it.
    pub radius: f32,
    /// Gravity behavior, fixed at creation.
    pub profile: GravityProfile,
}

impl Attractor {
    /// Create an attractor with an explicit profile.
    pub fn new(position: Vec3, radius: f32, profile: GravityProfile) -> Self {
        Self {
            position,
            radius,
            profile,
        }
    }

    /// Create a normal-gravity attractor.
    pub fn normal(position: Vec3, radius: f32) -> Self {
        Self::new(position, radius, GravityProfile::Normal)
    }

    /// Create a low-gravity attractor.
    pub fn low(position: Vec3, radius: f32) -> Self {
        Self::new(position, radius, GravityProfile::Low)
    }

    /// Create a reverse-gravity attractor.
    pub fn reverse(position: Vec3, radius: f32) -> Self {
        Self::new(position, radius, GravityProfile::Reverse)
    }
}

/// The one special attractor with inverse-distance pull and a finite
/// engagement radius. Always attractive; its falloff constants live in
/// [`crate::physics::singularity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Singularity {
    /// World position, fixed.
    pub position: Vec3,
    /// Visual radius in units, informational only.
    pub radius: f32,
}

impl Singularity {
    /// Create a singularity at a fixed position.
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }
}
