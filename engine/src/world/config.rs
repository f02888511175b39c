//! World Configuration Module
//!
//! The full read-only description of a playground world: the ordered
//! attractor registry plus the singularity. Registry order matters - it is
//! the tie-break order when two attractors are equally close to the player.
//!
//! ## Default World
//! The default world is the classic playground: a normal-gravity planet
//! below the spawn point, a low-gravity planet to the right, a
//! reverse-gravity planet up and to the left, and a black hole further out
//! on the right.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::world::bodies::{Attractor, Singularity};

/// World configuration consumed read-only by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Ordered attractor registry. Must be non-empty before the simulation
    /// starts; order is the nearest-selection tie-break.
    pub attractors: Vec<Attractor>,
    /// The single singularity.
    pub singularity: Singularity,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::playground()
    }
}

impl WorldConfig {
    /// The classic playground scene.
    pub fn playground() -> Self {
        Self {
            attractors: vec![
                Attractor::normal(Vec3::new(0.0, -5.0, 0.0), 3.0),
                Attractor::low(Vec3::new(10.0, 0.0, 0.0), 4.0),
                Attractor::reverse(Vec3::new(-10.0, 5.0, 0.0), 5.0),
            ],
            singularity: Singularity::new(Vec3::new(15.0, 0.0, 0.0), 5.0),
        }
    }

    /// Parse a world configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a world configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check that the registry can drive a simulation.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.attractors.is_empty() {
            return Err(SimError::EmptyRegistry);
        }
        Ok(())
    }
}
