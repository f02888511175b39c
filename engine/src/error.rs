//! Simulation Error Types
//!
//! Error taxonomy for the gravity simulation core. Degenerate geometry
//! (player exactly on top of a body) is not an error: it is recovered
//! locally by substituting a zero displacement.

use std::path::PathBuf;

/// Errors surfaced by the simulation core.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The attractor registry is empty. The world must contain at least one
    /// attractor before the simulation starts.
    #[error("attractor registry is empty")]
    EmptyRegistry,

    /// A world configuration file could not be read.
    #[error("failed to read world config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A world configuration document could not be parsed.
    #[error("invalid world config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
