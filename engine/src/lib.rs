//! Orbitfall Engine Library
//!
//! Core of the gravity playground: a player sphere pulled between fixed
//! planets with distinct gravity profiles, one black-hole singularity with
//! inverse-distance pull, and a jump that suspends attraction for a fixed
//! window. Rendering is deliberately absent - a host loop steps the
//! simulation and reads the player position out each frame.
//!
//! # Modules
//!
//! - [`physics`] - Pure gravity and singularity pull evaluation
//! - [`world`] - Attractor registry, singularity, and config loading
//! - [`player`] - Player state and the jump state machine
//! - [`sim`] - Frame stepper owning all simulation state
//! - [`input`] - Key-to-action mapping with edge detection
//! - [`error`] - Simulation error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use orbitfall_engine::sim::Simulation;
//! use orbitfall_engine::world::WorldConfig;
//! use orbitfall_engine::input::InputState;
//!
//! let mut sim = Simulation::new(WorldConfig::playground())?;
//! let mut input = InputState::new();
//!
//! // Each frame, driven by the host's frame-pacing loop:
//! if input.jump_requested() {
//!     sim.request_jump();
//! }
//! sim.step(delta_time)?;
//! renderer.draw_player(sim.player().position);
//! input.end_frame();
//! ```

pub mod error;
pub mod input;
pub mod physics;
pub mod player;
pub mod sim;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core types at crate level for convenience
pub use error::SimError;
pub use input::{GameAction, InputState};
pub use player::{JumpController, JumpState, Player};
pub use sim::Simulation;
pub use world::{Attractor, Singularity, WorldConfig};
