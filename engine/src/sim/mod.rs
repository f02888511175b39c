//! Frame Stepper
//!
//! [`Simulation`] is the explicit simulation context: it owns the world
//! configuration, the player, and the jump controller, and advances one
//! tick per call to [`Simulation::step`]. An external frame-pacing loop is
//! expected to call `step` once per rendered frame and read the player
//! position afterwards.
//!
//! Everything runs on the caller's thread. The jump-window countdown is
//! ticked inside `step`, so the jump flag is never mutated from a second
//! callback context.
//!
//! # Example
//!
//! ```ignore
//! use orbitfall_engine::sim::Simulation;
//! use orbitfall_engine::world::WorldConfig;
//!
//! let mut sim = Simulation::new(WorldConfig::playground())?;
//! // Each frame:
//! sim.step(delta_time)?;
//! let position = sim.player().position;
//! ```

use glam::Vec3;

use crate::error::SimError;
use crate::physics::{gravity, singularity};
use crate::player::{JumpController, Player};
use crate::world::WorldConfig;

/// Owns all simulation state and advances it one tick at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    world: WorldConfig,
    player: Player,
    jump: JumpController,
}

impl Simulation {
    /// Create a simulation over a world with the default player spawn.
    ///
    /// # Errors
    /// Returns [`SimError::EmptyRegistry`] if the world has no attractors;
    /// the registry must be non-empty before the simulation starts.
    pub fn new(world: WorldConfig) -> Result<Self, SimError> {
        Self::with_player(world, Player::default())
    }

    /// Create a simulation with an explicit starting player.
    pub fn with_player(world: WorldConfig, player: Player) -> Result<Self, SimError> {
        world.validate()?;
        log::info!(
            "simulation start: {} attractors, singularity at {:?}, player at {:?}",
            world.attractors.len(),
            world.singularity.position,
            player.position
        );
        Ok(Self {
            world,
            player,
            jump: JumpController::new(),
        })
    }

    /// The player as of the last completed tick.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The read-only world configuration.
    pub fn world(&self) -> &WorldConfig {
        &self.world
    }

    /// Time remaining in the current jump window, zero while idle.
    pub fn jump_window_remaining(&self) -> f32 {
        self.jump.window_remaining()
    }

    /// Handle a jump input edge. Returns `true` if the jump was taken,
    /// `false` if it was dropped because the player is already airborne.
    pub fn request_jump(&mut self) -> bool {
        self.jump.try_jump(&mut self.player)
    }

    /// Advance the simulation by `dt` seconds and return the displacement
    /// applied to the player this tick.
    ///
    /// Ticks the jump-window countdown first. While the window is open the
    /// position is left untouched (the jump impulse was already applied at
    /// transition time). Otherwise both evaluators read the start-of-tick
    /// position, and their combined rate is committed scaled by `dt`.
    ///
    /// `dt <= 0` is a no-op.
    ///
    /// # Errors
    /// Returns [`SimError::EmptyRegistry`] if the attractor registry is
    /// empty. `Simulation::new` rejects such worlds, so this only fires if
    /// the world was replaced with an invalid one.
    pub fn step(&mut self, dt: f32) -> Result<Vec3, SimError> {
        if dt <= 0.0 {
            return Ok(Vec3::ZERO);
        }

        self.jump.update(&mut self.player, dt);
        if self.player.is_jumping() {
            log::trace!(
                "tick: airborne, {:.3}s left in jump window",
                self.jump.window_remaining()
            );
            return Ok(Vec3::ZERO);
        }

        // Both evaluators read the same start-of-tick position.
        let start = self.player.position;
        let gravity_rate = gravity::evaluate(start, &self.world.attractors)?;
        let pull_rate = singularity::evaluate(start, &self.world.singularity);

        let displacement = (gravity_rate + pull_rate) * dt;
        self.player.position = start + displacement;
        log::trace!(
            "tick: gravity {:?} + pull {:?} -> player {:?}",
            gravity_rate,
            pull_rate,
            self.player.position
        );
        Ok(displacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Attractor, Singularity, WorldConfig};

    fn far_singularity() -> Singularity {
        Singularity::new(Vec3::new(1000.0, 0.0, 0.0), 5.0)
    }

    #[test]
    fn test_new_rejects_empty_registry() {
        let world = WorldConfig {
            attractors: Vec::new(),
            singularity: far_singularity(),
        };
        assert!(matches!(Simulation::new(world), Err(SimError::EmptyRegistry)));
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut sim = Simulation::new(WorldConfig::playground()).unwrap();
        let before = sim.player().position;
        assert_eq!(sim.step(0.0).unwrap(), Vec3::ZERO);
        assert_eq!(sim.step(-1.0).unwrap(), Vec3::ZERO);
        assert_eq!(sim.player().position, before);
    }

    #[test]
    fn test_displacement_scales_with_dt() {
        let world = WorldConfig {
            attractors: vec![Attractor::normal(Vec3::new(0.0, -5.0, 0.0), 3.0)],
            singularity: far_singularity(),
        };
        let player = Player::new(Vec3::new(0.0, 1.0, 0.0));

        let mut full = Simulation::with_player(world.clone(), player).unwrap();
        let mut half = Simulation::with_player(world, player).unwrap();

        let d_full = full.step(1.0).unwrap();
        let d_half = half.step(0.5).unwrap();
        assert_eq!(d_full, Vec3::new(0.0, -0.05, 0.0));
        assert_eq!(d_half, d_full * 0.5);
    }
}
