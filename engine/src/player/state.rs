//! Player simulation state
//!
//! The player's position is the only piece of simulation state that evolves
//! tick to tick. The jump flag is the single source of truth for whether
//! attraction is currently suspended.

use glam::Vec3;

/// Whether the player is airborne from a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    /// Normal state: gravity and singularity pull apply.
    #[default]
    Idle,
    /// Jump window: all attraction is suppressed until the window expires.
    Jumping,
}

/// The controllable body driven by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// World position, mutated every tick by the stepper and by the jump
    /// impulse.
    pub position: Vec3,
    /// Jump status flag. While `Jumping`, no attractor or singularity may
    /// modify `position`.
    pub jump: JumpState,
}

impl Player {
    /// Spawn a player at a position, idle.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            jump: JumpState::Idle,
        }
    }

    /// Check whether the jump window is currently open.
    pub fn is_jumping(&self) -> bool {
        self.jump == JumpState::Jumping
    }
}

impl Default for Player {
    fn default() -> Self {
        // Classic spawn point: just above the normal-gravity planet.
        Self::new(Vec3::new(0.0, 1.0, 0.0))
    }
}
