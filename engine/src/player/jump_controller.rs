//! Jump Controller
//!
//! Two-state machine (`Idle` / `Jumping`) that suspends attraction for a
//! fixed window after a jump. The jump applies exactly one upward impulse
//! at the moment of transition; there is no fall impulse afterwards -
//! descent is purely the resumption of attractor pull once the window
//! closes.
//!
//! The reset back to `Idle` is a countdown owned by this controller and
//! ticked by the frame stepper, so the jump flag is only ever mutated on
//! the simulation loop. A jump request while already airborne is dropped
//! (debounce); the guard is applied synchronously, before the countdown is
//! armed.

use crate::player::state::{JumpState, Player};

/// Base jump strength in units.
pub const JUMP_STRENGTH: f32 = 0.2;

/// Multiplier applied to [`JUMP_STRENGTH`] for the one-time impulse.
pub const JUMP_IMPULSE_FACTOR: f32 = 20.0;

/// Duration of the jump window in seconds. Attraction is suppressed for
/// this long after a jump.
pub const JUMP_WINDOW: f32 = 0.8;

/// Owns the jump state transitions and the window countdown.
#[derive(Debug, Clone)]
pub struct JumpController {
    /// One-time upward displacement applied on takeoff.
    impulse: f32,
    /// Length of the suppression window in seconds.
    window: f32,
    /// Time remaining in the current window; meaningful only while jumping.
    window_remaining: f32,
}

impl Default for JumpController {
    fn default() -> Self {
        Self {
            impulse: JUMP_STRENGTH * JUMP_IMPULSE_FACTOR,
            window: JUMP_WINDOW,
            window_remaining: 0.0,
        }
    }
}

impl JumpController {
    /// Create a controller with the default impulse and window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom jump parameters.
    ///
    /// # Arguments
    /// * `strength` - Base jump strength in units (impulse = strength x 20)
    /// * `window` - Suppression window in seconds
    pub fn with_parameters(strength: f32, window: f32) -> Self {
        Self {
            impulse: strength * JUMP_IMPULSE_FACTOR,
            window,
            window_remaining: 0.0,
        }
    }

    /// Get the one-time upward impulse in units.
    pub fn impulse(&self) -> f32 {
        self.impulse
    }

    /// Get the time remaining in the current jump window, in seconds.
    /// Zero while idle.
    pub fn window_remaining(&self) -> f32 {
        self.window_remaining
    }

    /// Attempt a jump. Returns `true` if the jump was initiated, `false`
    /// if the player is already airborne and the request was dropped.
    ///
    /// On success the player is displaced upward by the impulse immediately
    /// and the suppression window is armed.
    pub fn try_jump(&mut self, player: &mut Player) -> bool {
        if player.jump == JumpState::Jumping {
            log::debug!("jump request dropped: already airborne");
            return false;
        }

        player.position.y += self.impulse;
        player.jump = JumpState::Jumping;
        self.window_remaining = self.window;
        log::debug!(
            "jump: +{} up, window {}s, now at {:?}",
            self.impulse,
            self.window,
            player.position
        );
        true
    }

    /// Tick the window countdown. When it expires the player returns to
    /// `Idle` exactly once; further ticks while idle are no-ops.
    pub fn update(&mut self, player: &mut Player, dt: f32) {
        if player.jump != JumpState::Jumping {
            return;
        }

        self.window_remaining -= dt;
        if self.window_remaining <= 0.0 {
            self.window_remaining = 0.0;
            player.jump = JumpState::Idle;
            log::debug!("jump window expired, attraction resumes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_jump_applies_single_impulse() {
        let mut controller = JumpController::new();
        let mut player = Player::new(Vec3::new(0.0, 1.0, 0.0));

        assert!(controller.try_jump(&mut player));
        assert_eq!(player.position, Vec3::new(0.0, 5.0, 0.0)); // 0.2 * 20 = 4.0
        assert!(player.is_jumping());
    }

    #[test]
    fn test_second_jump_request_is_dropped() {
        let mut controller = JumpController::new();
        let mut player = Player::new(Vec3::ZERO);

        assert!(controller.try_jump(&mut player));
        let after_first = player.position;
        assert!(!controller.try_jump(&mut player));
        assert_eq!(player.position, after_first);
    }

    #[test]
    fn test_window_expires_exactly_once() {
        let mut controller = JumpController::new();
        let mut player = Player::new(Vec3::ZERO);
        controller.try_jump(&mut player);

        // 0.3 + 0.3 = 0.6s elapsed, still inside the 0.8s window
        controller.update(&mut player, 0.3);
        controller.update(&mut player, 0.3);
        assert!(player.is_jumping());

        controller.update(&mut player, 0.3);
        assert!(!player.is_jumping());

        // Further ticks while idle change nothing
        controller.update(&mut player, 1.0);
        assert!(!player.is_jumping());
        assert_eq!(controller.window_remaining(), 0.0);
    }

    #[test]
    fn test_jump_available_again_after_expiry() {
        let mut controller = JumpController::new();
        let mut player = Player::new(Vec3::ZERO);

        controller.try_jump(&mut player);
        controller.update(&mut player, 1.0);
        assert!(controller.try_jump(&mut player));
        assert_eq!(player.position.y, 8.0); // two full impulses
    }

    #[test]
    fn test_custom_parameters() {
        let mut controller = JumpController::with_parameters(0.1, 0.5);
        let mut player = Player::new(Vec3::ZERO);

        controller.try_jump(&mut player);
        assert_eq!(player.position.y, 2.0); // 0.1 * 20
        controller.update(&mut player, 0.4);
        assert!(player.is_jumping());
        controller.update(&mut player, 0.2);
        assert!(!player.is_jumping());
    }
}
