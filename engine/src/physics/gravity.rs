//! Nearest-attractor gravity evaluation
//!
//! The player is only ever pulled by the closest attractor in the world.
//! Each attractor carries a gravity profile that fixes the sign and
//! magnitude of its pull; the evaluator scans the registry for the closest
//! body and returns a displacement rate along the direction to it.
//!
//! Rates are in units per second; the frame stepper multiplies the returned
//! vector by the frame's delta time.
//!
//! # Example
//!
//! ```ignore
//! use orbitfall_engine::physics::gravity;
//! use orbitfall_engine::world::Attractor;
//! use glam::Vec3;
//!
//! let planets = vec![Attractor::normal(Vec3::new(0.0, -5.0, 0.0), 3.0)];
//! let pull = gravity::evaluate(Vec3::new(0.0, 1.0, 0.0), &planets)?;
//! // pull points straight down at 0.05 units/sec
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::world::Attractor;

/// Pull rate of a normal-gravity attractor in units per second.
pub const NORMAL_GRAVITY_RATE: f32 = 0.05;

/// Pull rate of a low-gravity attractor in units per second.
pub const LOW_GRAVITY_RATE: f32 = 0.02;

/// Pull rate of a reverse-gravity attractor in units per second.
/// The direction vector still points at the attractor; the negative rate
/// makes the net motion point away from it.
pub const REVERSE_GRAVITY_RATE: f32 = -0.05;

/// Gravity behavior of an attractor, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityProfile {
    /// Standard pull toward the attractor.
    Normal,
    /// Weaker pull toward the attractor.
    Low,
    /// Push away from the attractor. Unbounded: there is no engagement
    /// radius, matching normal and low profiles.
    Reverse,
}

impl GravityProfile {
    /// Signed pull rate for this profile in units per second.
    pub fn pull_rate(&self) -> f32 {
        match self {
            GravityProfile::Normal => NORMAL_GRAVITY_RATE,
            GravityProfile::Low => LOW_GRAVITY_RATE,
            GravityProfile::Reverse => REVERSE_GRAVITY_RATE,
        }
    }
}

/// Find the attractor closest to `position`.
///
/// Ties are broken by registry order: the first attractor at the minimum
/// distance wins. This is observable behavior (it decides which profile
/// applies) and must stay a strict `<` linear scan.
///
/// # Errors
/// Returns [`SimError::EmptyRegistry`] if `attractors` is empty.
pub fn nearest(position: Vec3, attractors: &[Attractor]) -> Result<&Attractor, SimError> {
    let mut closest: Option<&Attractor> = None;
    let mut min_distance = f32::INFINITY;

    for attractor in attractors {
        let distance = position.distance(attractor.position);
        if distance < min_distance {
            min_distance = distance;
            closest = Some(attractor);
        }
    }

    closest.ok_or(SimError::EmptyRegistry)
}

/// Evaluate the gravity displacement rate for a player at `position`.
///
/// Returns the normalized direction from the player to the nearest
/// attractor, scaled by the attractor's profile rate. If the player sits
/// exactly on the attractor the direction is undefined and the result is
/// the zero vector instead of NaN.
///
/// Pure function: neither the player nor the registry is mutated.
///
/// # Errors
/// Returns [`SimError::EmptyRegistry`] if `attractors` is empty.
pub fn evaluate(position: Vec3, attractors: &[Attractor]) -> Result<Vec3, SimError> {
    let attractor = nearest(position, attractors)?;
    let direction = (attractor.position - position).normalize_or_zero();
    Ok(direction * attractor.profile.pull_rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(profile: GravityProfile, position: Vec3) -> Vec<Attractor> {
        vec![Attractor::new(position, 3.0, profile)]
    }

    #[test]
    fn test_profile_rates() {
        assert_eq!(GravityProfile::Normal.pull_rate(), 0.05);
        assert_eq!(GravityProfile::Low.pull_rate(), 0.02);
        assert_eq!(GravityProfile::Reverse.pull_rate(), -0.05);
    }

    #[test]
    fn test_empty_registry_is_an_error() {
        let result = evaluate(Vec3::ZERO, &[]);
        assert!(matches!(result, Err(SimError::EmptyRegistry)));
    }

    #[test]
    fn test_normal_pull_straight_down() {
        let planets = single(GravityProfile::Normal, Vec3::new(0.0, -5.0, 0.0));
        let pull = evaluate(Vec3::new(0.0, 1.0, 0.0), &planets).unwrap();
        assert_eq!(pull, Vec3::new(0.0, -0.05, 0.0));
    }

    #[test]
    fn test_reverse_pull_points_away() {
        let planets = single(GravityProfile::Reverse, Vec3::new(0.0, -5.0, 0.0));
        let pull = evaluate(Vec3::new(0.0, 1.0, 0.0), &planets).unwrap();
        // Direction to the attractor is -Y; the negative rate flips it.
        assert_eq!(pull, Vec3::new(0.0, 0.05, 0.0));
    }

    #[test]
    fn test_coincident_position_yields_zero() {
        let center = Vec3::new(2.0, 3.0, 4.0);
        let planets = single(GravityProfile::Normal, center);
        let pull = evaluate(center, &planets).unwrap();
        assert_eq!(pull, Vec3::ZERO);
        assert!(pull.is_finite());
    }

    #[test]
    fn test_nearest_prefers_closer_attractor() {
        let planets = vec![
            Attractor::new(Vec3::new(100.0, 0.0, 0.0), 3.0, GravityProfile::Normal),
            Attractor::new(Vec3::new(1.0, 0.0, 0.0), 3.0, GravityProfile::Low),
        ];
        let chosen = nearest(Vec3::ZERO, &planets).unwrap();
        assert_eq!(chosen.profile, GravityProfile::Low);
    }

    #[test]
    fn test_tie_breaks_to_registry_order() {
        let planets = vec![
            Attractor::new(Vec3::new(5.0, 0.0, 0.0), 3.0, GravityProfile::Low),
            Attractor::new(Vec3::new(-5.0, 0.0, 0.0), 3.0, GravityProfile::Reverse),
        ];
        // Equidistant from the origin; the first entry must win, every time.
        for _ in 0..3 {
            let chosen = nearest(Vec3::ZERO, &planets).unwrap();
            assert_eq!(chosen.profile, GravityProfile::Low);
        }
    }
}
