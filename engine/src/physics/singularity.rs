//! Singularity pull evaluation
//!
//! The singularity is a single special attractor with an inverse-distance
//! falloff and a finite engagement radius. Outside the radius it has no
//! effect at all; inside, its pull grows as the player gets closer, with
//! the distance clamped to a minimum so the rate stays finite.
//!
//! Rates are in units per second; the frame stepper multiplies the returned
//! vector by the frame's delta time.

use glam::Vec3;

use crate::world::Singularity;

/// Distance inside which the singularity pulls, in units. At or beyond this
/// distance the evaluator returns the zero vector.
pub const ENGAGEMENT_RADIUS: f32 = 10.0;

/// Numerator of the inverse-distance pull rate.
pub const PULL_CONSTANT: f32 = 0.1;

/// Minimum distance used in the rate division. Bounds the pull rate at
/// `PULL_CONSTANT / MIN_PULL_DISTANCE` and keeps it finite when the player
/// sits on top of the singularity.
pub const MIN_PULL_DISTANCE: f32 = 0.01;

/// Evaluate the singularity displacement rate for a player at `position`.
///
/// Zero vector at distance >= [`ENGAGEMENT_RADIUS`]; otherwise
/// `PULL_CONSTANT / distance` toward the singularity, with the distance
/// clamped to [`MIN_PULL_DISTANCE`] before dividing. A player exactly on
/// the singularity gets a zero vector (undefined direction).
///
/// Pure function: nothing is mutated.
pub fn evaluate(position: Vec3, singularity: &Singularity) -> Vec3 {
    let distance = position.distance(singularity.position);
    if distance >= ENGAGEMENT_RADIUS {
        return Vec3::ZERO;
    }

    let rate = PULL_CONSTANT / distance.max(MIN_PULL_DISTANCE);
    let direction = (singularity.position - position).normalize_or_zero();
    direction * rate
}
