//! Player Module
//!
//! Player simulation state and the jump state machine.
//!
//! - [`state`] - Position plus the jump/idle flag
//! - [`jump_controller`] - Idle/Jumping transitions and the window countdown

pub mod jump_controller;
pub mod state;

pub use jump_controller::{JUMP_IMPULSE_FACTOR, JUMP_STRENGTH, JUMP_WINDOW, JumpController};
pub use state::{JumpState, Player};
