//! Game Module
//!
//! Contains game-specific glue that builds on top of the engine.

pub mod session;

pub use session::{GameSession, SessionAction};
