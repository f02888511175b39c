//! World Module
//!
//! Contains the read-only world data model: the attractor registry and the
//! singularity, plus configuration loading.
//!
//! ## Default World
//! The default world reproduces the classic playground scene - three
//! planets with distinct gravity profiles and one black hole.

pub mod bodies;
pub mod config;

pub use bodies::{Attractor, Singularity};
pub use config::WorldConfig;
