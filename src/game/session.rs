//! Game Session
//!
//! Wires the input layer to the simulation for one playground run. The host
//! loop forwards key events in, calls [`GameSession::update`] once per
//! frame, and draws the player position afterwards.

use glam::Vec3;
use winit::event::KeyEvent;

use crate::error::SimError;
use crate::input::{GameAction, InputState};
use crate::player::Player;
use crate::sim::Simulation;
use crate::world::WorldConfig;

/// Where the player spawns and respawns.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// What the host loop should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Keep running.
    Continue,
    /// The player asked to quit.
    Quit,
}

/// One playground run: simulation plus input state.
pub struct GameSession {
    sim: Simulation,
    input: InputState,
}

impl GameSession {
    /// Start a session over the classic playground world.
    pub fn new() -> Result<Self, SimError> {
        Self::with_world(WorldConfig::playground())
    }

    /// Start a session over a custom world.
    pub fn with_world(world: WorldConfig) -> Result<Self, SimError> {
        let sim = Simulation::with_player(world, Player::new(SPAWN_POINT))?;
        Ok(Self {
            sim,
            input: InputState::new(),
        })
    }

    /// Forward a keyboard event from the host event loop.
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        self.input.handle_key_event(event);
    }

    /// The simulation, for reading the player position out.
    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Advance one frame: consume input edges, step the simulation, clear
    /// per-frame input state.
    pub fn update(&mut self, dt: f32) -> Result<SessionAction, SimError> {
        if self.input.action_just_pressed(GameAction::Escape) {
            self.input.end_frame();
            return Ok(SessionAction::Quit);
        }

        if self.input.action_just_pressed(GameAction::Reset) {
            let world = self.sim.world().clone();
            self.sim = Simulation::with_player(world, Player::new(SPAWN_POINT))?;
            log::info!("player reset to spawn");
        }

        if self.input.jump_requested() {
            self.sim.request_jump();
        }

        self.sim.step(dt)?;
        self.input.end_frame();
        Ok(SessionAction::Continue)
    }
}
