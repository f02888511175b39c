//! Input Module
//!
//! Maps physical key events to game actions with edge detection. The jump
//! is a discrete edge event: it fires on the frame the key goes down, not
//! while it is held. Key codes come from winit but no window is created
//! here; the host event loop feeds events in.
//!
//! # Example
//!
//! ```rust,ignore
//! use orbitfall_engine::input::{GameAction, InputState};
//! use winit::keyboard::KeyCode;
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::Space, true);
//! if input.jump_requested() {
//!     sim.request_jump();
//! }
//! input.end_frame();
//! ```

use std::collections::HashMap;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input actions the player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Vertical impulse; suppresses attraction for the jump window.
    Jump,
    /// Reset the player to the spawn point.
    Reset,
    /// Leave the game.
    Escape,
}

/// State of a key or action (pressed or released).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

/// Current input state with key-to-action bindings.
pub struct InputState {
    /// Action states mapped by GameAction
    actions: HashMap<GameAction, KeyState>,
    /// Key-to-action bindings
    bindings: HashMap<KeyCode, Vec<GameAction>>,
}

impl InputState {
    pub fn new() -> Self {
        let mut state = Self {
            actions: HashMap::new(),
            bindings: HashMap::new(),
        };
        state.setup_default_bindings();
        state
    }

    /// Setup default key bindings
    fn setup_default_bindings(&mut self) {
        self.bind(KeyCode::Space, GameAction::Jump);
        self.bind(KeyCode::KeyR, GameAction::Reset);
        self.bind(KeyCode::Escape, GameAction::Escape);
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: GameAction) {
        self.bindings.entry(key).or_default().push(action);
    }

    /// Unbind a key from an action
    pub fn unbind(&mut self, key: KeyCode, action: GameAction) {
        if let Some(actions) = self.bindings.get_mut(&key) {
            actions.retain(|a| *a != action);
        }
    }

    /// Handle a key press or release.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(actions) = self.bindings.get(&key).cloned() {
            for action in actions {
                let state = self.actions.entry(action).or_default();
                state.just_pressed = pressed && !state.pressed;
                state.just_released = !pressed && state.pressed;
                state.pressed = pressed;
            }
        }
    }

    /// Handle a winit keyboard event from the host event loop.
    ///
    /// Key repeats are ignored so a held key cannot re-fire edge actions.
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key {
            self.handle_key(code, event.state == ElementState::Pressed);
        }
    }

    /// Clear per-frame edge state (call at end of frame).
    pub fn end_frame(&mut self) {
        for state in self.actions.values_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }

    /// Check if an action is currently held.
    pub fn action_pressed(&self, action: GameAction) -> bool {
        self.actions.get(&action).is_some_and(|s| s.pressed)
    }

    /// Check if an action was just triggered this frame.
    pub fn action_just_pressed(&self, action: GameAction) -> bool {
        self.actions.get(&action).is_some_and(|s| s.just_pressed)
    }

    /// Check if a jump was requested this frame (edge, not level).
    pub fn jump_requested(&self) -> bool {
        self.action_just_pressed(GameAction::Jump)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_fires_on_press_edge_only() {
        let mut input = InputState::new();

        input.handle_key(KeyCode::Space, true);
        assert!(input.jump_requested());
        assert!(input.action_pressed(GameAction::Jump));

        // Next frame, key still held: no new edge
        input.end_frame();
        assert!(!input.jump_requested());
        assert!(input.action_pressed(GameAction::Jump));
    }

    #[test]
    fn test_release_and_repress_fires_again() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Space, true);
        input.end_frame();
        input.handle_key(KeyCode::Space, false);
        input.end_frame();
        input.handle_key(KeyCode::Space, true);
        assert!(input.jump_requested());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        assert!(!input.jump_requested());
        assert!(!input.action_pressed(GameAction::Reset));
    }

    #[test]
    fn test_rebinding() {
        let mut input = InputState::new();
        input.unbind(KeyCode::Space, GameAction::Jump);
        input.bind(KeyCode::KeyJ, GameAction::Jump);

        input.handle_key(KeyCode::Space, true);
        assert!(!input.jump_requested());

        input.handle_key(KeyCode::KeyJ, true);
        assert!(input.jump_requested());
    }
}
