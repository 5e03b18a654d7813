// Input manager - turns winit key events into action state

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::Action;
use super::config::InputConfig;
use super::state::InputState;

/// Owns the key bindings and the action state they drive
///
/// An action stays pressed while any key bound to it is held.
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    state: InputState,
    held_keys: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a manager with the default bindings
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            state: InputState::new(),
            held_keys: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_key(key, event.state == ElementState::Pressed, event.repeat);
        }
    }

    /// Apply one key transition; returns the bound action, if any
    pub fn process_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) -> Option<Action> {
        let action = self.config.action(key)?;
        if pressed {
            // Key repeats are not new presses
            if !repeat {
                self.held_keys.insert(key);
                self.state.press(action);
            }
        } else {
            self.held_keys.remove(&key);
            let still_held = self
                .config
                .keys(action)
                .iter()
                .any(|other| self.held_keys.contains(other));
            if !still_held {
                self.state.release(action);
            }
        }
        Some(action)
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Rebind keys; call `reset` afterwards if keys may be held
    #[allow(dead_code)]
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Call once per frame after the state has been read
    pub fn end_frame(&mut self) {
        self.state.end_frame();
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_keys.clear();
        self.state.reset();
    }
}
