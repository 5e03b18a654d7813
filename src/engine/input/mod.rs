// Keyboard input for the hero
//
// - `action`: game actions and their default key bindings
// - `config`: remappable key -> action table
// - `state`: pressed / just pressed / just released tracking per frame
// - `manager`: turns winit key events into action state
//
// ## Usage
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per frame, after reading the state
// if input.state().just_pressed(Action::Drink) { /* ... */ }
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::Action;
#[allow(unused_imports)]
pub use config::InputConfig;
pub use manager::InputManager;
pub use state::InputState;
