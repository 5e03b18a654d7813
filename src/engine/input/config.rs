// Key binding table with remapping

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::action::{default_bindings, Action};

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create a configuration with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    pub fn from_bindings(bindings: impl IntoIterator<Item = (KeyCode, Action)>) -> Self {
        let mut config = Self::empty();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Unbind every key mapped to an action
    #[allow(dead_code)]
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    pub fn keys(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::Direction;

    #[test]
    fn test_defaults_bound() {
        let config = InputConfig::default();
        assert_eq!(config.action(KeyCode::KeyW), Some(Action::Move(Direction::Up)));
        assert_eq!(config.action(KeyCode::KeyQ), Some(Action::Drink));
        assert_eq!(config.action(KeyCode::F12), None);
    }

    #[test]
    fn test_rebind_key_moves_it() {
        let mut config = InputConfig::empty();
        config.bind(KeyCode::KeyA, Action::Drink);
        config.bind(KeyCode::KeyA, Action::Equip);

        assert_eq!(config.action(KeyCode::KeyA), Some(Action::Equip));
        assert!(config.keys(Action::Drink).is_empty());
        assert_eq!(config.keys(Action::Equip), &[KeyCode::KeyA]);
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::default();
        config.unbind_action(Action::Move(Direction::Left));

        assert_eq!(config.action(KeyCode::KeyA), None);
        assert_eq!(config.action(KeyCode::ArrowLeft), None);
        assert!(config.keys(Action::Move(Direction::Left)).is_empty());
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::empty();
        config.bind(KeyCode::KeyZ, Action::Quit);
        config.reset_to_defaults();

        assert_eq!(config.action(KeyCode::KeyZ), None);
        assert_eq!(config.action(KeyCode::Escape), Some(Action::Quit));
    }
}
