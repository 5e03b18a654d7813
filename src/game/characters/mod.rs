// Hero subsystem
//
// This module contains everything the playable character owns:
// - Player controller (movement, attacks, inventory use, status)
// - Combat state (health, mana, damage modifiers)
// - Inventory of carried items
// - Race/role pairing and sprite animation

pub mod animation;
pub mod combat_state;
pub mod inventory;
pub mod movement;
pub mod player;
pub mod race;

// Re-export commonly used types
pub use combat_state::CombatState;
pub use movement::Direction;
pub use player::{AttackOutcome, Player};
pub use race::{Race, RaceKind, Role};

/// Errors raised by inventory operations on the hero
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Inventory slot {index} does not exist (inventory holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Inventory slot {index} holds {item}, which is not a potion")]
    NotAPotion { index: usize, item: String },

    #[error("Inventory slot {index} holds {item}, which is not a weapon")]
    NotAWeapon { index: usize, item: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_error_display() {
        let err = PlayerError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Inventory slot 4 does not exist (inventory holds 2 items)"
        );

        let err = PlayerError::NotAPotion {
            index: 0,
            item: "Sword".to_string(),
        };
        assert_eq!(err.to_string(), "Inventory slot 0 holds Sword, which is not a potion");
    }
}
