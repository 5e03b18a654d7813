// Potions and their effects on the hero

use crate::game::characters::Player;

/// Single-use drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Potion {
    /// Refills mana
    Mana,
    /// Refills health
    Health,
    /// Turns the hero into the next role
    Transform,
}

impl Potion {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mana => "Mana potion",
            Self::Health => "Health potion",
            Self::Transform => "Transform potion",
        }
    }

    /// Apply the effect to the drinker
    pub fn apply(self, player: &mut Player) {
        match self {
            Self::Mana => player.restore_mana(),
            Self::Health => player.restore_health(),
            Self::Transform => {
                let role = player.role().next();
                player.change_role(role);
            }
        }
    }
}
