// Items carried by the hero
//
// An item is a tagged variant. Only two capabilities matter to the hero:
// potions can be drunk and weapons can be equipped. `as_potion` / `as_weapon`
// expose them so callers never have to guess what an inventory slot holds.

pub mod potion;
pub mod weapon;

use std::fmt;

pub use potion::Potion;
pub use weapon::Weapon;

/// Anything that can sit in an inventory slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Potion(Potion),
    Weapon(Weapon),
    /// Loot with no use of its own
    Trinket { name: String },
}

impl Item {
    pub fn trinket(name: &str) -> Self {
        Self::Trinket {
            name: name.to_string(),
        }
    }

    pub fn as_potion(&self) -> Option<Potion> {
        match self {
            Self::Potion(potion) => Some(*potion),
            _ => None,
        }
    }

    pub fn as_weapon(&self) -> Option<Weapon> {
        match self {
            Self::Weapon(weapon) => Some(*weapon),
            _ => None,
        }
    }

    /// Name shown in the inventory listing
    pub fn name(&self) -> &str {
        match self {
            Self::Potion(potion) => potion.name(),
            Self::Weapon(weapon) => weapon.name(),
            Self::Trinket { name } => name,
        }
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Self::Potion(potion)
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Self::Weapon(weapon)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let potion = Item::from(Potion::Mana);
        let weapon = Item::from(Weapon::Sword);
        let trinket = Item::trinket("Bone");

        assert_eq!(potion.as_potion(), Some(Potion::Mana));
        assert_eq!(potion.as_weapon(), None);
        assert_eq!(weapon.as_weapon(), Some(Weapon::Sword));
        assert_eq!(weapon.as_potion(), None);
        assert_eq!(trinket.as_potion(), None);
        assert_eq!(trinket.as_weapon(), None);
    }

    #[test]
    fn test_display_uses_item_name() {
        assert_eq!(Item::from(Potion::Transform).to_string(), "Transform potion");
        assert_eq!(Item::from(Weapon::Bow).to_string(), "Bow");
        assert_eq!(Item::trinket("Old coin").to_string(), "Old coin");
    }
}
