// Weapons: reach and damage formulas

use crate::game::characters::CombatState;

/// Mana spent by each staff swing
pub const STAFF_MANA_COST: i32 = 5;

/// Something the hero can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weapon {
    /// Empty hands; what the hero holds when nothing is equipped
    BareHanded,
    Sword,
    Spear,
    Bow,
    /// Channels mana; weak without it
    Staff,
}

impl Weapon {
    pub fn name(self) -> &'static str {
        match self {
            Self::BareHanded => "Bare hands",
            Self::Sword => "Sword",
            Self::Spear => "Spear",
            Self::Bow => "Bow",
            Self::Staff => "Staff",
        }
    }

    /// Reach in tiles
    pub fn range(self) -> i32 {
        match self {
            Self::BareHanded => 0,
            Self::Sword => 1,
            Self::Spear => 2,
            Self::Staff => 3,
            Self::Bow => 4,
        }
    }

    fn base_damage(self) -> i32 {
        match self {
            Self::BareHanded => 1,
            Self::Sword => 10,
            Self::Spear => 8,
            Self::Bow => 6,
            Self::Staff => 14,
        }
    }

    /// Damage dealt by one swing, paid for from the wielder's state
    pub fn compute_damage(self, wielder: &mut CombatState) -> i32 {
        let base = match self {
            Self::Staff if wielder.mana() >= STAFF_MANA_COST => {
                wielder.drain_mana(STAFF_MANA_COST);
                self.base_damage()
            }
            Self::Staff => Self::BareHanded.base_damage(),
            _ => self.base_damage(),
        };
        wielder.scale_damage(base)
    }
}
