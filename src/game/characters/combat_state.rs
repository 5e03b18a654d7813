// Combat state - health, mana and outgoing damage modifiers of one actor

use std::fmt;

/// Mutable combat record owned by a single actor (player or monster)
#[derive(Debug, Clone, PartialEq)]
pub struct CombatState {
    health: i32,
    max_health: i32,
    mana: i32,
    max_mana: i32,
    /// Temporary multiplier applied to outgoing weapon damage
    damage_multiplier: f32,
}

/// Starting combat state of a freshly created hero
pub const BASE_COMBAT_STATE: CombatState = CombatState {
    health: 100,
    max_health: 100,
    mana: 50,
    max_mana: 50,
    damage_multiplier: 1.0,
};

impl Default for CombatState {
    fn default() -> Self {
        BASE_COMBAT_STATE
    }
}

impl CombatState {
    /// Create a state with full pools
    pub fn new(max_health: i32, max_mana: i32) -> Self {
        let max_health = max_health.max(0);
        let max_mana = max_mana.max(0);
        Self {
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            damage_multiplier: 1.0,
        }
    }

    #[allow(dead_code)]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[allow(dead_code)]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    #[allow(dead_code)]
    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    #[allow(dead_code)]
    pub fn damage_multiplier(&self) -> f32 {
        self.damage_multiplier
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Refill health to its maximum
    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }

    /// Refill mana to its maximum
    pub fn restore_mana(&mut self) {
        self.mana = self.max_mana;
    }

    /// Lose health, never dropping below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Spend mana, never dropping below zero
    pub fn drain_mana(&mut self, amount: i32) {
        self.mana = (self.mana - amount.max(0)).max(0);
    }

    /// Set the outgoing damage multiplier (negative values become 0)
    pub fn set_damage_multiplier(&mut self, multiplier: f32) {
        self.damage_multiplier = multiplier.max(0.0);
    }

    /// Apply the damage multiplier to a base damage value
    pub fn scale_damage(&self, base: i32) -> i32 {
        (base as f32 * self.damage_multiplier).round() as i32
    }
}

impl fmt::Display for CombatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP: {}/{} MP: {}/{}",
            self.health, self.max_health, self.mana, self.max_mana
        )
    }
}
