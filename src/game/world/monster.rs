// Monsters roaming a level

use glam::IVec2;

use super::Enemy;
use crate::game::characters::CombatState;

/// Default pools of a monster placed from a map layout
const MONSTER_HEALTH: i32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    position: IVec2,
    state: CombatState,
}

impl Monster {
    pub fn new(position: IVec2, state: CombatState) -> Self {
        Self { position, state }
    }

    /// Monster with the standard health pool
    pub fn at(position: IVec2) -> Self {
        Self::new(position, CombatState::new(MONSTER_HEALTH, 0))
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

impl Enemy for Monster {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn receive_damage(&mut self, amount: i32) {
        self.state.take_damage(amount);
        log::debug!(
            "Monster at {} took {} damage ({})",
            self.position,
            amount,
            self.state
        );
    }
}
