// Per-frame action state

use std::collections::HashSet;

use super::action::Action;
use crate::game::characters::Direction;

/// Which actions are held, and which changed during the current frame
#[derive(Debug, Default)]
pub struct InputState {
    pressed: HashSet<Action>,
    just_pressed: HashSet<Action>,
    just_released: HashSet<Action>,
    /// `just_pressed` in arrival order
    press_order: Vec<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    #[allow(dead_code)]
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Actions pressed this frame, oldest first
    pub fn pressed_this_frame(&self) -> impl Iterator<Item = Action> + '_ {
        self.press_order.iter().copied()
    }

    /// First held movement direction, if any
    pub fn held_movement(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.is_pressed(Action::Move(*direction)))
    }

    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) && self.just_pressed.insert(action) {
            self.press_order.push(action);
        }
    }

    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Forget per-frame transitions (call once per frame, after reading)
    pub(crate) fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.press_order.clear();
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
        self.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut state = InputState::new();
        state.press(Action::Drink);
        assert!(state.is_pressed(Action::Drink));
        assert!(state.just_pressed(Action::Drink));

        state.end_frame();
        assert!(state.is_pressed(Action::Drink));
        assert!(!state.just_pressed(Action::Drink));

        state.release(Action::Drink);
        assert!(!state.is_pressed(Action::Drink));
        assert!(state.just_released(Action::Drink));
    }

    #[test]
    fn test_repeat_press_is_not_new() {
        let mut state = InputState::new();
        state.press(Action::Equip);
        state.end_frame();
        state.press(Action::Equip);
        assert!(!state.just_pressed(Action::Equip));
    }

    #[test]
    fn test_pressed_this_frame_keeps_arrival_order() {
        let presses = [
            Action::SelectSlot(3),
            Action::Drink,
            Action::Move(Direction::Down),
            Action::Attack(Direction::Left),
            Action::SelectSlot(0),
            Action::Equip,
        ];

        let mut state = InputState::new();
        for action in presses {
            state.press(action);
        }
        let order: Vec<Action> = state.pressed_this_frame().collect();
        assert_eq!(order, presses);

        state.end_frame();
        assert_eq!(state.pressed_this_frame().count(), 0);
    }

    #[test]
    fn test_press_release_press_in_one_frame_is_listed_once() {
        let mut state = InputState::new();
        state.press(Action::Drop);
        state.release(Action::Drop);
        state.press(Action::Drop);
        assert_eq!(state.pressed_this_frame().collect::<Vec<_>>(), [Action::Drop]);
    }

    #[test]
    fn test_held_movement() {
        let mut state = InputState::new();
        assert_eq!(state.held_movement(), None);
        state.press(Action::Move(Direction::Right));
        assert_eq!(state.held_movement(), Some(Direction::Right));
    }

    #[test]
    fn test_reset() {
        let mut state = InputState::new();
        state.press(Action::Pause);
        state.reset();
        assert!(!state.is_pressed(Action::Pause));
        assert_eq!(state.pressed_this_frame().count(), 0);
    }
}
