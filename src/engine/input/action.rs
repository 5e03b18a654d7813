// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

use crate::game::characters::Direction;

/// Number of inventory slots reachable with the digit keys
pub const SLOT_KEYS: u8 = 10;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    Move(Direction),

    // Combat
    Attack(Direction),

    // Inventory (act on the selected slot)
    SelectSlot(u8),
    Drink,
    Equip,
    Drop,

    // Meta actions
    Pause,
    Quit,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    let mut bindings = vec![
        // Movement: WASD and arrows
        (KeyCode::KeyW, Action::Move(Direction::Up)),
        (KeyCode::KeyA, Action::Move(Direction::Left)),
        (KeyCode::KeyS, Action::Move(Direction::Down)),
        (KeyCode::KeyD, Action::Move(Direction::Right)),
        (KeyCode::ArrowUp, Action::Move(Direction::Up)),
        (KeyCode::ArrowLeft, Action::Move(Direction::Left)),
        (KeyCode::ArrowDown, Action::Move(Direction::Down)),
        (KeyCode::ArrowRight, Action::Move(Direction::Right)),
        // Attacks: IJKL
        (KeyCode::KeyI, Action::Attack(Direction::Up)),
        (KeyCode::KeyJ, Action::Attack(Direction::Left)),
        (KeyCode::KeyK, Action::Attack(Direction::Down)),
        (KeyCode::KeyL, Action::Attack(Direction::Right)),
        // Inventory
        (KeyCode::KeyQ, Action::Drink),
        (KeyCode::KeyE, Action::Equip),
        (KeyCode::KeyX, Action::Drop),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ];

    let digits = [
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    bindings.extend(
        digits
            .into_iter()
            .zip(0..SLOT_KEYS)
            .map(|(key, slot)| (key, Action::SelectSlot(slot))),
    );

    bindings
}
