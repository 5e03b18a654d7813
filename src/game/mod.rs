// Gameplay: the hero, items, dungeon levels and the session tying them together

pub mod characters;
pub mod items;
pub mod levels;
pub mod session;
pub mod world;
