// Dungeon level collaborators: collision oracle, spawn points and enemies
//
// The hero never owns a level. Every operation that needs one borrows it
// through the `DungeonMap` trait for the duration of the call.

mod monster;
mod tile_map;

use glam::IVec2;

pub use monster::Monster;
pub use tile_map::{Tile, TileMap};

/// Anything the hero can hit
pub trait Enemy {
    /// Pixel position (tile centre when at rest)
    fn position(&self) -> IVec2;

    fn receive_damage(&mut self, amount: i32);
}

/// Read side of a dungeon level plus mutable access to its enemies
pub trait DungeonMap {
    type Enemy: Enemy;

    /// Check if the tile containing pixel (x, y) blocks movement
    fn is_blocked(&self, x: i32, y: i32) -> bool;

    /// Centre pixel of a random tile that is not blocked
    fn random_free_tile(&mut self) -> IVec2;

    fn enemies_mut(&mut self) -> &mut [Self::Enemy];
}

/// Level construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("Map layout is empty")]
    Empty,

    #[error("Row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown tile glyph {glyph:?} at column {column}, row {row}")]
    UnknownGlyph { glyph: char, column: usize, row: usize },

    #[error("Map has no free floor tile to spawn on")]
    NoFreeTile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_display() {
        let err = MapError::RaggedRow {
            row: 2,
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Row 2 has 3 tiles, expected 5");
    }
}
