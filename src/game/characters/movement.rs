// Grid movement: directions, movement intent and the collision probe

use glam::IVec2;

use crate::core::grid::HALF_TILE;

/// One of the four grid directions (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in ordinal order
    pub const ALL: [Direction; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Decode a direction ordinal (0 up, 1 left, 2 down, 3 right)
    #[allow(dead_code)]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    #[allow(dead_code)]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Left => 1,
            Self::Down => 2,
            Self::Right => 3,
        }
    }

    /// Unit step along this direction, in pixels
    pub fn offset(self) -> IVec2 {
        match self {
            Self::Up => IVec2::new(0, -1),
            Self::Left => IVec2::new(-1, 0),
            Self::Down => IVec2::new(0, 1),
            Self::Right => IVec2::new(1, 0),
        }
    }

    /// Check if the direction points toward increasing coordinates
    fn is_positive(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}

/// Pixel on the edge of a footprint centred on `candidate`, facing `direction`.
///
/// The footprint spans `[c - HALF_TILE, c + HALF_TILE - 1]` on each axis, so a
/// step from a tile centre probes the neighbouring tile straight away and keeps
/// probing that same tile until the step completes.
pub fn leading_edge(candidate: IVec2, direction: Direction) -> IVec2 {
    let reach = if direction.is_positive() {
        HALF_TILE - 1
    } else {
        HALF_TILE
    };
    candidate + direction.offset() * reach
}

/// Requested direction plus whether the actor is currently travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementIntent {
    pub direction: Direction,
    pub moving: bool,
}

impl Default for MovementIntent {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            moving: false,
        }
    }
}

impl MovementIntent {
    /// Start travelling toward `direction`
    pub fn set(&mut self, direction: Direction) {
        self.direction = direction;
        self.moving = true;
    }

    /// Stop travelling (direction is kept)
    pub fn clear(&mut self) {
        self.moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{tile_of, TILE_SIZE};

    #[test]
    fn test_from_ordinal() {
        assert_eq!(Direction::from_ordinal(0), Some(Direction::Up));
        assert_eq!(Direction::from_ordinal(1), Some(Direction::Left));
        assert_eq!(Direction::from_ordinal(2), Some(Direction::Down));
        assert_eq!(Direction::from_ordinal(3), Some(Direction::Right));
        assert_eq!(Direction::from_ordinal(4), None);
        assert_eq!(Direction::from_ordinal(255), None);
    }

    #[test]
    fn test_ordinal_matches_from_ordinal() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_ordinal(direction.ordinal()), Some(direction));
        }
    }

    #[test]
    fn test_offsets_are_unit_steps() {
        for direction in Direction::ALL {
            let offset = direction.offset();
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
        }
    }

    #[test]
    fn test_leading_edge_hits_neighbour_tile_on_first_step() {
        let center = IVec2::new(24, 24); // tile (1, 1)
        for direction in Direction::ALL {
            let candidate = center + direction.offset();
            let probe = leading_edge(candidate, direction);
            assert_eq!(
                tile_of(probe),
                IVec2::new(1, 1) + direction.offset(),
                "{:?} should probe the neighbouring tile",
                direction
            );
        }
    }

    #[test]
    fn test_leading_edge_stays_on_destination_during_step() {
        let start = IVec2::new(24, 24);
        for direction in Direction::ALL {
            let destination = IVec2::new(1, 1) + direction.offset();
            for step in 1..=TILE_SIZE {
                let candidate = start + direction.offset() * step;
                assert_eq!(tile_of(leading_edge(candidate, direction)), destination);
            }
        }
    }

    #[test]
    fn test_intent_set_and_clear() {
        let mut intent = MovementIntent::default();
        assert!(!intent.moving);

        intent.set(Direction::Left);
        assert!(intent.moving);
        assert_eq!(intent.direction, Direction::Left);

        intent.clear();
        assert!(!intent.moving);
        assert_eq!(intent.direction, Direction::Left);
    }
}
