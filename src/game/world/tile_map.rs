// ASCII tile map
//
// Layout glyphs:
//   '#' wall      '.' floor
//   '>' stairs    'M' floor with a monster standing on it
//   '!' health potion, '/' spear, '}' bow, '|' staff lying on the floor
//
// Spawns only land on plain floor, never on stairs, loot or under a monster.

use glam::IVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DungeonMap, MapError, Monster};
use crate::core::grid::{tile_center, tile_of};
use crate::game::items::{Item, Potion, Weapon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Stairs,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Rectangular level built from an ASCII layout
#[derive(Debug)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    /// Plain floor tiles, cached for spawning
    free_tiles: Vec<IVec2>,
    monsters: Vec<Monster>,
    /// Items lying on tile centres
    loot: Vec<(IVec2, Item)>,
    rng: StdRng,
}

/// Item lying on a loot glyph's tile
fn loot_for(glyph: char) -> Option<Item> {
    match glyph {
        '!' => Some(Potion::Health.into()),
        '/' => Some(Weapon::Spear.into()),
        '}' => Some(Weapon::Bow.into()),
        '|' => Some(Weapon::Staff.into()),
        _ => None,
    }
}

impl TileMap {
    /// Parse a layout; `seed` drives spawn point selection
    pub fn from_ascii(layout: &str, seed: u64) -> Result<Self, MapError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut free_tiles = Vec::new();
        let mut monsters = Vec::new();
        let mut loot = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }

            for (column, glyph) in line.chars().enumerate() {
                let coords = IVec2::new(column as i32, row as i32);
                let tile = match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    'M' => {
                        monsters.push(Monster::at(tile_center(coords)));
                        Tile::Floor
                    }
                    '>' => Tile::Stairs,
                    _ => match loot_for(glyph) {
                        Some(item) => {
                            loot.push((tile_center(coords), item));
                            Tile::Floor
                        }
                        None => return Err(MapError::UnknownGlyph { glyph, column, row }),
                    },
                };
                if glyph == '.' {
                    free_tiles.push(coords);
                }
                tiles.push(tile);
            }
        }

        if free_tiles.is_empty() {
            return Err(MapError::NoFreeTile);
        }

        log::debug!(
            "Parsed {}x{} map with {} free tiles, {} monsters and {} items",
            width,
            height,
            free_tiles.len(),
            monsters.len(),
            loot.len()
        );

        Ok(Self {
            width,
            height,
            tiles,
            free_tiles,
            monsters,
            loot,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at grid coordinates, `None` outside the map
    pub fn tile(&self, coords: IVec2) -> Option<Tile> {
        if coords.x < 0 || coords.y < 0 {
            return None;
        }
        let (x, y) = (coords.x as usize, coords.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x).copied()
    }

    /// Tile under a pixel position
    pub fn tile_at_pixel(&self, px: IVec2) -> Option<Tile> {
        self.tile(tile_of(px))
    }

    #[allow(dead_code)]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Pick up every item lying exactly at `position`
    pub fn take_loot(&mut self, position: IVec2) -> Vec<Item> {
        let mut taken = Vec::new();
        self.loot.retain(|(at, item)| {
            if *at == position {
                taken.push(item.clone());
                false
            } else {
                true
            }
        });
        taken
    }

    /// Drop monsters whose health reached zero, returning how many were removed
    pub fn remove_dead_monsters(&mut self) -> usize {
        let before = self.monsters.len();
        self.monsters.retain(Monster::is_alive);
        before - self.monsters.len()
    }
}

impl DungeonMap for TileMap {
    type Enemy = Monster;

    fn is_blocked(&self, x: i32, y: i32) -> bool {
        !self
            .tile_at_pixel(IVec2::new(x, y))
            .is_some_and(Tile::is_walkable)
    }

    fn random_free_tile(&mut self) -> IVec2 {
        // Construction guarantees at least one free tile
        let index = self.rng.gen_range(0..self.free_tiles.len());
        tile_center(self.free_tiles[index])
    }

    fn enemies_mut(&mut self) -> &mut [Monster] {
        &mut self.monsters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::is_tile_centered;
    use crate::game::world::Enemy;

    const LAYOUT: &str = "
        #####
        #.M>#
        #...#
        #####
    ";

    #[test]
    fn test_parse_dimensions() {
        let map = TileMap::from_ascii(LAYOUT, 1).unwrap();
        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 4);
        assert_eq!(map.tile(IVec2::new(0, 0)), Some(Tile::Wall));
        assert_eq!(map.tile(IVec2::new(3, 1)), Some(Tile::Stairs));
        assert_eq!(map.tile(IVec2::new(2, 1)), Some(Tile::Floor));
    }

    #[test]
    fn test_monsters_spawn_on_tile_centres() {
        let map = TileMap::from_ascii(LAYOUT, 1).unwrap();
        assert_eq!(map.monsters().len(), 1);
        assert_eq!(map.monsters()[0].position(), IVec2::new(40, 24));
    }

    #[test]
    fn test_is_blocked() {
        let map = TileMap::from_ascii(LAYOUT, 1).unwrap();
        assert!(map.is_blocked(8, 8)); // wall
        assert!(!map.is_blocked(24, 24)); // floor
        assert!(!map.is_blocked(31, 31)); // floor, last pixel
        assert!(!map.is_blocked(56, 24)); // stairs
        assert!(map.is_blocked(-1, 24)); // outside
        assert!(map.is_blocked(24, 200)); // outside
    }

    #[test]
    fn test_random_free_tile_is_walkable_and_centred() {
        let mut map = TileMap::from_ascii(LAYOUT, 42).unwrap();
        for _ in 0..100 {
            let spawn = map.random_free_tile();
            assert!(is_tile_centered(spawn));
            assert!(!map.is_blocked(spawn.x, spawn.y));
            assert_ne!(spawn, map.monsters()[0].position());
        }
    }

    #[test]
    fn test_random_free_tile_never_on_stairs() {
        let mut map = TileMap::from_ascii("#####\n#.>.#\n#####", 11).unwrap();
        for _ in 0..200 {
            let spawn = map.random_free_tile();
            assert_eq!(map.tile_at_pixel(spawn), Some(Tile::Floor));
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = TileMap::from_ascii(LAYOUT, 7).unwrap();
        let mut b = TileMap::from_ascii(LAYOUT, 7).unwrap();
        for _ in 0..10 {
            assert_eq!(a.random_free_tile(), b.random_free_tile());
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TileMap::from_ascii("  \n ", 0).unwrap_err(), MapError::Empty);
        assert_eq!(
            TileMap::from_ascii("###\n##", 0).unwrap_err(),
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(
            TileMap::from_ascii("#?#", 0).unwrap_err(),
            MapError::UnknownGlyph {
                glyph: '?',
                column: 1,
                row: 0
            }
        );
        assert_eq!(TileMap::from_ascii("###", 0).unwrap_err(), MapError::NoFreeTile);
        assert_eq!(TileMap::from_ascii("#M#", 0).unwrap_err(), MapError::NoFreeTile);
        assert_eq!(TileMap::from_ascii("#>#", 0).unwrap_err(), MapError::NoFreeTile);
    }

    #[test]
    fn test_loot_is_picked_up_once() {
        let mut map = TileMap::from_ascii("######\n#.!/}#\n#.|..#\n######", 5).unwrap();
        assert_eq!(map.tile(IVec2::new(2, 1)), Some(Tile::Floor));

        assert_eq!(map.take_loot(IVec2::new(40, 24)), vec![Item::from(Potion::Health)]);
        assert!(map.take_loot(IVec2::new(40, 24)).is_empty());
        assert_eq!(map.take_loot(IVec2::new(56, 24)), vec![Item::from(Weapon::Spear)]);
        assert_eq!(map.take_loot(IVec2::new(72, 24)), vec![Item::from(Weapon::Bow)]);
        assert_eq!(map.take_loot(IVec2::new(40, 40)), vec![Item::from(Weapon::Staff)]);

        // Off-centre pixels pick up nothing
        assert!(map.take_loot(IVec2::new(25, 24)).is_empty());
    }

    #[test]
    fn test_spawns_avoid_loot() {
        let mut map = TileMap::from_ascii("#####\n#!.|#\n#####", 9).unwrap();
        for _ in 0..50 {
            assert_eq!(map.random_free_tile(), IVec2::new(40, 24));
        }
    }

    #[test]
    fn test_remove_dead_monsters() {
        let mut map = TileMap::from_ascii(LAYOUT, 1).unwrap();
        map.enemies_mut()[0].receive_damage(1_000);
        assert_eq!(map.remove_dead_monsters(), 1);
        assert!(map.monsters().is_empty());
    }
}
