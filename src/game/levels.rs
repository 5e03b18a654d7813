// Built-in dungeon levels, from the entrance down

use super::world::{MapError, TileMap};

const ENTRANCE: &str = "
    ####################
    #......#...........#
    #.M..}.#....####...#
    #......#.......#...#
    #..........M...#.>.#
    ####.#######...#...#
    #......M.......#...#
    ####################
";

const CRYPT: &str = "
    ####################
    #....#.....M.......#
    #.##.#.###.####.##.#
    #.#M..!#.....M#..#.#
    #.####.#.####.##.#.#
    #......#....#....#>#
    ####################
";

const VAULT: &str = "
    ############
    #....M.....#
    #.########.#
    #.#M....M#.#
    #.#..|...#.#
    #....##....#
    ############
";

/// Layouts in descending order
pub const LAYOUTS: [&str; 3] = [ENTRANCE, CRYPT, VAULT];

/// Parse every built-in level; `seed` is varied per level
pub fn load(seed: u64) -> Result<Vec<TileMap>, MapError> {
    LAYOUTS
        .iter()
        .zip(0u64..)
        .map(|(layout, depth)| TileMap::from_ascii(layout, seed.wrapping_add(depth)))
        .collect()
}
