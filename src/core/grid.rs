// Tile grid math
//
// Positions are pixel coordinates. The dungeon is cut into square tiles and an
// actor at rest always sits on the centre pixel of a tile.

use glam::IVec2;

/// Edge length of a tile, in pixels
pub const TILE_SIZE: i32 = 16;

/// Offset of the centre pixel inside a tile
pub const HALF_TILE: i32 = TILE_SIZE / 2;

/// Tile containing a pixel (floors towards negative infinity)
pub fn tile_of(px: IVec2) -> IVec2 {
    IVec2::new(px.x.div_euclid(TILE_SIZE), px.y.div_euclid(TILE_SIZE))
}

/// Centre pixel of a tile
pub fn tile_center(tile: IVec2) -> IVec2 {
    tile * TILE_SIZE + IVec2::splat(HALF_TILE)
}

/// Check if a pixel is the centre of its tile
pub fn is_tile_centered(px: IVec2) -> bool {
    px.x.rem_euclid(TILE_SIZE) == HALF_TILE && px.y.rem_euclid(TILE_SIZE) == HALF_TILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_of() {
        assert_eq!(tile_of(IVec2::new(0, 0)), IVec2::new(0, 0));
        assert_eq!(tile_of(IVec2::new(15, 16)), IVec2::new(0, 1));
        assert_eq!(tile_of(IVec2::new(40, 8)), IVec2::new(2, 0));
    }

    #[test]
    fn test_tile_of_negative_pixels() {
        assert_eq!(tile_of(IVec2::new(-1, -16)), IVec2::new(-1, -1));
        assert_eq!(tile_of(IVec2::new(-17, 0)), IVec2::new(-2, 0));
    }

    #[test]
    fn test_tile_center() {
        assert_eq!(tile_center(IVec2::new(0, 0)), IVec2::new(8, 8));
        assert_eq!(tile_center(IVec2::new(3, 2)), IVec2::new(56, 40));
        assert!(is_tile_centered(tile_center(IVec2::new(-4, 7))));
    }

    #[test]
    fn test_is_tile_centered() {
        assert!(is_tile_centered(IVec2::new(8, 24)));
        assert!(!is_tile_centered(IVec2::new(9, 24)));
        assert!(!is_tile_centered(IVec2::new(8, 16)));
        assert!(is_tile_centered(IVec2::new(-8, -24)));
    }
}
