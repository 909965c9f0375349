//! Isometric projector - turns grid occupancy into diamond edge tiles.
//!
//! Each screen anchor `(x, y)` covers a 4x2 block of tiles and maps to one
//! grid cell through the diamond projection
//!
//! ```text
//! ew = (x >> 2) - (y >> 1)
//! sn = (x >> 2) + (y >> 1)
//! ```
//!
//! The block is split into four 2x1 edge pairs, one per diamond edge:
//!
//! ```text
//!   +-------+-------+
//!   | north | east  |   row y
//!   +-------+-------+
//!   | west  | south |   row y + 1
//!   +-------+-------+
//! ```
//!
//! Each edge compares the cell against its neighbor across that edge and picks
//! a tile pair from a fixed rule table (see [`EdgeRelation`]). No depth
//! sorting is needed: every edge is decided from two cells only.

use iso_dungeon_core::Grid;

use crate::tiles::{wrap, TileSink};
use crate::types::{TileId, FALLING_OFFSET, TILE_FLAT_EMPTY, TILE_FLAT_SOLID};
use crate::viewport::Camera;

/// The four diamond edges of an anchor, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    North,
    East,
    West,
    South,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::East, Edge::West, Edge::South];

    /// Grid step `(ew, sn)` to the neighbor across this edge.
    pub fn neighbor(self) -> (i32, i32) {
        match self {
            Edge::North => (0, -1),
            Edge::East => (1, 0),
            Edge::West => (-1, 0),
            Edge::South => (0, 1),
        }
    }

    /// Tile offset of the pair's left half from the anchor.
    pub fn placement(self) -> (i32, i32) {
        match self {
            Edge::North => (0, 0),
            Edge::East => (2, 0),
            Edge::West => (0, 1),
            Edge::South => (2, 1),
        }
    }

    /// Tile id of the rising pair's left half; the right half is `base + 1`.
    pub fn rising_base(self) -> TileId {
        match self {
            Edge::North => 1,
            Edge::East => 3,
            Edge::West => 5,
            Edge::South => 7,
        }
    }
}

/// How the cell compares to its neighbor across one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRelation {
    /// Both solid.
    FlatSolid,
    /// Both empty.
    FlatEmpty,
    /// Cell solid, neighbor empty.
    Rising,
    /// Cell empty, neighbor solid.
    Falling,
}

impl EdgeRelation {
    pub fn between(center: bool, neighbor: bool) -> Self {
        match (center, neighbor) {
            (true, true) => EdgeRelation::FlatSolid,
            (false, false) => EdgeRelation::FlatEmpty,
            (true, false) => EdgeRelation::Rising,
            (false, true) => EdgeRelation::Falling,
        }
    }
}

/// What a relation draws: a uniform fill, or the edge's own pair (mirrored
/// for falling edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeRule {
    Fill(TileId),
    Pair { mirrored: bool },
}

/// Indexed by `EdgeRelation as usize`.
const EDGE_RULES: [EdgeRule; 4] = [
    EdgeRule::Fill(TILE_FLAT_SOLID),
    EdgeRule::Fill(TILE_FLAT_EMPTY),
    EdgeRule::Pair { mirrored: false },
    EdgeRule::Pair { mirrored: true },
];

/// Left and right tile of one edge pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeTiles {
    pub left: TileId,
    pub right: TileId,
}

/// Tile pair for `edge` under `relation`.
pub fn edge_tiles(edge: Edge, relation: EdgeRelation) -> EdgeTiles {
    match EDGE_RULES[relation as usize] {
        EdgeRule::Fill(id) => EdgeTiles {
            left: id,
            right: id,
        },
        EdgeRule::Pair { mirrored } => {
            let base = edge.rising_base() + if mirrored { FALLING_OFFSET } else { 0 };
            EdgeTiles {
                left: base,
                right: base + 1,
            }
        }
    }
}

/// Grid cell for a screen anchor, before the camera offset.
#[inline]
pub fn project(x: i32, y: i32) -> (i32, i32) {
    ((x >> 2) - (y >> 1), (x >> 2) + (y >> 1))
}

/// Emit the 4x2 tile block for the anchor at `(x, y)`.
///
/// `bg` is the background scroll in tiles; it shifts the block into the
/// part of the wrapping buffer the display is currently showing.
pub fn draw_tile<S: TileSink + ?Sized>(
    grid: &Grid,
    sink: &mut S,
    x: i32,
    y: i32,
    camera: Camera,
    bg: (i32, i32),
) {
    let (ew, sn) = project(x, y);
    let center = grid.get(ew, sn, camera.ew, camera.sn);

    let bx = x + bg.0;
    let by = y + bg.1;

    for edge in Edge::ALL {
        let (dew, dsn) = edge.neighbor();
        let neighbor = grid.get(ew + dew, sn + dsn, camera.ew, camera.sn);
        let tiles = edge_tiles(edge, EdgeRelation::between(center, neighbor));

        let (px, py) = edge.placement();
        let ty = wrap(by + py);
        sink.write_tile(wrap(bx + px), ty, tiles.left);
        sink.write_tile(wrap(bx + px + 1), ty, tiles.right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TileBuffer;
    use crate::types::{GridConfig, OutOfRange};

    #[test]
    fn test_projection_matches_diamond_axes() {
        assert_eq!(project(0, 0), (0, 0));
        assert_eq!(project(4, 0), (1, 1));
        assert_eq!(project(0, 2), (-1, 1));
        assert_eq!(project(20, 18), (-4, 14));
        // Odd screen coordinates floor like the shifts they are.
        assert_eq!(project(7, 3), (0, 2));
    }

    #[test]
    fn test_rule_table_covers_every_relation() {
        for edge in Edge::ALL {
            let base = edge.rising_base();
            assert_eq!(
                edge_tiles(edge, EdgeRelation::FlatSolid),
                EdgeTiles { left: 0, right: 0 }
            );
            assert_eq!(
                edge_tiles(edge, EdgeRelation::FlatEmpty),
                EdgeTiles { left: 17, right: 17 }
            );
            assert_eq!(
                edge_tiles(edge, EdgeRelation::Rising),
                EdgeTiles {
                    left: base,
                    right: base + 1
                }
            );
            assert_eq!(
                edge_tiles(edge, EdgeRelation::Falling),
                EdgeTiles {
                    left: base + 8,
                    right: base + 9
                }
            );
        }
    }

    #[test]
    fn test_relation_from_occupancy() {
        assert_eq!(EdgeRelation::between(true, true), EdgeRelation::FlatSolid);
        assert_eq!(EdgeRelation::between(false, false), EdgeRelation::FlatEmpty);
        assert_eq!(EdgeRelation::between(true, false), EdgeRelation::Rising);
        assert_eq!(EdgeRelation::between(false, true), EdgeRelation::Falling);
    }

    #[test]
    fn test_isolated_block_rises_on_all_edges() {
        let cfg = GridConfig::default().with_out_of_range(OutOfRange::Empty);
        let mut grid = Grid::new(cfg);
        grid.set(5, 5, true);

        let mut buf = TileBuffer::new();
        // Anchor (20, 0) projects to (5, 5).
        draw_tile(&grid, &mut buf, 20, 0, Camera::default(), (0, 0));

        let row0: Vec<u8> = (20..24).map(|x| buf.get(x, 0)).collect();
        let row1: Vec<u8> = (20..24).map(|x| buf.get(x, 1)).collect();
        assert_eq!(row0, vec![1, 2, 3, 4]);
        assert_eq!(row1, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_hole_falls_on_all_edges() {
        let mut grid = Grid::default();
        for sn in 0..32 {
            for ew in 0..32 {
                grid.set(ew, sn, true);
            }
        }
        grid.set(5, 5, false);

        let mut buf = TileBuffer::new();
        draw_tile(&grid, &mut buf, 20, 0, Camera::default(), (0, 0));

        let row0: Vec<u8> = (20..24).map(|x| buf.get(x, 0)).collect();
        let row1: Vec<u8> = (20..24).map(|x| buf.get(x, 1)).collect();
        assert_eq!(row0, vec![9, 10, 11, 12]);
        assert_eq!(row1, vec![13, 14, 15, 16]);
    }

    #[test]
    fn test_camera_offsets_the_sampled_cell() {
        let mut grid = Grid::default();
        grid.set(6, 4, true);
        grid.set(6, 3, true);

        let mut buf = TileBuffer::new();
        // Anchor (0, 0) is cell (0, 0); camera (6, 4) moves it to (6, 4).
        draw_tile(&grid, &mut buf, 0, 0, Camera::new(6, 4), (0, 0));

        // North neighbor (6, 3) is solid: flat.
        assert_eq!((buf.get(0, 0), buf.get(1, 0)), (0, 0));
        // East neighbor (7, 4) is empty: rising.
        assert_eq!((buf.get(2, 0), buf.get(3, 0)), (3, 4));
    }

    #[test]
    fn test_block_wraps_around_the_buffer() {
        let grid = Grid::default();
        let mut buf = TileBuffer::new();
        draw_tile(&grid, &mut buf, 0, 0, Camera::new(10, 10), (30, 31));

        // Empty map: every edge is flat empty, written at wrapped positions.
        for (x, y) in [(30, 31), (31, 31), (0, 31), (1, 31), (30, 0), (31, 0), (0, 0), (1, 0)] {
            assert_eq!(buf.get(x, y), TILE_FLAT_EMPTY, "({}, {})", x, y);
        }
        assert_eq!(buf.tile_writes(), 8);
    }
}
