//! Shared types and constants for the isometric dungeon viewer.
//!
//! Everything in here is plain data: grid and screen dimensions, the tile-id
//! encoding consumed by the display, button and redraw bitsets, and the grid
//! configuration. No I/O, no randomness.
//!
//! # Coordinates
//!
//! The map uses two skewed axes:
//!
//! - **ew** ("east-west"): column inside a packed row
//! - **sn** ("south-north"): row index
//!
//! Both are signed so that camera offsets and neighbor lookups can step past
//! the map edge; the grid decides what such cells read as (see [`OutOfRange`]).
//!
//! # Screen Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_BUFFER_DIM` | 32 | Background tile buffer is 32x32 tiles, wrapping |
//! | `SCREEN_TILES_W` | 20 | Visible window width in tiles |
//! | `SCREEN_TILES_H` | 18 | Visible window height in tiles |
//! | `TILE_PX` | 8 | Tile edge in pixels (scroll offsets are in pixels) |
//! | `FRAME_MS` | 16 | Frame period (~60 FPS) |
//!
//! # Tile Ids
//!
//! | Id | Meaning |
//! |----|---------|
//! | 0 | flat edge between two solid cells (block top) |
//! | 1..=8 | rising edge, two ids per diamond edge (N, E, W, S) |
//! | 9..=16 | falling edge, rising id + 8 |
//! | 17 | flat edge between two empty cells (black fill) |
//!
//! # Examples
//!
//! ```
//! use iso_dungeon_types::{Direction, TileUpdateMask, GridConfig, OutOfRange};
//!
//! let mask = Direction::Right.update_mask() | Direction::Down.update_mask();
//! assert_eq!(mask, TileUpdateMask::RIGHT | TileUpdateMask::UP | TileUpdateMask::DOWN);
//!
//! let cfg = GridConfig::new(32, OutOfRange::Solid).unwrap();
//! assert_eq!(cfg.row_bytes(), 4);
//! ```

use bitflags::bitflags;
use thiserror::Error;

/// Default map side in cells.
pub const DEFAULT_MAP_SIZE: usize = 32;

/// Smallest map side that still fits the largest room plus the edge margin.
pub const MIN_MAP_SIZE: usize = 16;

/// Largest supported map side.
pub const MAX_MAP_SIZE: usize = 128;

/// Side of the (square) background tile buffer. Buffer coordinates wrap modulo this.
pub const TILE_BUFFER_DIM: i32 = 32;

/// Visible window width in tiles.
pub const SCREEN_TILES_W: i32 = 20;

/// Visible window height in tiles.
pub const SCREEN_TILES_H: i32 = 18;

/// Tile edge in pixels.
pub const TILE_PX: i32 = 8;

/// Fixed frame period in milliseconds (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Horizontal step between diamond anchors, in tiles.
pub const ANCHOR_STEP_X: i32 = 4;

/// Vertical step between diamond anchors, in tiles.
pub const ANCHOR_STEP_Y: i32 = 2;

/// Exclusive upper bound of anchor x positions (anchors 0, 4, .., 20).
pub const ANCHOR_SPAN_X: i32 = 22;

/// Exclusive upper bound of anchor y positions (anchors 0, 2, .., 18).
pub const ANCHOR_SPAN_Y: i32 = 20;

/// Most rooms held by one generation pass.
pub const MAX_ROOMS: usize = 10;

/// Lower clamp for room width/height.
pub const MIN_ROOM_SIZE: u8 = 2;

/// Upper clamp for room width/height.
pub const MAX_ROOM_SIZE: u8 = 8;

/// Margin kept between a room's origin and the low map edge.
pub const ROOM_EDGE_MARGIN: i32 = 2;

/// Number of decoration trials per generation pass.
pub const NOISE_TRIALS: u32 = 30;

/// A tile id as understood by the display.
pub type TileId = u8;

/// Flat edge between two solid cells.
pub const TILE_FLAT_SOLID: TileId = 0;

/// Flat edge between two empty cells.
pub const TILE_FLAT_EMPTY: TileId = 17;

/// Offset from a rising tile id to its falling (mirrored) counterpart.
pub const FALLING_OFFSET: TileId = 8;

/// Number of distinct tile ids (0..=17).
pub const TILE_COUNT: usize = 18;

/// What cells outside the map read as.
///
/// `Solid` walls the world in: the map edge renders as a cliff face.
/// `Empty` lets the world end: beyond the edge is black void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutOfRange {
    #[default]
    Solid,
    Empty,
}

impl OutOfRange {
    /// The value `get` returns for an out-of-range cell.
    pub fn value(self) -> bool {
        matches!(self, OutOfRange::Solid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutOfRange::Solid => "solid",
            OutOfRange::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("map size {0} is not a power of two")]
    NotPowerOfTwo(usize),
    #[error("map size {size} outside supported range {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
}

/// Validated grid shape and out-of-range policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    side: usize,
    out_of_range: OutOfRange,
}

impl GridConfig {
    pub fn new(side: usize, out_of_range: OutOfRange) -> Result<Self, ConfigError> {
        if !side.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo(side));
        }
        if !(MIN_MAP_SIZE..=MAX_MAP_SIZE).contains(&side) {
            return Err(ConfigError::SizeOutOfRange {
                size: side,
                min: MIN_MAP_SIZE,
                max: MAX_MAP_SIZE,
            });
        }
        Ok(Self { side, out_of_range })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Packed bytes per row (`side / 8`).
    pub fn row_bytes(&self) -> usize {
        self.side >> 3
    }

    pub fn out_of_range(&self) -> OutOfRange {
        self.out_of_range
    }

    pub fn with_out_of_range(mut self, out_of_range: OutOfRange) -> Self {
        self.out_of_range = out_of_range;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_MAP_SIZE,
            out_of_range: OutOfRange::Solid,
        }
    }
}

bitflags! {
    /// Buttons held during one frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const UP = 0x04;
        const DOWN = 0x08;
        /// Regenerate the map.
        const START = 0x10;
    }
}

impl Buttons {
    /// Buttons held now that were not held on the previous frame.
    pub fn newly_pressed(self, previous: Buttons) -> Buttons {
        self & !previous
    }

    /// Directions held this frame, in a fixed order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.contains(d.button()))
    }
}

bitflags! {
    /// Screen edges that need a redraw this frame.
    ///
    /// `ALL` is a distinct flag rather than the union of the four edges: it
    /// requests every anchor on screen, not just the border rows and columns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TileUpdateMask: u8 {
        const RIGHT = 1;
        const LEFT = 2;
        const DOWN = 4;
        const UP = 8;
        const ALL = 16;
    }
}

/// Camera movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Camera delta `(ew, sn)` for one frame of movement.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Screen edges exposed by moving one step in this direction.
    ///
    /// The diamond projection skews both axes, so each move exposes two edges.
    pub fn update_mask(self) -> TileUpdateMask {
        match self {
            Direction::Left => TileUpdateMask::LEFT | TileUpdateMask::DOWN,
            Direction::Right => TileUpdateMask::RIGHT | TileUpdateMask::UP,
            Direction::Up => TileUpdateMask::LEFT | TileUpdateMask::UP,
            Direction::Down => TileUpdateMask::RIGHT | TileUpdateMask::DOWN,
        }
    }

    pub fn button(self) -> Buttons {
        match self {
            Direction::Left => Buttons::LEFT,
            Direction::Right => Buttons::RIGHT,
            Direction::Up => Buttons::UP,
            Direction::Down => Buttons::DOWN,
        }
    }
}
