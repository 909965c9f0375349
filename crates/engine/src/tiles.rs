//! Tile buffer - the display's background layer.
//!
//! The projector never talks to a display directly; it writes through
//! [`TileSink`]. [`TileBuffer`] is the in-memory implementation the terminal
//! front-end reads from.

use crate::types::{TileId, TILE_BUFFER_DIM, TILE_FLAT_SOLID, TILE_PX};

const BUFFER_LEN: usize = (TILE_BUFFER_DIM * TILE_BUFFER_DIM) as usize;

/// Wrap a tile coordinate into `[0, TILE_BUFFER_DIM)`.
#[inline(always)]
pub fn wrap(v: i32) -> u8 {
    v.rem_euclid(TILE_BUFFER_DIM) as u8
}

/// Display operations the renderer needs.
pub trait TileSink {
    /// Write one tile. `x` and `y` are already wrapped into the buffer.
    fn write_tile(&mut self, x: u8, y: u8, id: TileId);

    /// Position the visible window over the buffer, in pixels.
    fn set_background_scroll(&mut self, px: i32, py: i32);
}

/// A wrapping 32x32 grid of tile ids plus the current scroll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBuffer {
    tiles: [TileId; BUFFER_LEN],
    scroll_px: (i32, i32),
    tile_writes: u64,
    scroll_writes: u64,
}

impl TileBuffer {
    pub fn new() -> Self {
        Self {
            tiles: [TILE_FLAT_SOLID; BUFFER_LEN],
            scroll_px: (0, 0),
            tile_writes: 0,
            scroll_writes: 0,
        }
    }

    #[inline(always)]
    fn index(x: u8, y: u8) -> usize {
        (y as usize) * (TILE_BUFFER_DIM as usize) + (x as usize)
    }

    /// Tile at a buffer coordinate; both axes wrap.
    pub fn get(&self, x: i32, y: i32) -> TileId {
        self.tiles[Self::index(wrap(x), wrap(y))]
    }

    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn scroll_px(&self) -> (i32, i32) {
        self.scroll_px
    }

    /// Buffer tile shown at the top-left of the visible window.
    pub fn origin_tile(&self) -> (i32, i32) {
        (
            self.scroll_px.0.div_euclid(TILE_PX),
            self.scroll_px.1.div_euclid(TILE_PX),
        )
    }

    /// Tile shown at window position `(wx, wy)`.
    pub fn visible(&self, wx: i32, wy: i32) -> TileId {
        let (ox, oy) = self.origin_tile();
        self.get(ox + wx, oy + wy)
    }

    /// Total tile writes since creation.
    pub fn tile_writes(&self) -> u64 {
        self.tile_writes
    }

    /// Total scroll commands since creation.
    pub fn scroll_writes(&self) -> u64 {
        self.scroll_writes
    }
}

impl Default for TileBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSink for TileBuffer {
    fn write_tile(&mut self, x: u8, y: u8, id: TileId) {
        debug_assert!((x as i32) < TILE_BUFFER_DIM && (y as i32) < TILE_BUFFER_DIM);
        self.tiles[Self::index(x, y)] = id;
        self.tile_writes += 1;
    }

    fn set_background_scroll(&mut self, px: i32, py: i32) {
        self.scroll_px = (px, py);
        self.scroll_writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_euclidean() {
        assert_eq!(wrap(0), 0);
        assert_eq!(wrap(31), 31);
        assert_eq!(wrap(32), 0);
        assert_eq!(wrap(-1), 31);
        assert_eq!(wrap(-33), 31);
        assert_eq!(wrap(i32::MIN), 0);
    }

    #[test]
    fn test_visible_window_follows_scroll() {
        let mut buf = TileBuffer::new();
        buf.write_tile(3, 30, 5);
        buf.set_background_scroll(3 * TILE_PX, -2 * TILE_PX);
        assert_eq!(buf.origin_tile(), (3, -2));
        assert_eq!(buf.visible(0, 0), 5);
        assert_eq!(buf.tile_writes(), 1);
        assert_eq!(buf.scroll_writes(), 1);
    }

    #[test]
    fn test_get_wraps_both_axes() {
        let mut buf = TileBuffer::new();
        buf.write_tile(0, 0, 9);
        assert_eq!(buf.get(32, -32), 9);
        assert_eq!(buf.get(64, 0), 9);
    }
}
