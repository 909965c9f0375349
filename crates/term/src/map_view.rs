//! MapView: draws the visible window of a [`TileBuffer`] into a framebuffer.
//!
//! This module is pure (no I/O). It stands in for the tile graphics of a real
//! display: every tile id gets a glyph and a style, and the window is placed
//! over the wrapping buffer by the current background scroll.

use crate::engine::{Camera, TileBuffer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    OutOfRange, TileId, FALLING_OFFSET, SCREEN_TILES_H, SCREEN_TILES_W, TILE_FLAT_EMPTY,
    TILE_FLAT_SOLID,
};

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Side-panel information about the current map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub camera: Camera,
    pub seed: u32,
    pub rooms: u16,
    pub solid: u32,
    pub side: u16,
    pub out_of_range: OutOfRange,
}

const FLOOR: CellStyle = CellStyle::new(Rgb::new(120, 130, 150), Rgb::new(60, 64, 80));
const VOID: CellStyle = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0));
const RIM: CellStyle = CellStyle::new(Rgb::new(235, 235, 245), Rgb::new(60, 64, 80)).bold();
const SHADOW: CellStyle = CellStyle::new(Rgb::new(110, 110, 125), Rgb::new(0, 0, 0));
const UNKNOWN: CellStyle = CellStyle::new(Rgb::new(255, 0, 255), Rgb::new(0, 0, 0));

/// Glyph and style for a tile id.
///
/// Edge tiles draw the diamond outline: north and south edges slope up to the
/// right, east and west edges slope down. Rising edges sit on the block's top
/// face, falling edges on the void beside it.
pub fn tile_glyph(id: TileId) -> (char, CellStyle) {
    match id {
        TILE_FLAT_SOLID => ('░', FLOOR),
        TILE_FLAT_EMPTY => (' ', VOID),
        1..=16 => {
            let rising = (id - 1) % FALLING_OFFSET;
            let ch = match rising / 2 {
                0 | 3 => '╱',
                _ => '╲',
            };
            if id > FALLING_OFFSET {
                (ch, SHADOW)
            } else {
                (ch, RIM)
            }
        }
        _ => ('?', UNKNOWN),
    }
}

pub struct MapView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for MapView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl MapView {
    /// Size of the bordered map frame in cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            SCREEN_TILES_W as u16 * self.cell_w + 2,
            SCREEN_TILES_H as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer. Allocation-free.
    pub fn render_into(
        &self,
        tiles: &TileBuffer,
        status: Option<&StatusView>,
        screen: Screen,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(screen.width, screen.height);
        fb.clear(CellStyle::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = screen.width.saturating_sub(frame_w) / 2;
        let start_y = screen.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::default();
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for wy in 0..SCREEN_TILES_H {
            for wx in 0..SCREEN_TILES_W {
                let (ch, style) = tile_glyph(tiles.visible(wx, wy));
                let px = start_x + 1 + wx as u16 * self.cell_w;
                let py = start_y + 1 + wy as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        if let Some(status) = status {
            self.draw_side_panel(fb, status, screen, start_x + frame_w + 2, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        tiles: &TileBuffer,
        status: Option<&StatusView>,
        screen: Screen,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(screen.width, screen.height);
        self.render_into(tiles, status, screen, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: &StatusView,
        screen: Screen,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= screen.width || screen.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "CAMERA", label);
        y = y.saturating_add(1);
        let w = fb.put_i64(panel_x, y, status.camera.ew as i64, value);
        fb.put_char(panel_x + w, y, ',', value);
        fb.put_i64(panel_x + w + 1, y, status.camera.sn as i64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_i64(panel_x, y, status.seed as i64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MAP", label);
        y = y.saturating_add(1);
        let w = fb.put_i64(panel_x, y, status.side as i64, value);
        fb.put_str(panel_x + w, y, " edge:", value);
        fb.put_str(panel_x + w + 6, y, status.out_of_range.as_str(), value);
        y = y.saturating_add(1);
        let w = fb.put_i64(panel_x, y, status.rooms as i64, value);
        fb.put_str(panel_x + w, y, " rooms", value);
        y = y.saturating_add(1);
        let w = fb.put_i64(panel_x, y, status.solid as i64, value);
        fb.put_str(panel_x + w, y, " solid", value);
        y = y.saturating_add(2);

        let dim = CellStyle { dim: true, ..value };
        for line in ["arrows/hjkl move", "enter/r  new map", "q        quit"] {
            if y >= screen.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}
