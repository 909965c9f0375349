//! Viewport and dirty-region tracking.
//!
//! The camera moves one grid unit per held direction per frame. Because the
//! tile buffer wraps and the display scrolls over it, a one-unit move only
//! exposes the screen border it moved toward; [`Viewport::advance`] works out
//! which borders those are and [`draw_tiles`] redraws just those anchors.

use iso_dungeon_core::Grid;

use crate::projector::draw_tile;
use crate::tiles::TileSink;
use crate::types::{
    Buttons, TileUpdateMask, ANCHOR_SPAN_X, ANCHOR_SPAN_Y, ANCHOR_STEP_X, ANCHOR_STEP_Y, TILE_PX,
};

/// Camera position in grid units. Unbounded; cells past the map read as the
/// grid's out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Camera {
    pub ew: i32,
    pub sn: i32,
}

impl Camera {
    pub fn new(ew: i32, sn: i32) -> Self {
        Self { ew, sn }
    }

    /// Background scroll in tiles: `(2 * (ew + sn), sn - ew)`.
    pub fn scroll_tiles(&self) -> (i32, i32) {
        (
            self.ew.wrapping_add(self.sn).wrapping_mul(2),
            self.sn.wrapping_sub(self.ew),
        )
    }

    /// Background scroll in pixels.
    pub fn scroll_px(&self) -> (i32, i32) {
        let (x, y) = self.scroll_tiles();
        (x.wrapping_mul(TILE_PX), y.wrapping_mul(TILE_PX))
    }
}

/// Result of one [`Viewport::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUpdate {
    pub mask: TileUpdateMask,
    pub camera: Camera,
}

impl FrameUpdate {
    pub fn scroll_px(&self) -> (i32, i32) {
        self.camera.scroll_px()
    }

    pub fn is_idle(&self) -> bool {
        self.mask.is_empty()
    }
}

/// Owns the camera and decides what to redraw each frame.
#[derive(Debug, Clone)]
pub struct Viewport {
    camera: Camera,
    needs_full: bool,
}

impl Viewport {
    /// Starts at the origin with a full redraw pending.
    pub fn new() -> Self {
        Self::with_camera(Camera::default())
    }

    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            needs_full: true,
        }
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Request a full redraw on the next frame (new map, resized display).
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    /// Apply this frame's held directions and compute the redraw mask.
    pub fn advance(&mut self, held: Buttons) -> FrameUpdate {
        let mut mask = TileUpdateMask::empty();
        for dir in held.directions() {
            let (dew, dsn) = dir.delta();
            self.camera.ew = self.camera.ew.wrapping_add(dew);
            self.camera.sn = self.camera.sn.wrapping_add(dsn);
            mask |= dir.update_mask();
        }

        if self.needs_full {
            self.needs_full = false;
            mask = TileUpdateMask::ALL;
        }

        FrameUpdate {
            mask,
            camera: self.camera,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Redraw the anchors selected by `update.mask`, then issue one scroll
/// command. An empty mask does nothing at all.
pub fn draw_tiles<S: TileSink + ?Sized>(grid: &Grid, sink: &mut S, update: FrameUpdate) {
    let mask = update.mask;
    if mask.is_empty() {
        return;
    }

    let camera = update.camera;
    let bg = camera.scroll_tiles();
    let last_x = ANCHOR_SPAN_X - 2;
    let last_y = ANCHOR_SPAN_Y - 2;

    if mask.contains(TileUpdateMask::ALL) {
        for y in (0..ANCHOR_SPAN_Y).step_by(ANCHOR_STEP_Y as usize) {
            for x in (0..ANCHOR_SPAN_X).step_by(ANCHOR_STEP_X as usize) {
                draw_tile(grid, sink, x, y, camera, bg);
            }
        }
    } else {
        if mask.contains(TileUpdateMask::RIGHT) {
            for y in (0..ANCHOR_SPAN_Y).step_by(ANCHOR_STEP_Y as usize) {
                draw_tile(grid, sink, last_x, y, camera, bg);
            }
        }
        if mask.contains(TileUpdateMask::LEFT) {
            for y in (0..ANCHOR_SPAN_Y).step_by(ANCHOR_STEP_Y as usize) {
                draw_tile(grid, sink, 0, y, camera, bg);
            }
        }
        if mask.contains(TileUpdateMask::DOWN) {
            for x in (0..ANCHOR_SPAN_X).step_by(ANCHOR_STEP_X as usize) {
                draw_tile(grid, sink, x, last_y, camera, bg);
            }
        }
        if mask.contains(TileUpdateMask::UP) {
            for x in (0..ANCHOR_SPAN_X).step_by(ANCHOR_STEP_X as usize) {
                draw_tile(grid, sink, x, 0, camera, bg);
            }
        }
    }

    let (px, py) = update.scroll_px();
    sink.set_background_scroll(px, py);
}
