//! Session - one viewer's map, camera and tile buffer, stepped once per frame.
//!
//! A frame is: read buttons → regenerate on a fresh START press → move the
//! camera → redraw the dirty region. Waiting for the frame boundary and
//! presenting the buffer are left to the caller.

use iso_dungeon_core::{generate, Grid, RoomParams, Rooms, SimpleRng};

use crate::tiles::TileBuffer;
use crate::types::{Buttons, GridConfig, TileUpdateMask};
use crate::viewport::{draw_tiles, Camera, Viewport};

/// Startup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid: GridConfig,
    pub seed: u32,
    /// Parameters for the boot-time map. Regenerated maps draw their own.
    pub initial: RoomParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            seed: 1,
            initial: RoomParams::default(),
        }
    }
}

/// What happened during one [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub regenerated: bool,
    pub mask: TileUpdateMask,
    pub camera: Camera,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    rng: SimpleRng,
    viewport: Viewport,
    tiles: TileBuffer,
    previous: Buttons,
    rooms: Rooms,
    seed: u32,
    frame: u64,
}

impl Session {
    /// Build the boot map. Nothing is drawn until the first [`step`](Self::step).
    pub fn new(config: SessionConfig) -> Self {
        let mut grid = Grid::new(config.grid);
        let mut rng = SimpleRng::new(config.seed);
        let rooms = generate(&mut grid, &mut rng, config.initial);
        log::info!(
            "boot map: seed={} side={} rooms={} out_of_range={}",
            config.seed,
            config.grid.side(),
            rooms.len(),
            config.grid.out_of_range().as_str()
        );

        Self {
            grid,
            rng,
            viewport: Viewport::new(),
            tiles: TileBuffer::new(),
            previous: Buttons::empty(),
            rooms,
            seed: config.seed,
            frame: 0,
        }
    }

    /// Advance one frame with the buttons currently held.
    ///
    /// `reseed` is only called when START was newly pressed this frame.
    pub fn step<F>(&mut self, held: Buttons, reseed: F) -> FrameReport
    where
        F: FnOnce() -> u32,
    {
        let pressed = held.newly_pressed(self.previous);
        self.previous = held;

        let regenerated = pressed.contains(Buttons::START);
        if regenerated {
            self.regenerate(reseed());
        }

        let update = self.viewport.advance(held);
        draw_tiles(&self.grid, &mut self.tiles, update);
        self.frame += 1;

        if !update.is_idle() {
            log::trace!(
                "frame {}: mask={:?} camera=({}, {})",
                self.frame,
                update.mask,
                update.camera.ew,
                update.camera.sn
            );
        }

        FrameReport {
            regenerated,
            mask: update.mask,
            camera: update.camera,
        }
    }

    /// Reseed, draw fresh parameters and rebuild the map. The camera stays put.
    pub fn regenerate(&mut self, seed: u32) {
        self.rng.reseed(seed);
        self.seed = seed;
        let params = RoomParams::random(&mut self.rng);
        self.rooms = generate(&mut self.grid, &mut self.rng, params);
        self.viewport.invalidate();
        log::info!(
            "regenerated: seed={} rooms={} size={}..={}",
            seed,
            self.rooms.len(),
            params.min_size,
            params.max_size
        );
    }

    /// Force a full redraw next frame.
    pub fn invalidate(&mut self) {
        self.viewport.invalidate();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &TileBuffer {
        &self.tiles
    }

    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    pub fn rooms(&self) -> &Rooms {
        &self.rooms
    }

    /// Seed of the map currently shown.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
