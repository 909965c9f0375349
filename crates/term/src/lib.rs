//! Terminal display module.
//!
//! Plays the part of the tile display: a tile-buffer viewer that renders into
//! a simple framebuffer, and a renderer that flushes that framebuffer to the
//! terminal with per-run diffing.
//!
//! Goals:
//! - Keep `engine` free of I/O and testable
//! - Redraw only what changed on the terminal, mirroring the engine's dirty regions
//! - Keep diamond tiles readable (2 chars wide per tile)

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use iso_dungeon_engine as engine;
pub use iso_dungeon_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{tile_glyph, MapView, Screen, StatusView};
pub use renderer::{encode_diff_into, encode_full_into, PresentStats, TerminalRenderer};
