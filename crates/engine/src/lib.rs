//! Rendering engine - isometric projection and dirty-region redraw.
//!
//! Sits between the map ([`iso_dungeon_core::Grid`]) and a display that only
//! understands tile ids and a scroll offset ([`TileSink`]):
//!
//! - [`projector`]: one screen anchor → eight edge tiles
//! - [`viewport`]: camera, per-frame redraw mask, and the redraw loop
//! - [`tiles`]: the wrapping 32x32 tile buffer
//! - [`session`]: map + camera + buffer, stepped once per frame
//!
//! # Example
//!
//! ```
//! use iso_dungeon_engine::{Session, SessionConfig};
//! use iso_dungeon_engine::types::{Buttons, TileUpdateMask};
//!
//! let mut session = Session::new(SessionConfig::default());
//!
//! // The first frame redraws everything.
//! let report = session.step(Buttons::empty(), || 0);
//! assert_eq!(report.mask, TileUpdateMask::ALL);
//!
//! // Moving right exposes the right and top borders only.
//! let report = session.step(Buttons::RIGHT, || 0);
//! assert_eq!(report.mask, TileUpdateMask::RIGHT | TileUpdateMask::UP);
//! assert_eq!(report.camera.ew, 1);
//! ```

pub mod projector;
pub mod session;
pub mod tiles;
pub mod viewport;

pub use iso_dungeon_core as core;
pub use iso_dungeon_types as types;

pub use projector::{draw_tile, edge_tiles, project, Edge, EdgeRelation, EdgeTiles};
pub use session::{FrameReport, Session, SessionConfig};
pub use tiles::{wrap, TileBuffer, TileSink};
pub use viewport::{draw_tiles, Camera, FrameUpdate, Viewport};
