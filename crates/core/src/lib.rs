//! Core map logic - pure, deterministic, and testable
//!
//! This crate owns the dungeon map and everything that writes to it. It has
//! **no dependencies** on the terminal or on input handling:
//!
//! - **Deterministic**: the same seed always rebuilds the same map
//! - **Total**: every grid access is defined, every parameter is clamped
//! - **Compact**: one bit per cell
//!
//! # Module Structure
//!
//! - [`grid`]: bit-packed square occupancy grid with an out-of-range policy
//! - [`dungeon`]: room placement, corridor carving and noise decoration
//! - [`rng`]: reseedable LCG used by generation
//!
//! # Example
//!
//! ```
//! use iso_dungeon_core::{generate, Grid, RoomParams, SimpleRng};
//! use iso_dungeon_core::types::{GridConfig, OutOfRange};
//!
//! let config = GridConfig::new(32, OutOfRange::Solid).unwrap();
//! let mut grid = Grid::new(config);
//! let mut rng = SimpleRng::new(7);
//!
//! let rooms = generate(&mut grid, &mut rng, RoomParams::new(5, 2, 4));
//! let (ew, sn) = rooms[0].center();
//! assert!(grid.get(ew, sn, 0, 0));
//!
//! // Outside the map reads as the configured policy.
//! assert!(grid.get(-1, 0, 0, 0));
//! ```

pub mod dungeon;
pub mod grid;
pub mod rng;

pub use iso_dungeon_types as types;

// Re-export commonly used types for convenience
pub use dungeon::{carve_corridors, generate, place_rooms, scatter_noise, Room, RoomParams, Rooms};
pub use grid::Grid;
pub use rng::{timing_seed, SimpleRng};
