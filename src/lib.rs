//! Isometric dungeon viewer (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `iso_dungeon::{core,engine,input,term,types}` and adds
//! the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use iso_dungeon_core as core;
pub use iso_dungeon_engine as engine;
pub use iso_dungeon_input as input;
pub use iso_dungeon_term as term;
pub use iso_dungeon_types as types;
