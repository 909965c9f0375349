//! Terminal input module.
//!
//! Maps `crossterm` key events onto the viewer's [`crate::types::Buttons`]
//! and turns a stream of key presses into a per-frame "held" mask, including
//! on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use iso_dungeon_types as types;

pub use handler::InputHandler;
pub use map::{button_for_key, should_quit};
