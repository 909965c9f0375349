//! Command-line configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::core::{timing_seed, RoomParams};
use crate::engine::SessionConfig;
use crate::types::{GridConfig, OutOfRange, DEFAULT_MAP_SIZE};

/// What cells past the map edge look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgePolicy {
    /// The map is walled in.
    Solid,
    /// The map ends in void.
    Empty,
}

impl From<EdgePolicy> for OutOfRange {
    fn from(value: EdgePolicy) -> Self {
        match value {
            EdgePolicy::Solid => OutOfRange::Solid,
            EdgePolicy::Empty => OutOfRange::Empty,
        }
    }
}

/// Scrolling isometric dungeon viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "iso-dungeon")]
#[command(version, about = "Scroll an isometric dungeon; press Enter for a new one", long_about = None)]
pub struct Args {
    /// Seed for the first map (defaults to a timing-derived value)
    #[arg(short = 's', long)]
    pub seed: Option<u32>,

    /// Rooms in the first map (at most 10)
    #[arg(short = 'n', long, default_value_t = 5)]
    pub rooms: u8,

    /// Smallest room edge in the first map
    #[arg(long, default_value_t = 2)]
    pub min_room: u8,

    /// Largest room edge in the first map
    #[arg(long, default_value_t = 4)]
    pub max_room: u8,

    /// Map side in cells (power of two, 16..=128)
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAP_SIZE)]
    pub map_size: usize,

    /// What lies beyond the map edge
    #[arg(long, value_enum, default_value_t = EdgePolicy::Solid)]
    pub out_of_range: EdgePolicy,

    /// How long a key counts as held after its last press, in milliseconds
    #[arg(long, default_value_t = 150)]
    pub key_timeout_ms: u32,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Validate the map shape and build the session settings.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let grid = GridConfig::new(self.map_size, self.out_of_range.into())?;
        Ok(SessionConfig {
            grid,
            seed: self.seed.unwrap_or_else(timing_seed),
            initial: RoomParams::new(self.rooms, self.min_room, self.max_room),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_boot_map() {
        let args = Args::try_parse_from(["iso-dungeon", "--seed", "9"]).unwrap();
        let cfg = args.session_config().unwrap();
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.initial, RoomParams::new(5, 2, 4));
        assert_eq!(cfg.grid, GridConfig::default());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_edge_policy_and_size_are_parsed() {
        let args = Args::try_parse_from([
            "iso-dungeon",
            "-m",
            "128",
            "--out-of-range",
            "empty",
            "-n",
            "8",
        ])
        .unwrap();
        let cfg = args.session_config().unwrap();
        assert_eq!(cfg.grid.side(), 128);
        assert_eq!(cfg.grid.out_of_range(), OutOfRange::Empty);
        assert_eq!(cfg.initial.num_rooms, 8);
    }

    #[test]
    fn test_bad_map_size_is_an_error() {
        let args = Args::try_parse_from(["iso-dungeon", "-m", "48"]).unwrap();
        let err = args.session_config().unwrap_err();
        assert!(err.to_string().contains("power of two"));
    }

    #[test]
    fn test_unknown_edge_policy_is_rejected() {
        assert!(Args::try_parse_from(["iso-dungeon", "--out-of-range", "wall"]).is_err());
    }
}
