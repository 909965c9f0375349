//! Grid module - bit-packed occupancy map
//!
//! The map is a square of `side` x `side` cells, one bit per cell, row-major.
//! A row is `side / 8` bytes; within a byte the most significant bit is the
//! lowest ew coordinate.
//! Coordinates: (ew, sn) where ew is the column and sn the row, both in `[0, side)`.
//! Anything outside that square reads as the configured [`OutOfRange`] value and
//! ignores writes.

use crate::types::{GridConfig, OutOfRange};

/// Bit-packed square occupancy grid. `true` is solid, `false` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    config: GridConfig,
    bits: Vec<u8>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(config: GridConfig) -> Self {
        let len = config.row_bytes() * config.side();
        Self {
            config,
            bits: vec![0; len],
        }
    }

    /// Locate the byte and bit mask of an in-range cell.
    #[inline(always)]
    fn locate(&self, ew: i32, sn: i32) -> Option<(usize, u8)> {
        let side = self.config.side() as i32;
        if ew < 0 || sn < 0 || ew >= side || sn >= side {
            return None;
        }
        let byte = (sn as usize) * self.config.row_bytes() + ((ew as usize) >> 3);
        let bit = 7 - (ew & 0x07) as u8;
        Some((byte, 1 << bit))
    }

    /// Read the cell at `(ew + ew_offset, sn + sn_offset)`.
    #[inline]
    pub fn get(&self, ew: i32, sn: i32, ew_offset: i32, sn_offset: i32) -> bool {
        match self.locate(ew.wrapping_add(ew_offset), sn.wrapping_add(sn_offset)) {
            Some((byte, mask)) => self.bits[byte] & mask != 0,
            None => self.config.out_of_range().value(),
        }
    }

    /// Read the cell at `(ew, sn)` with no offset.
    #[inline]
    pub fn is_solid(&self, ew: i32, sn: i32) -> bool {
        self.get(ew, sn, 0, 0)
    }

    /// Write the cell at `(ew, sn)`. Out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, ew: i32, sn: i32, value: bool) {
        if let Some((byte, mask)) = self.locate(ew, sn) {
            if value {
                self.bits[byte] |= mask;
            } else {
                self.bits[byte] &= !mask;
            }
        }
    }

    /// Check if `(ew, sn)` lies inside the map
    pub fn in_bounds(&self, ew: i32, sn: i32) -> bool {
        self.locate(ew, sn).is_some()
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    pub fn side(&self) -> usize {
        self.config.side()
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn out_of_range(&self) -> OutOfRange {
        self.config.out_of_range()
    }

    /// The packed rows, `side / 8` bytes each.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Number of solid cells.
    pub fn solid_count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// FNV-1a 64-bit hash of the packed rows.
    pub fn checksum(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for &b in &self.bits {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
        h
    }

    /// Build a grid from ASCII rows (`#` solid, anything else empty), for tests.
    #[cfg(test)]
    pub fn from_rows(config: GridConfig, rows: &[&str]) -> Self {
        let mut grid = Self::new(config);
        for (sn, row) in rows.iter().enumerate() {
            for (ew, ch) in row.chars().enumerate() {
                grid.set(ew as i32, sn as i32, ch == '#');
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
