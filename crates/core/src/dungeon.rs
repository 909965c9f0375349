//! Dungeon module - procedural room and corridor carving
//!
//! A generation pass runs in three phases over a cleared [`Grid`]:
//!
//! 1. **Rooms**: up to [`MAX_ROOMS`] rectangles filled solid. Overlap is allowed.
//! 2. **Corridors**: an L-shaped path (horizontal leg, then vertical leg)
//!    between the centers of each consecutive pair of rooms, so every room is
//!    reachable from every other through solid cells.
//! 3. **Noise**: [`NOISE_TRIALS`] random cells, each set solid on a coin flip
//!    if currently empty. Noise never clears a cell.
//!
//! The sequence of RNG draws is fixed (per room: width, height, x, y; per
//! noise trial: x, y, then a coin only when the cell is empty), so a given RNG
//! state always produces the same map.
//!
//! # Example
//!
//! ```
//! use iso_dungeon_core::{generate, Grid, RoomParams, SimpleRng};
//!
//! let mut grid = Grid::default();
//! let mut rng = SimpleRng::new(42);
//! let rooms = generate(&mut grid, &mut rng, RoomParams::new(5, 2, 4));
//!
//! assert_eq!(rooms.len(), 5);
//! assert!(grid.solid_count() > 0);
//! ```

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{MAX_ROOMS, MAX_ROOM_SIZE, MIN_ROOM_SIZE, NOISE_TRIALS, ROOM_EDGE_MARGIN};

/// A placed room rectangle, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    /// Center cell, rounding toward the origin.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Every cell of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |sn| (self.x..self.x + self.width).map(move |ew| (ew, sn)))
    }
}

/// Rooms placed by one pass.
pub type Rooms = ArrayVec<Room, MAX_ROOMS>;

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomParams {
    pub num_rooms: u8,
    pub min_size: u8,
    pub max_size: u8,
}

impl RoomParams {
    pub fn new(num_rooms: u8, min_size: u8, max_size: u8) -> Self {
        Self {
            num_rooms,
            min_size,
            max_size,
        }
    }

    /// Bring parameters into the supported range instead of rejecting them.
    ///
    /// Room count is capped at [`MAX_ROOMS`], sizes are held to
    /// `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]`, and an inverted range collapses onto
    /// `max_size`.
    pub fn clamped(self) -> Self {
        let num_rooms = self.num_rooms.min(MAX_ROOMS as u8);
        let max_size = self.max_size.min(MAX_ROOM_SIZE);
        let mut min_size = self.min_size.max(MIN_ROOM_SIZE);
        if min_size > max_size {
            min_size = max_size;
        }
        Self {
            num_rooms,
            min_size,
            max_size,
        }
    }

    /// Parameters for a user-requested regeneration: 5..=14 rooms (clamped to
    /// 10 when generating), minimum size 2..=4, maximum size 4..=7.
    pub fn random(rng: &mut SimpleRng) -> Self {
        let num_rooms = 5 + rng.next_range(10) as u8;
        let min_size = 2 + rng.next_range(3) as u8;
        let max_size = 4 + rng.next_range(4) as u8;
        Self::new(num_rooms, min_size, max_size)
    }
}

impl Default for RoomParams {
    fn default() -> Self {
        Self::new(5, 2, 4)
    }
}

/// Clear `grid` and run all three phases. Returns the rooms in placement order.
pub fn generate(grid: &mut Grid, rng: &mut SimpleRng, params: RoomParams) -> Rooms {
    let params = params.clamped();
    grid.clear();

    let rooms = place_rooms(grid, rng, params);
    carve_corridors(grid, &rooms);
    let added = scatter_noise(grid, rng);

    log::debug!(
        "generated map: rooms={} size={}..={} noise={} solid={}",
        rooms.len(),
        params.min_size,
        params.max_size,
        added,
        grid.solid_count()
    );
    rooms
}

/// Room phase. `params` must already be clamped.
///
/// Rooms start at least [`ROOM_EDGE_MARGIN`] cells from the low edges and
/// leave at least one empty column and row at the high edges.
pub fn place_rooms(grid: &mut Grid, rng: &mut SimpleRng, params: RoomParams) -> Rooms {
    let side = grid.side() as i32;
    let span = (params.max_size - params.min_size) as u32 + 1;
    let mut rooms = Rooms::new();

    for _ in 0..params.num_rooms {
        let width = params.min_size as i32 + rng.next_range(span) as i32;
        let height = params.min_size as i32 + rng.next_range(span) as i32;

        let x = ROOM_EDGE_MARGIN
            + rng.next_range((side - ROOM_EDGE_MARGIN - width) as u32) as i32;
        let y = ROOM_EDGE_MARGIN
            + rng.next_range((side - ROOM_EDGE_MARGIN - height) as u32) as i32;

        let room = Room {
            x,
            y,
            width,
            height,
        };
        for (ew, sn) in room.cells() {
            grid.set(ew, sn, true);
        }
        if rooms.try_push(room).is_err() {
            break;
        }
    }

    rooms
}

/// Corridor phase: L-shaped paths between consecutive room centers.
///
/// The horizontal leg runs along the first room's center row and stops one
/// short of the second center column; the vertical leg runs along that column
/// and includes both end rows.
pub fn carve_corridors(grid: &mut Grid, rooms: &[Room]) {
    for pair in rooms.windows(2) {
        let (x1, y1) = pair[0].center();
        let (x2, y2) = pair[1].center();

        let dx = if x1 < x2 { 1 } else { -1 };
        let mut x = x1;
        while x != x2 {
            grid.set(x, y1, true);
            x += dx;
        }

        let dy = if y1 < y2 { 1 } else { -1 };
        let mut y = y1;
        while y != y2 + dy {
            grid.set(x2, y, true);
            y += dy;
        }
    }
}

/// Noise phase. Returns how many cells were turned solid.
pub fn scatter_noise(grid: &mut Grid, rng: &mut SimpleRng) -> u32 {
    let side = grid.side() as u32;
    let mut added = 0;
    for _ in 0..NOISE_TRIALS {
        let x = rng.next_range(side) as i32;
        let y = rng.next_range(side) as i32;
        if !grid.is_solid(x, y) && rng.next_bool() {
            grid.set(x, y, true);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridConfig, OutOfRange};

    #[test]
    fn test_clamp_rules() {
        assert_eq!(RoomParams::new(20, 1, 12).clamped(), RoomParams::new(10, 2, 8));
        assert_eq!(RoomParams::new(3, 6, 4).clamped(), RoomParams::new(3, 4, 4));
        assert_eq!(RoomParams::new(3, 0, 1).clamped(), RoomParams::new(3, 1, 1));
        assert_eq!(RoomParams::new(5, 2, 4).clamped(), RoomParams::new(5, 2, 4));
    }

    #[test]
    fn test_room_center_rounds_toward_origin() {
        let room = Room {
            x: 4,
            y: 10,
            width: 3,
            height: 4,
        };
        assert_eq!(room.center(), (5, 12));
        assert_eq!(room.cells().count(), 12);
        assert!(room.cells().any(|c| c == (6, 13)));
        assert!(!room.cells().any(|c| c == (7, 13)));
    }

    #[test]
    fn test_rooms_respect_margins() {
        let mut grid = Grid::default();
        let mut rng = SimpleRng::new(1);
        for _ in 0..50 {
            grid.clear();
            let rooms = place_rooms(&mut grid, &mut rng, RoomParams::new(10, 2, 8));
            for r in &rooms {
                assert!(r.x >= 2 && r.y >= 2, "{:?}", r);
                assert!(r.x + r.width <= 31, "{:?}", r);
                assert!(r.y + r.height <= 31, "{:?}", r);
                assert!((2..=8).contains(&r.width) && (2..=8).contains(&r.height));
            }
        }
    }

    #[test]
    fn test_corridor_shape_is_l() {
        let mut grid = Grid::default();
        let a = Room {
            x: 2,
            y: 2,
            width: 2,
            height: 2,
        };
        let b = Room {
            x: 10,
            y: 8,
            width: 2,
            height: 2,
        };
        carve_corridors(&mut grid, &[a, b]);

        // Horizontal leg on row 3 from ew 3 up to (not including) 11.
        for ew in 3..11 {
            assert!(grid.is_solid(ew, 3), "ew {}", ew);
        }
        // Vertical leg on column 11 from sn 3 through 9.
        for sn in 3..=9 {
            assert!(grid.is_solid(11, sn), "sn {}", sn);
        }
        assert_eq!(grid.solid_count(), 8 + 7);
    }

    #[test]
    fn test_corridor_runs_backwards() {
        let mut grid = Grid::default();
        let a = Room {
            x: 20,
            y: 20,
            width: 2,
            height: 2,
        };
        let b = Room {
            x: 4,
            y: 4,
            width: 2,
            height: 2,
        };
        carve_corridors(&mut grid, &[a, b]);
        assert!(grid.is_solid(21, 21));
        assert!(grid.is_solid(6, 21));
        assert!(grid.is_solid(5, 21));
        assert!(grid.is_solid(5, 5));
        assert!(!grid.is_solid(4, 21));
    }

    #[test]
    fn test_noise_never_clears() {
        let mut grid = Grid::default();
        for sn in 0..32 {
            for ew in 0..32 {
                grid.set(ew, sn, (ew + sn) % 3 == 0);
            }
        }
        let before = grid.clone();
        let mut rng = SimpleRng::new(5);
        scatter_noise(&mut grid, &mut rng);
        for sn in 0..32 {
            for ew in 0..32 {
                if before.is_solid(ew, sn) {
                    assert!(grid.is_solid(ew, sn));
                }
            }
        }
    }

    #[test]
    fn test_zero_rooms_only_noise() {
        let mut grid = Grid::default();
        let mut rng = SimpleRng::new(11);
        let rooms = generate(&mut grid, &mut rng, RoomParams::new(0, 2, 4));
        assert!(rooms.is_empty());
        assert!(grid.solid_count() <= NOISE_TRIALS);
    }

    #[test]
    fn test_generate_clears_previous_map() {
        let mut grid = Grid::from_rows(GridConfig::default(), &["################################"]);
        let mut rng = SimpleRng::new(2);
        generate(&mut grid, &mut rng, RoomParams::new(1, 2, 2));
        // One 2x2 room plus at most 30 noise cells; the full first row is gone.
        assert!(grid.solid_count() <= 4 + NOISE_TRIALS);
        assert!((0..32).any(|ew| !grid.is_solid(ew, 0)));
    }

    #[test]
    fn test_generation_ignores_out_of_range_policy() {
        let solid = GridConfig::default();
        let empty = solid.with_out_of_range(OutOfRange::Empty);

        let mut a = Grid::new(solid);
        let mut b = Grid::new(empty);
        generate(&mut a, &mut SimpleRng::new(77), RoomParams::new(8, 3, 6));
        generate(&mut b, &mut SimpleRng::new(77), RoomParams::new(8, 3, 6));
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    proptest::proptest! {
        #[test]
        fn test_clamped_params_are_usable(n in 0u8..=255, min in 0u8..=255, max in 0u8..=255) {
            let p = RoomParams::new(n, min, max).clamped();
            proptest::prop_assert!(p.num_rooms as usize <= MAX_ROOMS);
            proptest::prop_assert!(p.max_size <= MAX_ROOM_SIZE);
            proptest::prop_assert!(p.min_size <= p.max_size);
            if max >= MIN_ROOM_SIZE {
                proptest::prop_assert!(p.min_size >= MIN_ROOM_SIZE);
            }
        }
    }

    #[test]
    fn test_random_params_ranges() {
        let mut rng = SimpleRng::new(1234);
        for _ in 0..200 {
            let p = RoomParams::random(&mut rng);
            assert!((5..=14).contains(&p.num_rooms));
            assert!((2..=4).contains(&p.min_size));
            assert!((4..=7).contains(&p.max_size));
        }
    }
}
