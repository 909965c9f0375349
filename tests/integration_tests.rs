//! Integration tests for the frame loop: keys → held buttons → session.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use iso_dungeon::engine::{Camera, Session, SessionConfig};
use iso_dungeon::input::InputHandler;
use iso_dungeon::types::{Buttons, TileUpdateMask};

#[test]
fn test_held_key_moves_camera_until_timeout() {
    let mut session = Session::new(SessionConfig::default());
    let mut input = InputHandler::new().with_key_release_timeout_ms(100);
    let t0 = Instant::now();

    let _ = session.step(input.held_at(t0), || 0);
    let _ = input.press_at(KeyCode::Right, t0);

    for frame in 1..=5u64 {
        let now = t0 + Duration::from_millis(16 * frame);
        let report = session.step(input.held_at(now), || 0);
        assert_eq!(report.mask, TileUpdateMask::RIGHT | TileUpdateMask::UP);
    }
    assert_eq!(session.camera(), Camera::new(5, 0));

    // No repeat press arrived: the key counts as released.
    let late = t0 + Duration::from_millis(500);
    let report = session.step(input.held_at(late), || 0);
    assert!(report.mask.is_empty());
    assert_eq!(session.camera(), Camera::new(5, 0));
}

#[test]
fn test_enter_regenerates_once_while_held() {
    let mut session = Session::new(SessionConfig::default());
    let mut input = InputHandler::new();
    let boot = session.grid().checksum();
    let t0 = Instant::now();

    let _ = input.press_at(KeyCode::Enter, t0);
    let mut seeds = 0;
    for frame in 0..4u64 {
        let now = t0 + Duration::from_millis(16 * frame);
        let report = session.step(input.held_at(now), || {
            seeds += 1;
            77
        });
        assert_eq!(report.regenerated, frame == 0);
    }
    assert_eq!(seeds, 1);
    assert_eq!(session.seed(), 77);
    assert_ne!(session.grid().checksum(), boot);

    input.handle_key_release(KeyCode::Enter);
    let report = session.step(input.held_at(t0 + Duration::from_millis(80)), || 0);
    assert!(!report.regenerated);

    let _ = input.press_at(KeyCode::Char('r'), t0 + Duration::from_millis(100));
    let report = session.step(input.held_at(t0 + Duration::from_millis(100)), || 78);
    assert!(report.regenerated);
    assert_eq!(session.seed(), 78);
}

#[test]
fn test_diagonal_hold_moves_both_axes() {
    let mut session = Session::new(SessionConfig::default());
    let _ = session.step(Buttons::empty(), || 0);

    for _ in 0..4 {
        let _ = session.step(Buttons::LEFT | Buttons::UP, || 0);
    }
    assert_eq!(session.camera(), Camera::new(-4, -4));
    assert_eq!(session.frame(), 5);
}

#[test]
fn test_camera_can_leave_the_map() {
    let mut session = Session::new(SessionConfig::default());
    for _ in 0..40 {
        let _ = session.step(Buttons::DOWN, || 0);
    }
    assert_eq!(session.camera(), Camera::new(0, 40));
    session.invalidate();
    let _ = session.step(Buttons::empty(), || 0);

    // Out past the edge the default policy shows solid floor.
    let tiles = session.tiles();
    let (ox, oy) = tiles.origin_tile();
    assert_eq!(tiles.get(ox + 10, oy + 17), 0);
}
