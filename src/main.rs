//! Isometric dungeon viewer (default binary).
//!
//! Runs the frame loop: read held buttons, step the session (regenerate,
//! move, redraw dirty edges), wait out the rest of the frame while collecting
//! key events, then present the tile window on the terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use iso_dungeon::config::Args;
use iso_dungeon::core::timing_seed;
use iso_dungeon::engine::Session;
use iso_dungeon::input::{should_quit, InputHandler};
use iso_dungeon::logging;
use iso_dungeon::term::{FrameBuffer, MapView, Screen, StatusView, TerminalRenderer};
use iso_dungeon::types::FRAME_MS;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let config = args.session_config()?;
    let mut session = Session::new(config);
    let mut input = InputHandler::new().with_key_release_timeout_ms(args.key_timeout_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &mut input);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn status_of(session: &Session) -> StatusView {
    let grid = session.grid();
    StatusView {
        camera: session.camera(),
        seed: session.seed(),
        rooms: session.rooms().len() as u16,
        solid: grid.solid_count(),
        side: grid.side() as u16,
        out_of_range: grid.out_of_range(),
    }
}

/// Collect key events until `deadline`. Returns `false` when the user quits.
fn pump_input(
    input: &mut InputHandler,
    term: &mut TerminalRenderer,
    screen_dirty: &mut bool,
    deadline: Instant,
) -> Result<bool> {
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if !event::poll(timeout)? {
            return Ok(true);
        }
        match event::read()? {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if should_quit(key) {
                        return Ok(false);
                    }
                    let _ = input.handle_key_press(key.code);
                }
                KeyEventKind::Release => input.handle_key_release(key.code),
            },
            Event::Resize(w, h) => {
                log::debug!("terminal resized to {}x{}", w, h);
                term.invalidate();
                *screen_dirty = true;
            }
            _ => {}
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session, input: &mut InputHandler) -> Result<()> {
    let view = MapView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut deadline = Instant::now();
    let mut screen_dirty = true;

    loop {
        // Update.
        let held = input.held();
        let report = session.step(held, timing_seed);

        // Wait for the frame boundary.
        deadline += frame;
        let now = Instant::now();
        if deadline < now {
            // Fell behind (slow terminal); don't try to catch up.
            deadline = now;
        }
        if !pump_input(input, term, &mut screen_dirty, deadline)? {
            return Ok(());
        }

        // Present.
        if report.mask.is_empty() && !screen_dirty {
            continue;
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = status_of(session);
        view.render_into(session.tiles(), Some(&status), Screen::new(w, h), &mut fb);
        term.present_swap(&mut fb)?;
        screen_dirty = false;
    }
}
