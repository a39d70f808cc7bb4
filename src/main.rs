//! Terminal blockfall runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameSession;
use blockfall::input::{handle_key_event, repeatable, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let seed = std::process::id();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = GameSession::new(seed);

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            game.apply_action(action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys repeat movement only; rotations and drops
                        // are edge-triggered.
                        if let Some(action) = handle_key_event(key) {
                            if repeatable(action) {
                                game.apply_action(action);
                            }
                        }
                    }
                    KeyEventKind::Release => {}
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
