//! Terminal Flappy Bird runner.
//!
//! One cooperative loop: the clock's tick is the single sleep point per
//! frame; pending key events are drained without blocking right after it,
//! so the swing impulse applies atomically between frames.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::core::{FrameClock, Game};
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::term::{GameView, TerminalRenderer, Viewport};
use tui_flappy::types::{GameAction, FRAMES_PER_SECOND};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut clock = FrameClock::new(FRAMES_PER_SECOND);
    let mut game = Game::new(rand::thread_rng(), clock.now_ms());
    let view = GameView;

    loop {
        let now_ms = clock.tick();

        // Drain whatever arrived during the sleep; never block here.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(GameAction::Flap) = handle_key_event(key) {
                        game.swing(now_ms);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        game.step(now_ms);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h), now_ms);
        term.draw(&fb)?;
    }
}
