//! Terminal 2048 runner (default binary).
//!
//! Plays in raw mode on the alternate screen using crossterm for input and the
//! framebuffer renderer for output. When a game ends the terminal is restored
//! and a line-based prompt offers a new game or quitting.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;
use log::info;

use tui_2048::config::Config;
use tui_2048::core::{Game, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Why the interactive loop returned.
enum Exit {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let config = Config::parse();

    let mut game = Game::with_sampler(config.size, config.sampler())
        .with_context(|| format!("cannot start a game with --size {}", config.size))?;
    info!("starting {0}x{0} game (seed: {1:?})", config.size, config.seed);

    let mut term = TerminalRenderer::new();
    loop {
        term.enter()?;
        let result = run(&mut term, &mut game);

        // Always try to restore terminal state.
        let _ = term.exit();
        match result? {
            Exit::Quit => return Ok(()),
            Exit::GameOver => {
                if !prompt_restart(&mut game)? {
                    return Ok(());
                }
            }
        }
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<Exit> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let Event::Key(key) = event::read()? else {
            // Resize or focus change: repaint everything.
            term.invalidate();
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(Exit::Quit);
        }
        // The GAME OVER frame stays up until the next key press.
        if game.is_over() {
            return Ok(Exit::GameOver);
        }
        if let Some(action) = handle_key_event(key) {
            game.apply_action(action)?;
        }
    }
}

/// Line-based fallback once a game has ended. Returns false to quit.
fn prompt_restart(game: &mut Game) -> Result<bool> {
    println!("{game}");
    let mut stdin = io::stdin().lock();
    let mut line = String::new();
    loop {
        println!("Press 'q' to quit\nPress 'r' to start a new game");
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim() {
            "r" => {
                game.reset();
                return Ok(true);
            }
            "q" => return Ok(false),
            _ => {}
        }
    }
}
