//! Terminal Quadris runner (default binary).
//!
//! It uses crossterm for input and a framebuffer-based renderer. The
//! binary owns the gravity timer: a single deadline re-armed from
//! `Game::tick_interval` after start and after every tick, so a restart
//! or a speed-up never leaves a stale timer pending.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use quadris::core::display::Frontend;
use quadris::core::Game;
use quadris::input::{handle_key_event, KeyCommand};
use quadris::term::{FrameBuffer, GameScreen, GridCanvas, StatusHud, TerminalRenderer, Viewport};

/// Poll timeout while no session is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut game = Game::new(seed);
    let mut board = GridCanvas::board();
    let mut preview = GridCanvas::preview();
    let mut hud = StatusHud::new();

    game.start(&mut Frontend {
        board: &mut board,
        preview: &mut preview,
        hud: &mut hud,
    });
    let mut deadline = Instant::now() + game.tick_interval();

    let screen = GameScreen::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        screen.compose_into(&board, &preview, &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Wait for input, but never past the gravity deadline.
        let timeout = if game.is_running() {
            deadline.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key_event(key) {
                        Some(KeyCommand::Quit) => return Ok(()),
                        Some(KeyCommand::Restart) => {
                            game.start(&mut Frontend {
                                board: &mut board,
                                preview: &mut preview,
                                hud: &mut hud,
                            });
                            deadline = Instant::now() + game.tick_interval();
                        }
                        Some(KeyCommand::Play(action)) => {
                            game.handle_input(
                                action,
                                &mut Frontend {
                                    board: &mut board,
                                    preview: &mut preview,
                                    hud: &mut hud,
                                },
                            );
                        }
                        None => {}
                    }
                }
            }
        }

        if game.is_running() && Instant::now() >= deadline {
            game.tick(&mut Frontend {
                board: &mut board,
                preview: &mut preview,
                hud: &mut hud,
            });
            // The tick may have changed the period; re-arm from the game.
            deadline = Instant::now() + game.tick_interval();
        }
    }
}
