//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_2048::term`. The loop blocks on input: every key press is applied to
//! the game and the frame is redrawn.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;
use tui_2048::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _logger = config.init_logging()?;
    info!("starting: seed={:?}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.new_game());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game.snapshot();
    let mut announced_game_over = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if snap.game_over && !announced_game_over {
            info!("game over: score={} max_tile={}", snap.score, snap.max_tile);
            announced_game_over = true;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!("quit: score={} moves={}", game.score(), game.moves());
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if action == GameAction::Restart {
                        announced_game_over = false;
                    }
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
