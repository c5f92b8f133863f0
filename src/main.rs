//! Terminal Letterfall runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `letterfall-term`.
//!
//! Usage: `letterfall [config.json]`. The config path may also come from
//! `LETTERFALL_CONFIG`; `LETTERFALL_SEED`, `LETTERFALL_MODE` and
//! `LETTERFALL_DICT` override individual fields. Set `LETTERFALL_LOG=<file>`
//! to write logs (the terminal itself is in raw mode).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use letterfall::core::{Dictionary, DictionaryLoader, GameConfig, GameState};
use letterfall::input::{handle_key_event, should_quit, InputHandler, KeyCommand};
use letterfall::term::{
    CascadePlayback, FrameBuffer, GameView, HudView, TerminalRenderer, Viewport,
};
use letterfall::types::{GridLayout, InputEvent, TICK_MS};

const ENV_CONFIG: &str = "LETTERFALL_CONFIG";
const ENV_LOG: &str = "LETTERFALL_LOG";

fn main() -> Result<()> {
    let config = load_config()?;
    init_tracing()?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_config() -> Result<GameConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(ENV_CONFIG).ok());
    let mut config = match path {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => GameConfig::default(),
    };
    config.apply_env()?;
    Ok(config)
}

fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var(ENV_LOG) else {
        return Ok(());
    };
    let file = std::fs::File::create(&path).with_context(|| format!("creating log file {path}"))?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("letterfall=debug,letterfall_core=debug"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config.clone())?;
    info!(seed = config.seed, mode = config.mode.as_str(), "game started");

    let mut loader = match &config.dictionary_path {
        Some(path) => Some(DictionaryLoader::spawn(
            path.clone(),
            config.min_word_length,
            config.max_word_length,
        )),
        None => {
            game.install_oracle(Dictionary::sample(
                config.min_word_length,
                config.max_word_length,
            ));
            None
        }
    };

    let view = GameView::default();
    let mut input = InputHandler::new(config.grid_size);
    let mut playback = CascadePlayback::new(config.cascade_step_ms as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut layout = GridLayout::default();

    let started = Instant::now();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    loop {
        if let Some(result) = loader.as_mut().and_then(DictionaryLoader::try_take) {
            match result {
                Ok(dictionary) => game.install_oracle(dictionary),
                Err(err) => game.oracle_failed(err.to_string()),
            }
            loader = None;
            dirty = true;
        }

        let now_ms = started.elapsed().as_millis() as u64;
        dirty |= playback.update(now_ms);

        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let snap = game.snapshot();
            let hud = HudView {
                focus: Some(input.focus()),
                announce: playback.current(),
                history: playback.history().collect(),
            };
            layout = view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(KeyCommand::ToggleMode) => {
                        input.cancel();
                        game.set_mode(game.mode().toggled());
                    }
                    Some(KeyCommand::Reset) => {
                        input.cancel();
                        playback.clear();
                        game.reset();
                    }
                    Some(command) => {
                        if let Some(event) = input.on_key(command, game.mode()) {
                            apply(&mut game, event);
                        }
                    }
                    None => {}
                }
                dirty = true;
            }
            Event::Mouse(mouse) => {
                if let Some(event) = input.on_mouse(mouse, &layout, game.mode()) {
                    apply(&mut game, event);
                    dirty = true;
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }

        playback.push(game.take_events());
    }
}

fn apply(game: &mut GameState, event: InputEvent) {
    let outcome = game.apply_input(event);
    debug!(?event, ?outcome, "input");
}
