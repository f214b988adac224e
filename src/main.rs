//! Calm Arcade terminal runner (default binary).
//!
//! crossterm input, a framebuffer renderer and a fixed 16ms tick. Logs go to
//! a file only, since the UI owns the terminal.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use calm_arcade::app::App;
use calm_arcade::config::{log_rejected, parse_drop_ms, parse_seed, parse_tab, ArcadeConfig};
use calm_arcade::input::map_key;
use calm_arcade::logging;
use calm_arcade::term::{ArcadeView, FrameBuffer, RedrawGate, TerminalRenderer, Viewport};
use calm_arcade::types::{Tab, TICK_MS};

/// Static screens are still redrawn this often.
const KEEP_ALIVE_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(name = "calm-arcade")]
#[command(about = "Tile Match, Relaxed Solitaire and Block Cascade in the terminal")]
struct Cli {
    /// RNG seed, decimal or 0x-hex (default: wall clock)
    #[arg(long, value_parser = |s: &str| parse_seed(s).map_err(|e| e.to_string()))]
    seed: Option<u32>,
    /// Block Cascade gravity interval in milliseconds
    #[arg(long, value_parser = |s: &str| parse_drop_ms(s).map_err(|e| e.to_string()))]
    drop_ms: Option<u32>,
    /// Tab shown at launch: tiles, solitaire or cascade
    #[arg(long, value_parser = |s: &str| parse_tab(s).map_err(|e| e.to_string()))]
    tab: Option<Tab>,
    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(self, mut config: ArcadeConfig) -> ArcadeConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ms) = self.drop_ms {
            config.drop_interval_ms = ms;
        }
        if let Some(tab) = self.tab {
            config.start_tab = tab;
        }
        if self.log_file.is_some() {
            config.log_path = self.log_file;
        }
        config
    }
}

fn main() -> Result<()> {
    // The subscriber depends on the config, so env warnings wait for it.
    let (env_config, rejected) = ArcadeConfig::parse_env();
    let config = Cli::parse().apply(env_config);
    if let Some(path) = &config.log_path {
        logging::init_file(path)?;
    }
    log_rejected(&rejected);
    tracing::info!(
        seed = config.seed,
        drop_ms = config.drop_interval_ms,
        tab = config.start_tab.title(),
        "calm arcade starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    tracing::info!("calm arcade exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &ArcadeConfig) -> Result<()> {
    let mut app = App::new(config);
    let view = ArcadeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut gate = RedrawGate::new(KEEP_ALIVE_MS);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if gate.should_draw(now_ms, app.fingerprint(), app.is_animating()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&app.frame(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Terminal auto-repeat counts as a press.
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(command) = map_key(app.active_tab(), key) {
                        app.handle_command(command);
                        if app.should_quit() {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    gate.force();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
