//! Headless Block Cascade driver.
//!
//! Runs the engine on a fixed tick with an optional scripted command cycle
//! and prints a JSON observation line for every settled piece, plus one
//! final line.

use std::io::{self, BufWriter, Write};

use anyhow::{anyhow, Result};
use clap::Parser;

use calm_arcade::config::{parse_drop_ms, parse_seed, ArcadeConfig};
use calm_arcade::core::GameState;
use calm_arcade::logging;
use calm_arcade::observe::{build_observation, CascadeObservation};
use calm_arcade::types::{GameAction, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "cascade-sim")]
#[command(about = "Run Block Cascade headless and print JSON observations")]
struct Cli {
    /// RNG seed, decimal or 0x-hex
    #[arg(long, value_parser = |s: &str| parse_seed(s).map_err(|e| e.to_string()))]
    seed: Option<u32>,
    /// Gravity interval in milliseconds
    #[arg(long, value_parser = |s: &str| parse_drop_ms(s).map_err(|e| e.to_string()))]
    drop_ms: Option<u32>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,
    /// Milliseconds per tick
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,
    /// Comma-separated commands applied one per `every` ticks, cycling
    /// (e.g. "moveLeft,rotate,softDrop")
    #[arg(long, default_value = "")]
    script: String,
    /// Ticks between scripted commands
    #[arg(long, default_value_t = 10)]
    every: u64,
}

fn parse_script(script: &str) -> Result<Vec<GameAction>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| GameAction::from_str(s).ok_or_else(|| anyhow!("unknown command in script: {s}")))
        .collect()
}

fn write_line(out: &mut impl Write, obs: &CascadeObservation) -> Result<()> {
    serde_json::to_writer(&mut *out, obs)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Print an observation if a piece settled since the last call.
fn emit_lock(game: &mut GameState, step: u64, out: &mut impl Write) -> Result<u64> {
    let Some(event) = game.take_last_event() else {
        return Ok(0);
    };
    write_line(out, &build_observation(&game.snapshot(), step, Some(event)))?;
    Ok(1)
}

fn main() -> Result<()> {
    logging::init_stderr()?;
    let cli = Cli::parse();

    let env = ArcadeConfig::from_env();
    let seed = cli.seed.unwrap_or(env.seed);
    let drop_ms = cli.drop_ms.unwrap_or(env.drop_interval_ms);
    let script = parse_script(&cli.script)?;
    let every = cli.every.max(1);

    tracing::info!(seed, drop_ms, ticks = cli.ticks, commands = script.len(), "simulation starting");

    let mut game = GameState::with_drop_interval(seed, drop_ms);
    game.start();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut locks = 0u64;

    for step in 0..cli.ticks {
        if !script.is_empty() && step % every == 0 {
            let action = script[((step / every) as usize) % script.len()];
            game.apply_action(action);
            locks += emit_lock(&mut game, step, &mut out)?;
        }
        game.tick(cli.tick_ms);
        locks += emit_lock(&mut game, step, &mut out)?;
    }

    write_line(&mut out, &build_observation(&game.snapshot(), cli.ticks, None))?;
    out.flush()?;

    tracing::info!(locks, score = game.score(), lines = game.lines(), "simulation finished");
    Ok(())
}
