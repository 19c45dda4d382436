//! Sui Miners headless entry point
//!
//! Plays one round in demo mode and logs what happens. Rendering and input
//! belong to the web front end; this binary exercises the core on its own.
//!
//! Usage: sui-miners [--seed N] [--size WxH] [--config tuning.json] [--realtime]

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};

use sui_miners::sim::{GameEvent, GameState, Playfield};
use sui_miners::{Clock, GameConfig, ManualClock, RoundRunner, SystemClock};

/// ~60 Hz
const FRAME: Duration = Duration::from_millis(16);

struct Args {
    seed: Option<u64>,
    playfield: Playfield,
    config: Option<PathBuf>,
    realtime: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        seed: None,
        playfield: Playfield::new(1024.0, 768.0),
        config: None,
        realtime: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                let v = it.next().context("--seed needs a value")?;
                args.seed = Some(v.parse().with_context(|| format!("bad seed: {v}"))?);
            }
            "--size" => {
                let v = it.next().context("--size needs WxH")?;
                let (w, h) = v.split_once('x').with_context(|| format!("bad size: {v}"))?;
                args.playfield = Playfield::new(
                    w.parse().with_context(|| format!("bad width: {w}"))?,
                    h.parse().with_context(|| format!("bad height: {h}"))?,
                );
            }
            "--config" => {
                args.config = Some(PathBuf::from(it.next().context("--config needs a path")?));
            }
            "--realtime" => args.realtime = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config = GameConfig::from_json(&txt).context("parse config json")?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(config)
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::RoundStarted { seed, items } => {
            log::info!("Round started: seed {seed}, {items} items")
        }
        GameEvent::Shot { angle } => log::info!("Shoot at {angle:.1} deg"),
        GameEvent::Caught { item_id } => log::info!("Caught item {item_id}"),
        GameEvent::Missed => log::info!("Missed"),
        GameEvent::Scored { name, points, .. } => log::info!("Scored {name} +{points}"),
        GameEvent::RoundEnded { final_score } => log::info!("Game over! Score: {final_score}"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sui Miners (headless) starting...");

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let seed = args
        .seed
        .unwrap_or_else(|| SystemClock.now_ms() as u64);

    let mut runner = RoundRunner::new(GameState::new(seed, config));
    runner.set_autoplay(true);
    if !runner.start(args.playfield) {
        bail!(
            "playfield {}x{} is not usable",
            args.playfield.width,
            args.playfield.height
        );
    }

    let score = if args.realtime {
        runner.run(&SystemClock, FRAME, std::thread::sleep, log_event)
    } else {
        let clock = ManualClock::new(0.0);
        runner.run(&clock, FRAME, |d| clock.advance(d), log_event)
    };

    println!(
        "Final score: {} ({} of {} items left, {} frames)",
        score,
        runner.state.items.len(),
        runner.state.config.total_items,
        runner.frames()
    );
    Ok(())
}
