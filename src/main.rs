//! Turret Arena - headless entry point
//!
//! Plays one session with the autopilot controller and prints the summary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use turret_arena::autopilot::Autopilot;
use turret_arena::consts::TICK_RATE;
use turret_arena::input::Controller;
use turret_arena::platform::FrameClock;
use turret_arena::renderer::ShapeBatch;
use turret_arena::session::Session;
use turret_arena::sim::Level;
use turret_arena::GameConfig;

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "TURRET_ARENA_CONFIG";

/// Give up after ten minutes of play
const MAX_TICKS: u64 = 10 * 60 * TICK_RATE as u64;

fn load_config() -> anyhow::Result<GameConfig> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            log::info!("Loading config from {}", path.display());
            GameConfig::load(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    config.validate().context("invalid config")?;
    Ok(config)
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Turret Arena starting...");

    let config = load_config()?;
    let seed = config.seed.unwrap_or_else(wall_clock_seed);
    log::info!("Game initialized with seed: {seed}");

    let controls = config.controls;
    let controller = Controller::open(vec![Autopilot::new(controls)], config.device_index, controls)
        .context("no usable controller")?;

    let level = Level::new(config, seed);
    let mut session = Session::new(
        level,
        controller,
        ShapeBatch::default(),
        FrameClock::new(TICK_RATE),
    );

    let summary = session.run(|level| level.all_waves_cleared() || level.time_ticks >= MAX_TICKS);

    if summary.game_over {
        log::info!("Game over");
    } else if session.level().all_waves_cleared() {
        log::info!("All waves cleared");
    } else {
        log::warn!("Stopped after {} ticks", summary.ticks);
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
