//! Level state: every entity the simulation owns
//!
//! Ownership runs one way: Level → Player → Turret → Projectiles, and
//! Level → Waves → Enemies. Obstacles are fixed at construction.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Enemy, Player};
use super::geometry::Obstacle;
use super::wave::Wave;
use crate::config::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running
    Playing,
    /// An enemy reached the player. Terminal: further ticks are no-ops.
    GameOver,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveActivated { wave: usize },
    ProjectileFired { angle: f32 },
    ProjectileBlocked,
    ProjectileLeftArena,
    EnemyKilled { wave: usize, score_value: u64 },
    PlayerCaught { wave: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub config: GameConfig,
    /// Seed the waves were generated from
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// All waves, pre-generated in table order
    pub waves: Vec<Wave>,
    /// Seconds each wave waits after the previous activation
    pub wave_intervals: Vec<f64>,
    /// Waves below this index are active
    pub active_waves: usize,
    /// Clock reading of the last activation (`None` before the first tick)
    pub activation_anchor: Option<f64>,
    pub score: u64,
    pub kills: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events recorded since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Level {
    /// Build a level from a validated configuration. Every wave is generated
    /// here; none is created lazily.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = config.screen.bounds();

        let player = Player::new(config.screen.center(), &config);
        let obstacles = config
            .obstacles
            .iter()
            .map(|o| Obstacle::new(o.rect()))
            .collect();
        let waves = config
            .waves
            .iter()
            .map(|spec| Wave::spawn(spec, &config.enemy, bounds, &mut rng))
            .collect();
        let wave_intervals = config.wave_intervals();

        Self {
            config,
            seed,
            phase: GamePhase::Playing,
            player,
            obstacles,
            waves,
            wave_intervals,
            active_waves: 0,
            activation_anchor: None,
            score: 0,
            kills: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Waves currently simulated and drawn
    pub fn active(&self) -> &[Wave] {
        &self.waves[..self.active_waves]
    }

    /// Live enemies of every active wave
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.active().iter().flat_map(|w| w.enemies.iter())
    }

    /// True once every wave is active and cleared
    pub fn all_waves_cleared(&self) -> bool {
        self.active_waves == self.waves.len() && self.waves.iter().all(Wave::is_cleared)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
