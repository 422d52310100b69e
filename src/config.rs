//! Game configuration
//!
//! Every size, speed and color the simulation uses lives here and is passed
//! into constructors. `Default` reproduces the stock arena; a JSON document
//! can override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::sim::geometry::{Bounds, Rect};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);

    /// Normalized RGBA for vertex colors
    pub fn rgba(self) -> [f32; 4] {
        let [r, g, b] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }
}

/// Visible play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
    pub background: Color,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 900.0,
            background: Color::BLACK,
        }
    }
}

impl ScreenConfig {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick at full stick deflection
    pub speed: f32,
    pub color: Color,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 75.0,
            speed: 5.0,
            color: Color([34, 139, 34]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretConfig {
    /// Distance from the player center to the muzzle
    pub length: f32,
    /// Barrel line thickness
    pub thickness: f32,
    pub color: Color,
    /// Stick deflection at which an aim direction becomes the held peak angle
    pub aim_threshold: f32,
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self {
            length: 55.0,
            thickness: 5.0,
            color: Color([105, 105, 105]),
            aim_threshold: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
    pub color: Color,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            speed: 10.0,
            color: Color([255, 215, 0]),
        }
    }
}

/// Enemy body size; speed, color and score come from the wave table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 40.0,
        }
    }
}

/// One static obstacle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ObstacleSpec {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One row of the wave table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSpec {
    pub enemies: usize,
    /// Pixels per tick
    pub speed: f32,
    pub color: Color,
    /// Score credited per kill
    pub score_value: u64,
    /// Seconds after the previous wave's activation (or session start for
    /// the first wave) before this wave becomes active
    pub delay_secs: f64,
}

/// Controller axis and button indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlMap {
    pub move_x: usize,
    pub move_y: usize,
    pub aim_x: usize,
    pub aim_y: usize,
    pub fire: usize,
}

impl Default for ControlMap {
    fn default() -> Self {
        Self {
            move_x: 0,
            move_y: 1,
            aim_x: 2,
            aim_y: 3,
            fire: 5,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub player: PlayerConfig,
    pub turret: TurretConfig,
    pub projectile: ProjectileConfig,
    pub enemy: EnemyConfig,

    // === Arena ===
    pub obstacle_color: Color,
    pub obstacles: Vec<ObstacleSpec>,
    pub waves: Vec<WaveSpec>,

    // === Host ===
    pub controls: ControlMap,
    /// Index of the controller to open
    pub device_index: usize,
    /// RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    pub hud_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        let block = |x: f32, y: f32| ObstacleSpec {
            x,
            y,
            width: 60.0,
            height: 60.0,
        };

        Self {
            screen: ScreenConfig::default(),
            player: PlayerConfig::default(),
            turret: TurretConfig::default(),
            projectile: ProjectileConfig::default(),
            enemy: EnemyConfig::default(),

            obstacle_color: Color([210, 180, 140]),
            obstacles: vec![
                block(400.0, 200.0),
                block(1140.0, 200.0),
                block(400.0, 640.0),
                block(1140.0, 640.0),
                block(770.0, 150.0),
                block(770.0, 690.0),
            ],
            waves: vec![
                WaveSpec {
                    enemies: 5,
                    speed: 2.0,
                    color: Color([255, 0, 0]),
                    score_value: 10,
                    delay_secs: 0.0,
                },
                WaveSpec {
                    enemies: 8,
                    speed: 2.5,
                    color: Color([255, 140, 0]),
                    score_value: 20,
                    delay_secs: 30.0,
                },
                WaveSpec {
                    enemies: 12,
                    speed: 3.0,
                    color: Color([148, 0, 211]),
                    score_value: 30,
                    delay_secs: 20.0,
                },
            ],

            controls: ControlMap::default(),
            device_index: 0,
            seed: None,
            hud_color: Color::WHITE,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ArenaError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Per-wave activation delays, in wave order
    pub fn wave_intervals(&self) -> Vec<f64> {
        self.waves.iter().map(|w| w.delay_secs).collect()
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ArenaError> {
        fn positive(name: &str, value: f32) -> Result<(), ArenaError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ArenaError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        positive("screen.width", self.screen.width)?;
        positive("screen.height", self.screen.height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("projectile.radius", self.projectile.radius)?;
        positive("turret.thickness", self.turret.thickness)?;

        if self.player.width > self.screen.width || self.player.height > self.screen.height {
            return Err(ArenaError::InvalidConfig(
                "player does not fit on screen".into(),
            ));
        }
        if self.enemy.width > self.screen.width || self.enemy.height > self.screen.height {
            return Err(ArenaError::InvalidConfig(
                "enemy does not fit on screen".into(),
            ));
        }
        if !(self.turret.aim_threshold > 0.0 && self.turret.aim_threshold <= 1.0) {
            return Err(ArenaError::InvalidConfig(format!(
                "turret.aim_threshold must be in (0, 1], got {}",
                self.turret.aim_threshold
            )));
        }

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            positive(&format!("obstacles[{i}].width"), obstacle.width)?;
            positive(&format!("obstacles[{i}].height"), obstacle.height)?;
            let rect = obstacle.rect();
            if rect.left() < 0.0
                || rect.top() < 0.0
                || rect.right() > self.screen.width
                || rect.bottom() > self.screen.height
            {
                return Err(ArenaError::InvalidConfig(format!(
                    "obstacles[{i}] lies outside the screen"
                )));
            }
        }

        for (i, wave) in self.waves.iter().enumerate() {
            if !(wave.speed.is_finite() && wave.speed >= 0.0) {
                return Err(ArenaError::InvalidConfig(format!(
                    "waves[{i}].speed must be non-negative"
                )));
            }
            if !(wave.delay_secs.is_finite() && wave.delay_secs >= 0.0) {
                return Err(ArenaError::InvalidConfig(format!(
                    "waves[{i}].delay_secs must be non-negative"
                )));
            }
        }

        let player = Rect::centered(
            self.screen.center(),
            Vec2::new(self.player.width, self.player.height),
        );
        if self.obstacles.iter().any(|o| o.rect().intersects(&player)) {
            log::warn!("An obstacle overlaps the player spawn; the player will start stuck");
        }

        Ok(())
    }
}
