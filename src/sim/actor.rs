//! Player and enemy actors
//!
//! Both embed a `Body`: a bounded, obstacle-aware box. The player adds a
//! turret; enemies add homing and a score value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Obstacle, Rect, bounded_move};
use super::projectile::Projectile;
use super::tick::TickInput;
use super::turret::Turret;
use crate::config::{Color, GameConfig};

/// Movable bounded box shared by every actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    /// Pixels per tick
    pub speed: f32,
    pub color: Color,
}

impl Body {
    pub fn new(rect: Rect, speed: f32, color: Color) -> Self {
        Self { rect, speed, color }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Bounded move; cancelled entirely on obstacle contact
    pub fn try_move(&mut self, displacement: Vec2, bounds: Bounds, obstacles: &[Obstacle]) -> bool {
        bounded_move(&mut self.rect, displacement, bounds, obstacles)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub turret: Turret,
}

impl Player {
    /// Player hull centered on `center`
    pub fn new(center: Vec2, config: &GameConfig) -> Self {
        let size = Vec2::new(config.player.width, config.player.height);
        Self {
            body: Body::new(
                Rect::centered(center, size),
                config.player.speed,
                config.player.color,
            ),
            turret: Turret::new(center, &config.turret),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Apply one tick of controller input: move, aim, fire, then re-anchor
    /// the turret. Returns true if a projectile was fired.
    pub fn apply_input(
        &mut self,
        input: &TickInput,
        config: &GameConfig,
        obstacles: &[Obstacle],
    ) -> bool {
        let displacement = input.movement * self.body.speed;
        self.body
            .try_move(displacement, config.screen.bounds(), obstacles);

        self.turret.handle_aim(input.aim.x, input.aim.y);
        let origin = self.center();
        let fired = self
            .turret
            .handle_trigger(input.fire, origin, &config.projectile);
        self.turret.tick(origin);
        fired
    }
}

/// Result of one enemy tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStatus {
    Alive,
    /// Hit by a projectile; the projectile has already been removed
    Killed,
    /// Reached the player
    CaughtPlayer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub score_value: u64,
}

impl Enemy {
    pub fn new(rect: Rect, speed: f32, color: Color, score_value: u64) -> Self {
        Self {
            body: Body::new(rect, speed, color),
            score_value,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Collision radius (the body is treated as a circle of half its width)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.rect.width() / 2.0
    }

    /// Displacement toward `target` at full speed (zero when already there)
    pub fn steer_toward(&self, target: Vec2) -> Vec2 {
        (target - self.center()).normalize_or_zero() * self.body.speed
    }

    /// Strict circle test against a projectile
    pub fn is_hit_by(&self, projectile: &Projectile) -> bool {
        self.center().distance(projectile.center()) < self.radius() + projectile.radius
    }

    /// Home in on the player, then resolve collisions.
    ///
    /// Projectiles are checked in firing order and the first hit wins; only
    /// that projectile is consumed. A killed enemy never catches the player
    /// on the same tick.
    pub fn tick(
        &mut self,
        player: &Rect,
        projectiles: &mut Vec<Projectile>,
        bounds: Bounds,
        obstacles: &[Obstacle],
    ) -> EnemyStatus {
        let displacement = self.steer_toward(player.center());
        self.body.try_move(displacement, bounds, obstacles);

        if let Some(hit) = projectiles.iter().position(|p| self.is_hit_by(p)) {
            projectiles.remove(hit);
            return EnemyStatus::Killed;
        }

        if self.body.rect.intersects(player) {
            return EnemyStatus::CaughtPlayer;
        }

        EnemyStatus::Alive
    }
}
