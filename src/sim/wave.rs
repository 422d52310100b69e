//! Enemy waves: edge spawning and per-tick enemy updates

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::{Enemy, EnemyStatus};
use super::geometry::{Bounds, Obstacle, Rect};
use super::projectile::Projectile;
use crate::config::{EnemyConfig, WaveSpec};

/// Screen edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Top-left corner for an enemy of `size` on `edge`, uniform along the edge
/// and fully on screen
pub fn spawn_point(edge: Edge, size: Vec2, bounds: Bounds, rng: &mut impl Rng) -> Vec2 {
    let max_x = (bounds.width - size.x).max(0.0);
    let max_y = (bounds.height - size.y).max(0.0);

    match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..=max_x), 0.0),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..=max_x), max_y),
        Edge::Left => Vec2::new(0.0, rng.random_range(0.0..=max_y)),
        Edge::Right => Vec2::new(max_x, rng.random_range(0.0..=max_y)),
    }
}

/// Outcome of ticking every enemy in a wave
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaveTick {
    /// Indices of killed enemies, ascending
    pub killed: Vec<usize>,
    /// An enemy reached the player; ticking stopped at that enemy
    pub caught_player: bool,
}

/// A batch of enemies created up front and activated together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub enemies: Vec<Enemy>,
}

impl Wave {
    /// Build a wave from a table row. Each enemy picks its own edge.
    pub fn spawn(spec: &WaveSpec, enemy: &EnemyConfig, bounds: Bounds, rng: &mut impl Rng) -> Self {
        let size = Vec2::new(enemy.width, enemy.height);
        let enemies = (0..spec.enemies)
            .map(|_| {
                let edge = Edge::random(rng);
                let pos = spawn_point(edge, size, bounds, rng);
                Enemy::new(
                    Rect::new(pos.x, pos.y, size.x, size.y),
                    spec.speed,
                    spec.color,
                    spec.score_value,
                )
            })
            .collect();

        Self { enemies }
    }

    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Tick every live enemy in order. Kills are reported, not applied;
    /// call `remove` with the reported indices afterwards.
    pub fn tick(
        &mut self,
        player: &Rect,
        projectiles: &mut Vec<Projectile>,
        bounds: Bounds,
        obstacles: &[Obstacle],
    ) -> WaveTick {
        let mut report = WaveTick::default();

        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            match enemy.tick(player, projectiles, bounds, obstacles) {
                EnemyStatus::Alive => {}
                EnemyStatus::Killed => report.killed.push(i),
                EnemyStatus::CaughtPlayer => {
                    report.caught_player = true;
                    break;
                }
            }
        }

        report
    }

    /// Remove enemies by ascending index, returning them in the same order
    pub fn remove(&mut self, indices: &[usize]) -> Vec<Enemy> {
        let mut removed: Vec<Enemy> = indices
            .iter()
            .rev()
            .map(|&i| self.enemies.remove(i))
            .collect();
        removed.reverse();
        removed
    }
}
