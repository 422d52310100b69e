//! Straight-line projectiles fired by the turret

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Obstacle, Rect, would_collide};
use crate::config::ProjectileConfig;
use crate::heading;

/// What happened to a projectile during `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStep {
    Moved,
    /// The candidate position touched an obstacle; the projectile is spent
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Square bound of side 2 × radius
    pub rect: Rect,
    /// Heading in degrees
    pub angle: f32,
    /// Pixels per tick
    pub speed: f32,
    pub radius: f32,
}

impl Projectile {
    /// Spawn a projectile centered on `center`
    pub fn new(center: Vec2, angle: f32, config: &ProjectileConfig) -> Self {
        let diameter = config.radius * 2.0;
        Self {
            rect: Rect::centered(center, Vec2::splat(diameter)),
            angle,
            speed: config.speed,
            radius: config.radius,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Per-tick displacement, truncated toward zero on each axis
    pub fn velocity(&self) -> Vec2 {
        (heading(self.angle) * self.speed).trunc()
    }

    /// Move one tick along the heading.
    ///
    /// The candidate position is checked against obstacles before it is
    /// committed; a blocked projectile stays where it was and should be
    /// dropped by the caller.
    pub fn advance(&mut self, obstacles: &[Obstacle]) -> ProjectileStep {
        let delta = self.velocity();
        if would_collide(&self.rect, delta, obstacles) {
            return ProjectileStep::Blocked;
        }
        self.rect.pos += delta;
        ProjectileStep::Moved
    }

    /// True once the projectile is entirely past a screen edge
    pub fn is_out_of_bounds(&self, bounds: Bounds) -> bool {
        bounds.is_outside(&self.rect)
    }
}
