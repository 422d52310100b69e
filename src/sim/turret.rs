//! The player's turret: aim filtering, edge-triggered fire, live projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use crate::config::{ProjectileConfig, TurretConfig};
use crate::{angle_of, polar_to_cartesian};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    /// Current aim in degrees (0° = right, clockwise on screen)
    pub angle: f32,
    /// Last aim recorded while the stick was pushed past the threshold
    pub last_peak_angle: f32,
    /// Distance from the hull center to the muzzle
    pub length: f32,
    /// Fire button state seen on the previous tick
    pub shoot_held: bool,
    /// Muzzle position, refreshed by `tick`
    pub muzzle: Vec2,
    /// Live projectiles in firing order
    pub projectiles: Vec<Projectile>,
    aim_threshold: f32,
}

impl Turret {
    pub fn new(origin: Vec2, config: &TurretConfig) -> Self {
        let mut turret = Self {
            angle: 0.0,
            last_peak_angle: 0.0,
            length: config.length,
            shoot_held: false,
            muzzle: origin,
            projectiles: Vec::new(),
            aim_threshold: config.aim_threshold,
        };
        turret.tick(origin);
        turret
    }

    /// Update the aim from the right stick.
    ///
    /// Any deflection points the barrel along the stick. Only a deflection past
    /// the threshold is remembered, and a centered stick springs back to that
    /// remembered angle, so letting go never leaves the barrel on a transient
    /// near-zero reading.
    pub fn handle_aim(&mut self, x: f32, y: f32) {
        if x != 0.0 || y != 0.0 {
            self.angle = angle_of(Vec2::new(x, y));
            if x.abs().max(y.abs()) >= self.aim_threshold {
                self.last_peak_angle = self.angle;
            }
        } else {
            self.angle = self.last_peak_angle;
        }
    }

    /// Feed the fire button. Returns true if a projectile was fired.
    ///
    /// Fires once per press: holding the button does not auto-repeat.
    pub fn handle_trigger(
        &mut self,
        pressed: bool,
        origin: Vec2,
        projectile: &ProjectileConfig,
    ) -> bool {
        let fired = pressed && !self.shoot_held;
        if fired {
            self.shoot(origin, projectile);
        }
        self.shoot_held = pressed;
        fired
    }

    /// Muzzle position for a hull centered on `origin`
    pub fn muzzle_for(&self, origin: Vec2) -> Vec2 {
        origin + polar_to_cartesian(self.length, self.angle)
    }

    /// Recompute the muzzle anchor. No collision.
    pub fn tick(&mut self, origin: Vec2) {
        self.muzzle = self.muzzle_for(origin);
    }

    fn shoot(&mut self, origin: Vec2, config: &ProjectileConfig) {
        let tip = self.muzzle_for(origin);
        self.projectiles.push(Projectile::new(tip, self.angle, config));
        log::debug!("Fired at {:.1}° from ({:.1}, {:.1})", self.angle, tip.x, tip.y);
    }
}
