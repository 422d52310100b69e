//! Demo driver: a virtual controller that plays the game
//!
//! Lets the binary run without hardware. Each tick it looks at the level,
//! aims at the nearest live enemy, backs away from enemies that get close and
//! taps the fire button on a fixed cadence.

use glam::Vec2;

use crate::config::ControlMap;
use crate::input::{InputSource, VirtualPad};
use crate::sim::Level;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pad: VirtualPad,
    map: ControlMap,
    ticks: u64,
    /// Fire is pressed on one tick out of every `fire_period`
    pub fire_period: u64,
    /// Enemies closer than this make the tank retreat
    pub flee_radius: f32,
}

impl Autopilot {
    pub fn new(map: ControlMap) -> Self {
        Self {
            pad: VirtualPad::new("autopilot"),
            map,
            ticks: 0,
            fire_period: 6,
            flee_radius: 220.0,
        }
    }
}

/// Scale `v` so its larger component is ±1
fn full_deflection(v: Vec2) -> Vec2 {
    let peak = v.x.abs().max(v.y.abs());
    if peak > 0.0 { v / peak } else { Vec2::ZERO }
}

impl InputSource for Autopilot {
    fn name(&self) -> &str {
        self.pad.name()
    }

    fn axis(&self, index: usize) -> f32 {
        self.pad.axis(index)
    }

    fn button(&self, index: usize) -> bool {
        self.pad.button(index)
    }

    /// Update the virtual sticks and buttons from the current level
    fn observe(&mut self, level: &Level) {
        self.ticks += 1;
        self.pad.reset();

        let origin = level.player.center();
        let nearest = level
            .live_enemies()
            .map(|e| e.center())
            .min_by(|a, b| {
                a.distance_squared(origin)
                    .partial_cmp(&b.distance_squared(origin))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(target) = nearest else {
            return;
        };

        // Full deflection on the dominant axis so the aim is remembered
        let to_target = target - origin;
        let aim = full_deflection(to_target);
        self.pad.set_axis(self.map.aim_x, aim.x);
        self.pad.set_axis(self.map.aim_y, aim.y);

        if to_target.length() < self.flee_radius {
            let away = -to_target.normalize_or_zero();
            self.pad.set_axis(self.map.move_x, away.x);
            self.pad.set_axis(self.map.move_y, away.y);
        }

        if self.fire_period > 0 && self.ticks % self.fire_period == 0 {
            self.pad.set_button(self.map.fire, true);
        }
    }
}
