//! Turret Arena - a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Per-tick simulation (movement, collisions, waves, scoring)
//! - `renderer`: Drawing contract and shape tessellation
//! - `platform`: Frame clock
//! - `input`: Controller contract and axis/button mapping
//! - `config`: Immutable game configuration

pub mod autopilot;
pub mod config;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::ArenaError;

use glam::Vec2;

/// Frame loop constants
pub mod consts {
    /// Target simulation cadence (ticks per second). The simulation is
    /// frame-rate dependent: every tick advances by one fixed step.
    pub const TICK_RATE: u32 = 60;

    /// Duration of one tick in seconds
    pub const TICK_SECS: f64 = 1.0 / TICK_RATE as f64;
}

/// Unit vector for a heading in degrees (0° = right, Y grows downward so
/// positive angles turn clockwise on screen)
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Convert polar (r, degrees) to a cartesian offset
#[inline]
pub fn polar_to_cartesian(r: f32, angle_deg: f32) -> Vec2 {
    heading(angle_deg) * r
}

/// Angle of a vector in degrees, in (-180, 180]
#[inline]
pub fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}
