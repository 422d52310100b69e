//! Simulation module
//!
//! All gameplay logic lives here:
//! - One fixed step per tick, driven by the host frame loop
//! - Seeded RNG only, consumed when the level is built
//! - Stable iteration order (waves, enemies and projectiles in insertion order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod geometry;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod turret;
pub mod wave;

pub use actor::{Body, Enemy, EnemyStatus, Player};
pub use geometry::{Bounds, Obstacle, Rect, bounded_move, clamp_to_bounds, would_collide};
pub use projectile::{Projectile, ProjectileStep};
pub use state::{GameEvent, GamePhase, Level};
pub use tick::{TickInput, tick};
pub use turret::Turret;
pub use wave::{Edge, Wave, WaveTick, spawn_point};
