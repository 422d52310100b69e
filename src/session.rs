//! Host loop: input, tick, draw, wait
//!
//! One frame is exactly one simulation tick. The clock is read once per
//! frame and that reading is handed to the tick.

use serde::{Deserialize, Serialize};

use crate::input::{Controller, InputSource};
use crate::platform::Clock;
use crate::renderer::{DynamicText, Renderer, default_hud, draw_level};
use crate::sim::{GameEvent, GamePhase, Level, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub ticks: u64,
    pub score: u64,
    pub kills: u32,
    /// Waves that became active
    pub waves_reached: usize,
    pub game_over: bool,
}

pub struct Session<D, R, C> {
    level: Level,
    controller: Controller<D>,
    renderer: R,
    clock: C,
    hud: Vec<DynamicText>,
}

impl<D: InputSource, R: Renderer, C: Clock> Session<D, R, C> {
    pub fn new(level: Level, controller: Controller<D>, renderer: R, clock: C) -> Self {
        Self {
            level,
            controller,
            renderer,
            clock,
            hud: default_hud(),
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one frame and return the phase after its tick
    pub fn frame(&mut self) -> GamePhase {
        self.controller.observe(&self.level);
        let input = self.controller.poll();
        let now = self.clock.now();

        let phase = tick(&mut self.level, &input, now);
        for event in self.level.drain_events() {
            log_event(&event);
        }

        draw_level(&self.level, &self.hud, &mut self.renderer);
        self.clock.wait_for_next_frame();
        phase
    }

    /// Run frames until the player is caught or `should_stop` says so.
    ///
    /// `should_stop` is checked before every frame. The game-over frame is
    /// still drawn before returning.
    pub fn run(&mut self, mut should_stop: impl FnMut(&Level) -> bool) -> SessionSummary {
        while !should_stop(&self.level) {
            if self.frame() == GamePhase::GameOver {
                break;
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            ticks: self.level.time_ticks,
            score: self.level.score,
            kills: self.level.kills,
            waves_reached: self.level.active_waves,
            game_over: self.level.is_over(),
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ProjectileFired { angle } => log::debug!("Fired at {angle:.1}°"),
        GameEvent::ProjectileBlocked => log::debug!("Projectile hit an obstacle"),
        GameEvent::ProjectileLeftArena => log::debug!("Projectile left the arena"),
        GameEvent::EnemyKilled { wave, score_value } => {
            log::debug!("Enemy from wave {} destroyed (+{score_value})", wave + 1)
        }
        // Already logged at info level by the tick
        GameEvent::WaveActivated { .. } | GameEvent::PlayerCaught { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Color, ControlMap, GameConfig, WaveSpec};
    use crate::consts::TICK_SECS;
    use crate::input::VirtualPad;
    use crate::platform::ManualClock;
    use crate::renderer::ShapeBatch;

    fn session(waves: Vec<WaveSpec>) -> Session<VirtualPad, ShapeBatch, ManualClock> {
        let config = GameConfig {
            obstacles: Vec::new(),
            waves,
            ..GameConfig::default()
        };
        let controller =
            Controller::open(vec![VirtualPad::new("test")], 0, ControlMap::default())
                .expect("pad");
        Session::new(
            Level::new(config, 99),
            controller,
            ShapeBatch::default(),
            ManualClock::new(TICK_SECS),
        )
    }

    fn wave(speed: f32, delay_secs: f64) -> WaveSpec {
        WaveSpec {
            enemies: 1,
            speed,
            color: Color([255, 0, 0]),
            score_value: 10,
            delay_secs,
        }
    }

    #[test]
    fn test_run_stops_on_request() {
        let mut session = session(vec![wave(0.0, 0.0)]);
        let summary = session.run(|level| level.time_ticks >= 10);
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.waves_reached, 1);
        assert!(!summary.game_over);
        assert!(session.renderer().triangle_count() > 0);
    }

    #[test]
    fn test_clock_drives_activation() {
        // 1 s delay at 60 ticks per second
        let mut session = session(vec![wave(0.0, 0.0), wave(0.0, 1.0)]);
        session.run(|level| level.time_ticks >= 30);
        assert_eq!(session.level().active_waves, 1);
        session.run(|level| level.time_ticks >= 70);
        assert_eq!(session.level().active_waves, 2);
    }

    #[test]
    fn test_run_ends_on_game_over() {
        let mut session = session(vec![wave(10.0, 0.0)]);
        let summary = session.run(|level| level.time_ticks >= 1_000);
        assert!(summary.game_over);
        assert!(summary.ticks < 1_000);
        assert!(
            session
                .renderer()
                .texts
                .iter()
                .any(|t| t.text == "GAME OVER")
        );
    }
}
