//! Per-frame simulation tick
//!
//! One call advances the level by one frame. The step is fixed, so game speed
//! follows the frame rate.

use glam::Vec2;

use super::projectile::ProjectileStep;
use super::state::{GameEvent, GamePhase, Level};

/// Controller state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Left stick, each axis in [-1, 1]
    pub movement: Vec2,
    /// Right stick, each axis in [-1, 1]
    pub aim: Vec2,
    /// Fire button held
    pub fire: bool,
}

/// Advance the level by one tick.
///
/// `now` is the monotonic clock in seconds, sampled once by the caller.
/// Order: player input, wave activation, enemies (homing, kills, catches),
/// projectile flight. Returns the phase after the tick; `GameOver` is terminal.
pub fn tick(level: &mut Level, input: &TickInput, now: f64) -> GamePhase {
    if level.phase == GamePhase::GameOver {
        return GamePhase::GameOver;
    }

    level.time_ticks += 1;

    // 1. Player movement and turret
    if level
        .player
        .apply_input(input, &level.config, &level.obstacles)
    {
        level.events.push(GameEvent::ProjectileFired {
            angle: level.player.turret.angle,
        });
    }

    // 2. Timed wave activation (at most one per tick)
    activate_waves(level, now);

    // 3. Enemies
    if let Some(wave) = resolve_enemies(level) {
        level.phase = GamePhase::GameOver;
        level.events.push(GameEvent::PlayerCaught { wave });
        log::info!(
            "Player caught by wave {} after {} ticks, final score {}",
            wave + 1,
            level.time_ticks,
            level.score
        );
        return GamePhase::GameOver;
    }

    // 4. Projectiles
    advance_projectiles(level);

    level.phase
}

/// Activate the next wave once its delay has elapsed since the last
/// activation
fn activate_waves(level: &mut Level, now: f64) {
    let anchor = *level.activation_anchor.get_or_insert(now);
    let next = level.active_waves;

    if next < level.waves.len() && now - anchor >= level.wave_intervals[next] {
        level.active_waves += 1;
        level.activation_anchor = Some(now);
        level.events.push(GameEvent::WaveActivated { wave: next });
        log::info!(
            "Wave {} active ({} enemies) at {:.1}s",
            next + 1,
            level.waves[next].enemies.len(),
            now
        );
    }
}

/// Tick every enemy of the active waves, crediting kills. Returns the wave
/// index of the enemy that caught the player, if any.
fn resolve_enemies(level: &mut Level) -> Option<usize> {
    let bounds = level.config.screen.bounds();
    let active = level.active_waves;

    for (wave_idx, wave) in level.waves[..active].iter_mut().enumerate() {
        let report = wave.tick(
            &level.player.body.rect,
            &mut level.player.turret.projectiles,
            bounds,
            &level.obstacles,
        );

        // Removal happens after the wave's iteration is complete
        for enemy in wave.remove(&report.killed) {
            level.score += enemy.score_value;
            level.kills += 1;
            level.events.push(GameEvent::EnemyKilled {
                wave: wave_idx,
                score_value: enemy.score_value,
            });
            log::debug!(
                "Enemy from wave {} destroyed (+{}), score {}",
                wave_idx + 1,
                enemy.score_value,
                level.score
            );
        }

        if report.caught_player {
            return Some(wave_idx);
        }
    }

    None
}

/// Fly every live projectile, dropping those that hit an obstacle or left
/// the screen
fn advance_projectiles(level: &mut Level) {
    let bounds = level.config.screen.bounds();
    let obstacles = &level.obstacles;
    let mut dropped = Vec::new();

    level.player.turret.projectiles.retain_mut(|p| {
        match p.advance(obstacles) {
            ProjectileStep::Blocked => {
                dropped.push(GameEvent::ProjectileBlocked);
                false
            }
            ProjectileStep::Moved if p.is_out_of_bounds(bounds) => {
                dropped.push(GameEvent::ProjectileLeftArena);
                false
            }
            ProjectileStep::Moved => true,
        }
    });

    level.events.extend(dropped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Color, GameConfig, WaveSpec};
    use crate::sim::actor::Enemy;
    use crate::sim::geometry::{Obstacle, Rect};

    fn wave_row(enemies: usize, delay_secs: f64) -> WaveSpec {
        WaveSpec {
            enemies,
            speed: 2.0,
            color: Color([255, 0, 0]),
            score_value: 10,
            delay_secs,
        }
    }

    /// Open arena with the given wave table
    fn level_with(waves: Vec<WaveSpec>) -> Level {
        let config = GameConfig {
            obstacles: Vec::new(),
            waves,
            ..GameConfig::default()
        };
        Level::new(config, 12345)
    }

    fn enemy_at(center: Vec2, score_value: u64) -> Enemy {
        Enemy::new(
            Rect::centered(center, Vec2::splat(40.0)),
            2.0,
            Color([255, 0, 0]),
            score_value,
        )
    }

    #[test]
    fn test_wave_activation_schedule() {
        let mut level = level_with(vec![wave_row(0, 0.0), wave_row(0, 30.0), wave_row(0, 20.0)]);
        let idle = TickInput::default();

        tick(&mut level, &idle, 0.0);
        assert_eq!(level.active_waves, 1);

        tick(&mut level, &idle, 29.9);
        assert_eq!(level.active_waves, 1);

        tick(&mut level, &idle, 30.0);
        assert_eq!(level.active_waves, 2);

        // Measured from wave 1's activation, not from the start
        tick(&mut level, &idle, 49.9);
        assert_eq!(level.active_waves, 2);

        tick(&mut level, &idle, 50.0);
        assert_eq!(level.active_waves, 3);

        tick(&mut level, &idle, 500.0);
        assert_eq!(level.active_waves, 3);
    }

    #[test]
    fn test_one_activation_per_tick() {
        let mut level = level_with(vec![wave_row(0, 0.0), wave_row(0, 0.0)]);
        let idle = TickInput::default();

        tick(&mut level, &idle, 0.0);
        assert_eq!(level.active_waves, 1);
        tick(&mut level, &idle, 0.0);
        assert_eq!(level.active_waves, 2);
    }

    #[test]
    fn test_dormant_waves_do_not_move() {
        let mut level = level_with(vec![wave_row(0, 0.0), wave_row(3, 30.0)]);
        let before: Vec<_> = level.waves[1].enemies.iter().map(|e| e.body.rect.pos).collect();

        tick(&mut level, &TickInput::default(), 0.0);
        tick(&mut level, &TickInput::default(), 1.0);

        let after: Vec<_> = level.waves[1].enemies.iter().map(|e| e.body.rect.pos).collect();
        assert_eq!(before, after);
        assert_eq!(level.live_enemies().count(), 0);
    }

    #[test]
    fn test_adjacent_enemy_ends_the_game() {
        let mut level = level_with(vec![wave_row(0, 0.0)]);
        let player_center = level.player.center();
        level.waves[0].enemies.push(enemy_at(player_center + Vec2::new(40.0, 0.0), 10));

        let phase = tick(&mut level, &TickInput::default(), 0.0);
        assert_eq!(phase, GamePhase::GameOver);
        assert!(level.is_over());
        assert!(level
            .drain_events()
            .contains(&GameEvent::PlayerCaught { wave: 0 }));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut level = level_with(vec![wave_row(0, 0.0)]);
        level.phase = GamePhase::GameOver;
        let ticks = level.time_ticks;

        let input = TickInput {
            movement: Vec2::new(1.0, 0.0),
            fire: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut level, &input, 1.0), GamePhase::GameOver);
        assert_eq!(level.time_ticks, ticks);
        assert!(level.player.turret.projectiles.is_empty());
    }

    #[test]
    fn test_shot_enemy_is_removed_and_scored() {
        let mut level = level_with(vec![wave_row(0, 0.0)]);
        let player_center = level.player.center();
        // In line with the barrel (aim right), clear of the hull
        level.waves[0].enemies.push(enemy_at(player_center + Vec2::new(85.0, 0.0), 25));

        let fire = TickInput {
            aim: Vec2::new(1.0, 0.0),
            fire: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut level, &fire, 0.0), GamePhase::Playing);
        assert_eq!(level.player.turret.projectiles.len(), 1);
        assert_eq!(level.score, 0);

        // Projectile advanced into range; the next enemy pass consumes it
        assert_eq!(tick(&mut level, &fire, 1.0 / 60.0), GamePhase::Playing);
        assert!(level.waves[0].enemies.is_empty());
        assert!(level.player.turret.projectiles.is_empty());
        assert_eq!(level.score, 25);
        assert_eq!(level.kills, 1);

        let events = level.drain_events();
        assert!(events.contains(&GameEvent::EnemyKilled {
            wave: 0,
            score_value: 25
        }));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::ProjectileFired { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_projectile_blocked_by_obstacle() {
        let mut level = level_with(vec![]);
        let c = level.player.center();
        level
            .obstacles
            .push(Obstacle::new(Rect::new(c.x + 60.0, c.y - 50.0, 20.0, 100.0)));

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut level, &fire, 0.0);
        assert!(level.player.turret.projectiles.is_empty());
        assert!(level.drain_events().contains(&GameEvent::ProjectileBlocked));
    }

    #[test]
    fn test_projectile_leaves_arena() {
        let mut level = level_with(vec![]);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut level, &fire, 0.0);

        // 800 + 55 start, 10px per tick, gone once left > 1600
        let mut ticks = 1;
        while !level.player.turret.projectiles.is_empty() {
            tick(&mut level, &TickInput::default(), 0.0);
            ticks += 1;
            assert!(ticks < 200, "projectile never left the arena");
        }
        assert!(level.drain_events().contains(&GameEvent::ProjectileLeftArena));
    }

    #[test]
    fn test_projectile_consumed_before_it_advances() {
        // Enemy sits on the muzzle, so the shot fired this tick is used up in
        // the enemy pass and never reaches the flight step
        let mut level = level_with(vec![wave_row(0, 0.0)]);
        let muzzle = level.player.center() + Vec2::new(55.0, 0.0);
        level.waves[0].enemies.push(enemy_at(muzzle + Vec2::new(20.0, 0.0), 10));

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut level, &fire, 0.0);
        assert_eq!(level.score, 10);
        let events = level.drain_events();
        assert!(!events.contains(&GameEvent::ProjectileLeftArena));
        assert!(!events.contains(&GameEvent::ProjectileBlocked));
    }
}
