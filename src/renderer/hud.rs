//! Text overlay whose contents are recomputed every frame

use glam::Vec2;

use super::Renderer;
use crate::sim::Level;

/// A line of text pulled from the level each time it is drawn
#[derive(Debug, Clone, Copy)]
pub struct DynamicText {
    pub source: fn(&Level) -> String,
    pub font_size: f32,
    pub position: Vec2,
}

impl DynamicText {
    pub fn new(source: fn(&Level) -> String, font_size: f32, position: Vec2) -> Self {
        Self {
            source,
            font_size,
            position,
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&self, level: &Level, renderer: &mut R) {
        let text = (self.source)(level);
        renderer.text(&text, self.font_size, level.config.hud_color, self.position);
    }
}

fn score_line(level: &Level) -> String {
    format!("Score: {}", level.score)
}

fn wave_line(level: &Level) -> String {
    format!("Wave: {}/{}", level.active_waves, level.waves.len())
}

/// Score and wave counters in the top-left corner
pub fn default_hud() -> Vec<DynamicText> {
    vec![
        DynamicText::new(score_line, 32.0, Vec2::new(10.0, 10.0)),
        DynamicText::new(wave_line, 32.0, Vec2::new(10.0, 46.0)),
    ]
}
