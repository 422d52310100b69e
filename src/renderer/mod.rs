//! Rendering
//!
//! The simulation only ever draws through the `Renderer` trait, once per
//! frame and read-only. `ShapeBatch` is the bundled implementation: it
//! tessellates every primitive into a flat triangle list ready for upload.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::{DynamicText, default_hud};
pub use vertex::Vertex;

use glam::Vec2;

use crate::config::Color;
use crate::sim::{GamePhase, Level, Rect};

/// Drawing primitives the game needs
pub trait Renderer {
    fn fill_background(&mut self, color: Color);
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32);
    fn text(&mut self, text: &str, font_size: f32, color: Color, position: Vec2);
}

/// Draw the whole scene: background, obstacles, player, turret, projectiles,
/// active enemies, then the HUD on top
pub fn draw_level<R: Renderer + ?Sized>(level: &Level, hud: &[DynamicText], renderer: &mut R) {
    let config = &level.config;

    renderer.fill_background(config.screen.background);

    for obstacle in &level.obstacles {
        renderer.fill_rect(&obstacle.rect, config.obstacle_color);
    }

    let player = &level.player;
    renderer.fill_rect(&player.body.rect, player.body.color);
    renderer.line(
        player.center(),
        player.turret.muzzle,
        config.turret.color,
        config.turret.thickness,
    );

    for projectile in &player.turret.projectiles {
        renderer.fill_circle(projectile.center(), projectile.radius, config.projectile.color);
    }

    // Dormant waves are never drawn
    for enemy in level.live_enemies() {
        renderer.fill_circle(enemy.center(), enemy.radius(), enemy.body.color);
    }

    for text in hud {
        text.draw(level, renderer);
    }

    if level.phase == GamePhase::GameOver {
        let center = config.screen.center();
        renderer.text("GAME OVER", 64.0, config.hud_color, center - Vec2::new(160.0, 32.0));
    }
}

/// Text queued for an overlay pass
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub font_size: f32,
    pub color: [f32; 4],
    pub position: Vec2,
}

/// Renderer that records one frame as triangles plus text items
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    circle_segments: u32,
}

impl Default for ShapeBatch {
    fn default() -> Self {
        Self::new(24)
    }
}

impl ShapeBatch {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
            texts: Vec::new(),
            circle_segments: circle_segments.max(3),
        }
    }

    /// Drop the previous frame
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.texts.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex data as raw bytes for a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for ShapeBatch {
    fn fill_background(&mut self, color: Color) {
        self.clear();
        self.clear_color = color.rgba();
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.vertices.extend(shapes::rect(rect, color.rgba()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices.extend(shapes::circle(
            center,
            radius,
            color.rgba(),
            self.circle_segments,
        ));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32) {
        self.vertices
            .extend(shapes::line(from, to, thickness, color.rgba()));
    }

    fn text(&mut self, text: &str, font_size: f32, color: Color, position: Vec2) {
        self.texts.push(TextItem {
            text: text.to_owned(),
            font_size,
            color: color.rgba(),
            position,
        });
    }
}
