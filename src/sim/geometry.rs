//! Axis-aligned rectangles and bounded movement
//!
//! Screen space: origin at the top-left corner, Y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Copy of this rect moved by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Strict overlap: rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Inclusive overlap: shared edges and corners count as contact
    pub fn touches(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

/// Visible play area [0, width] × [0, height]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if `rect` lies entirely past one of the edges
    pub fn is_outside(&self, rect: &Rect) -> bool {
        rect.right() < 0.0
            || rect.left() > self.width
            || rect.bottom() < 0.0
            || rect.top() > self.height
    }
}

/// A static obstacle. Never moves, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// Would `rect` moved by `displacement` touch any obstacle?
pub fn would_collide(rect: &Rect, displacement: Vec2, obstacles: &[Obstacle]) -> bool {
    let moved = rect.translated(displacement);
    obstacles.iter().any(|o| moved.touches(&o.rect))
}

/// Shrink `displacement` so `rect` ends up inside `bounds`.
///
/// A rect already hanging over an edge is pulled back flush with it.
pub fn clamp_to_bounds(rect: &Rect, displacement: Vec2, bounds: Bounds) -> Vec2 {
    let mut d = displacement;

    if rect.left() + d.x < 0.0 {
        d.x = -rect.left();
    }
    if rect.right() + d.x > bounds.width {
        d.x = bounds.width - rect.right();
    }
    if rect.top() + d.y < 0.0 {
        d.y = -rect.top();
    }
    if rect.bottom() + d.y > bounds.height {
        d.y = bounds.height - rect.bottom();
    }

    d
}

/// Move `rect` by `displacement`, clamped to `bounds`.
///
/// If the clamped move touches an obstacle the whole move is cancelled:
/// no sliding along the obstacle and no partial advance. Returns whether the
/// rect moved.
pub fn bounded_move(
    rect: &mut Rect,
    displacement: Vec2,
    bounds: Bounds,
    obstacles: &[Obstacle],
) -> bool {
    let d = clamp_to_bounds(rect, displacement, bounds);
    if would_collide(rect, d, obstacles) {
        return false;
    }
    rect.pos += d;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds {
        width: 1600.0,
        height: 900.0,
    };

    #[test]
    fn test_intersects_is_strict_touches_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let edge = Rect::new(10.0, 0.0, 10.0, 10.0);
        let overlap = Rect::new(9.0, 9.0, 10.0, 10.0);

        assert!(!a.intersects(&edge));
        assert!(a.touches(&edge));
        assert!(a.intersects(&overlap));
        assert!(a.touches(&overlap));
    }

    #[test]
    fn test_would_collide_with_no_obstacles() {
        let rect = Rect::new(100.0, 100.0, 20.0, 20.0);
        assert!(!would_collide(&rect, Vec2::new(50.0, 0.0), &[]));
    }

    #[test]
    fn test_would_collide_on_shared_edge() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let wall = [Obstacle::new(Rect::new(15.0, 0.0, 10.0, 10.0))];
        assert!(!would_collide(&rect, Vec2::new(4.0, 0.0), &wall));
        assert!(would_collide(&rect, Vec2::new(5.0, 0.0), &wall));
    }

    #[test]
    fn test_clamp_pulls_overhanging_rect_back() {
        let rect = Rect::new(1590.0, 10.0, 40.0, 40.0);
        let d = clamp_to_bounds(&rect, Vec2::ZERO, BOUNDS);
        assert_eq!(d, Vec2::new(-30.0, 0.0));
    }

    #[test]
    fn test_bounded_move_blocked_is_all_or_nothing() {
        // Diagonal move where only the x component would hit the obstacle
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let wall = [Obstacle::new(Rect::new(12.0, 0.0, 10.0, 50.0))];
        let moved = bounded_move(&mut rect, Vec2::new(5.0, 5.0), BOUNDS, &wall);
        assert!(!moved);
        assert_eq!(rect.pos, Vec2::ZERO);
    }

    #[test]
    fn test_bounded_move_clamped_then_blocked() {
        // Clamped destination touches an obstacle sitting on the edge line
        let mut rect = Rect::new(20.0, 20.0, 10.0, 10.0);
        let wall = [Obstacle::new(Rect::new(0.0, 0.0, 5.0, 5.0))];
        let moved = bounded_move(&mut rect, Vec2::new(-100.0, -100.0), BOUNDS, &wall);
        assert!(!moved);
        assert_eq!(rect.pos, Vec2::new(20.0, 20.0));
    }

    fn in_screen_rect() -> impl Strategy<Value = Rect> {
        (0.0f32..1500.0, 0.0f32..800.0, 1.0f32..100.0, 1.0f32..100.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
            .prop_filter("rect inside bounds", |r| {
                r.right() <= BOUNDS.width && r.bottom() <= BOUNDS.height
            })
    }

    proptest! {
        #[test]
        fn test_free_move_is_exact(rect in in_screen_rect(), dx in -50.0f32..50.0, dy in -50.0f32..50.0) {
            let delta = Vec2::new(dx, dy);
            let dest = rect.translated(delta);
            // Keep clear of the edges so rounding never triggers a clamp
            prop_assume!(dest.left() >= 0.01 && dest.top() >= 0.01);
            prop_assume!(dest.right() <= BOUNDS.width - 0.01 && dest.bottom() <= BOUNDS.height - 0.01);

            let mut moved = rect;
            prop_assert!(bounded_move(&mut moved, delta, BOUNDS, &[]));
            prop_assert_eq!(moved.pos, rect.pos + delta);
        }

        #[test]
        fn test_edge_crossing_move_ends_flush(rect in in_screen_rect(), dx in -3000.0f32..3000.0, dy in -3000.0f32..3000.0) {
            let mut moved = rect;
            bounded_move(&mut moved, Vec2::new(dx, dy), BOUNDS, &[]);

            prop_assert!(moved.left() >= 0.0 && moved.top() >= 0.0);
            prop_assert!(moved.right() <= BOUNDS.width + 1e-3);
            prop_assert!(moved.bottom() <= BOUNDS.height + 1e-3);

            let dest = rect.translated(Vec2::new(dx, dy));
            if dest.left() < 0.0 {
                prop_assert_eq!(moved.left(), 0.0);
            }
            if dest.top() < 0.0 {
                prop_assert_eq!(moved.top(), 0.0);
            }
            if dest.right() > BOUNDS.width {
                prop_assert!((moved.right() - BOUNDS.width).abs() < 1e-3);
            }
            if dest.bottom() > BOUNDS.height {
                prop_assert!((moved.bottom() - BOUNDS.height).abs() < 1e-3);
            }
        }

        #[test]
        fn test_colliding_move_leaves_rect_unchanged(rect in in_screen_rect(), dx in -50.0f32..50.0, dy in -50.0f32..50.0) {
            // Obstacle placed exactly on the clamped destination
            let delta = clamp_to_bounds(&rect, Vec2::new(dx, dy), BOUNDS);
            let obstacles = [Obstacle::new(rect.translated(delta))];

            let mut moved = rect;
            prop_assert!(!bounded_move(&mut moved, Vec2::new(dx, dy), BOUNDS, &obstacles));
            prop_assert_eq!(moved, rect);
        }
    }
}
