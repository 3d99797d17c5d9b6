use nalgebra::{Isometry2, Point2, Vector2};

use crate::world::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// 2D drawing surface with a save/restore transform stack.
///
/// Coordinates passed to the fill/stroke primitives are in the current
/// local frame; implementations map them through the active transform.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vector2<f64>);
    fn rotate(&mut self, angle: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    /// Disk of `outer_radius` fading from `inner` (at `inner_radius`) to `outer`.
    fn radial_gradient(
        &mut self,
        center: Vector2<f64>,
        inner_radius: f64,
        outer_radius: f64,
        inner: Color,
        outer: Color,
    );
    fn fill_text(&mut self, pos: Vector2<f64>, text: &str, size: f64, align: TextAlign, color: Color);
}

// ---------------------------------------------------------------------------
// Transform stack (rigid transforms only: translate + rotate)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Isometry2<f64>,
    saved: Vec<Isometry2<f64>>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self { current: Isometry2::identity(), saved: Vec::new() }
    }
}

impl TransformStack {
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores fall back to identity.
    pub fn restore(&mut self) {
        self.current = self.saved.pop().unwrap_or_else(Isometry2::identity);
    }

    pub fn translate(&mut self, offset: Vector2<f64>) {
        self.current = self.current * Isometry2::translation(offset.x, offset.y);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.current = self.current * Isometry2::rotation(angle);
    }

    /// Local point to surface coordinates.
    pub fn apply(&self, p: &Vector2<f64>) -> Vector2<f64> {
        (self.current * Point2::from(*p)).coords
    }

    pub fn angle(&self) -> f64 {
        self.current.rotation.angle()
    }

    /// Corners of a local rectangle in surface coordinates, clockwise.
    pub fn rect_corners(&self, x: f64, y: f64, w: f64, h: f64) -> [Vector2<f64>; 4] {
        [
            self.apply(&Vector2::new(x, y)),
            self.apply(&Vector2::new(x + w, y)),
            self.apply(&Vector2::new(x + w, y + h)),
            self.apply(&Vector2::new(x, y + h)),
        ]
    }
}
