//! Draw-call recorder for headless rendering tests.

use nalgebra::Vector2;

use super::canvas::{Canvas, TextAlign, TransformStack};
use crate::world::Color;

/// A primitive as it would land on the surface (transform applied).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect { corners: [Vector2<f64>; 4], color: Color, filled: bool },
    Polygon { points: Vec<Vector2<f64>>, color: Color },
    Circle { center: Vector2<f64>, radius: f64, color: Color },
    Gradient { center: Vector2<f64>, inner_radius: f64, outer_radius: f64 },
    Text { pos: Vector2<f64>, text: String, align: TextAlign },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    transform: TransformStack,
    depth: usize,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Polygon { .. })).count()
    }

    /// Open `save` calls not yet restored.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.transform.save();
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.transform.restore();
        self.depth = self.depth.saturating_sub(1);
    }

    fn translate(&mut self, offset: Vector2<f64>) {
        self.transform.translate(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform.rotate(angle);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let corners = self.transform.rect_corners(x, y, w, h);
        self.ops.push(Op::Rect { corners, color, filled: true });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let corners = self.transform.rect_corners(x, y, w, h);
        self.ops.push(Op::Rect { corners, color, filled: false });
    }

    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color) {
        let points = points.iter().map(|p| self.transform.apply(p)).collect();
        self.ops.push(Op::Polygon { points, color });
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        let center = self.transform.apply(&center);
        self.ops.push(Op::Circle { center, radius, color });
    }

    fn radial_gradient(
        &mut self,
        center: Vector2<f64>,
        inner_radius: f64,
        outer_radius: f64,
        _inner: Color,
        _outer: Color,
    ) {
        let center = self.transform.apply(&center);
        self.ops.push(Op::Gradient { center, inner_radius, outer_radius });
    }

    fn fill_text(&mut self, pos: Vector2<f64>, text: &str, _size: f64, align: TextAlign, _color: Color) {
        let pos = self.transform.apply(&pos);
        self.ops.push(Op::Text { pos, text: text.to_string(), align });
    }
}
