use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Fixed axis-aligned world rectangle. Screen convention: `top < bottom`,
/// so "up" is negative y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left: -2000.0,
            right: 2000.0,
            top: -3000.0,
            bottom: 1000.0,
        }
    }
}

/// Which side of the rectangle a point touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Bounds {
    /// Closed-rectangle containment.
    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Clamp each coordinate independently into the closed rectangle.
    pub fn clamp(&self, p: &Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            p.x.max(self.left).min(self.right),
            p.y.max(self.top).min(self.bottom),
        )
    }

    /// Edges the point sits on (or beyond). Empty for interior points.
    pub fn edges_touched(&self, p: &Vector2<f64>) -> Vec<Edge> {
        let mut edges = Vec::new();
        if p.x <= self.left {
            edges.push(Edge::Left);
        }
        if p.x >= self.right {
            edges.push(Edge::Right);
        }
        if p.y <= self.top {
            edges.push(Edge::Top);
        }
        if p.y >= self.bottom {
            edges.push(Edge::Bottom);
        }
        edges
    }

    pub fn is_valid(&self) -> bool {
        self.left < self.right && self.top < self.bottom
    }
}
