use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// 8-bit RGBA color, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a new alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same color with alpha scaled by `factor` (clamped to 0..=1).
    pub fn faded(self, factor: f64) -> Self {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

// ---------------------------------------------------------------------------
// Celestial body: immutable gravity source and draw target
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    pub pos: Vector2<f64>,    // world units
    pub radius: f64,          // world units, also the gravity strength scale
    pub color: Color,
    pub atmosphere: Color,    // glow tint
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        pos: Vector2<f64>,
        radius: f64,
        color: Color,
        atmosphere: Color,
    ) -> Self {
        Self { name: name.into(), pos, radius, color, atmosphere }
    }

    /// Distance from the body's centre to `point`.
    pub fn distance_to(&self, point: &Vector2<f64>) -> f64 {
        (self.pos - point).norm()
    }

    /// True when `point` lies within the body's radius (surface included).
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        self.distance_to(point) <= self.radius
    }
}

// ---------------------------------------------------------------------------
// Preset body sets
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// The four bodies of the default world: a home planet just below the
    /// launch point and three more scattered across the upper sky.
    pub fn home_system() -> Vec<CelestialBody> {
        vec![
            CelestialBody::new(
                "Home Planet",
                Vector2::new(0.0, 800.0),
                200.0,
                Color::rgb(0x4a, 0x4a, 0x8a),
                Color::rgb(0x66, 0x66, 0xcc),
            ),
            CelestialBody::new(
                "Red Moon",
                Vector2::new(-800.0, -500.0),
                80.0,
                Color::rgb(0xcc, 0x66, 0x66),
                Color::rgb(0xff, 0x88, 0x88),
            ),
            CelestialBody::new(
                "Green World",
                Vector2::new(1200.0, -1200.0),
                150.0,
                Color::rgb(0x66, 0xcc, 0x66),
                Color::rgb(0x88, 0xff, 0x88),
            ),
            CelestialBody::new(
                "Golden Sphere",
                Vector2::new(-1500.0, -2000.0),
                120.0,
                Color::rgb(0xcc, 0xcc, 0x66),
                Color::rgb(0xff, 0xff, 0x88),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_counts_as_inside() {
        let body = &presets::home_system()[0];
        assert!(body.contains(&Vector2::new(0.0, 600.0)));
        assert!(!body.contains(&Vector2::new(0.0, 599.0)));
    }

    #[test]
    fn faded_scales_alpha() {
        let c = Color::rgb(10, 20, 30).faded(0.5);
        assert_eq!(c.a, 128);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    }

    #[test]
    fn presets_have_unique_names() {
        let bodies = presets::home_system();
        assert_eq!(bodies.len(), 4);
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
