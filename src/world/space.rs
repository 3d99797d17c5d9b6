use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::body::{presets, CelestialBody};
use super::bounds::Bounds;
use super::camera::{Camera, Viewport};
use super::stars::{self, Star};
use crate::physics::gravity::{self, DEFAULT_GRAVITY_K};

/// Radii within which a body's name label is shown.
pub const LABEL_RANGE_RADII: f64 = 3.0;

// ---------------------------------------------------------------------------
// World configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub bounds: Bounds,
    pub gravity_k: f64,
    pub camera_smoothing: f64,
    pub star_count: usize,
    /// Fixed seed for the starfield; `None` draws one from the OS.
    pub star_seed: Option<u64>,
    pub bodies: Vec<CelestialBody>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            gravity_k: DEFAULT_GRAVITY_K,
            camera_smoothing: 0.1,
            star_count: 200,
            star_seed: None,
            bodies: presets::home_system(),
        }
    }
}

// ---------------------------------------------------------------------------
// World: bounds, bodies, stars, camera
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct World {
    viewport: Viewport,
    camera: Camera,
    bounds: Bounds,
    gravity_k: f64,
    bodies: Vec<CelestialBody>,
    stars: Vec<Star>,
}

impl World {
    pub fn new(config: &WorldConfig, viewport: Viewport) -> Self {
        let mut rng = match config.star_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stars = stars::generate(&config.bounds, config.star_count, &mut rng);
        debug!(
            bodies = config.bodies.len(),
            stars = stars.len(),
            "world created"
        );
        Self {
            viewport,
            camera: Camera::new(config.camera_smoothing),
            bounds: config.bounds,
            gravity_k: config.gravity_k,
            bodies: config.bodies.clone(),
            stars,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Host viewport changed size. Bounds and bodies are unaffected.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(width = viewport.width, height = viewport.height, "viewport resized");
            self.viewport = viewport;
        }
    }

    /// Planetary gravity field at a world point (velocity change per frame).
    pub fn compute_gravity(&self, point: &Vector2<f64>) -> Vector2<f64> {
        gravity::planetary_accel(&self.bodies, point, self.gravity_k)
    }

    /// Ease the camera one frame towards centring `target`.
    pub fn update_camera(&mut self, target: &Vector2<f64>) {
        self.update_camera_scaled(target, 1.0);
    }

    pub fn update_camera_scaled(&mut self, target: &Vector2<f64>, scale: f64) {
        self.camera.follow(target, &self.viewport, scale);
    }

    /// Centre the camera on `target` with no easing (first frame).
    pub fn snap_camera(&mut self, target: &Vector2<f64>) {
        self.camera.snap_to(target, &self.viewport);
    }

    pub fn world_to_screen(&self, world: &Vector2<f64>) -> Vector2<f64> {
        self.camera.world_to_screen(world)
    }

    pub fn screen_to_world(&self, screen: &Vector2<f64>) -> Vector2<f64> {
        self.camera.screen_to_world(screen)
    }

    pub fn is_in_bounds(&self, point: &Vector2<f64>) -> bool {
        self.bounds.contains(point)
    }

    pub fn clamp_to_bounds(&self, point: &Vector2<f64>) -> Vector2<f64> {
        self.bounds.clamp(point)
    }

    /// World point currently under the viewport centre.
    pub fn view_center(&self) -> Vector2<f64> {
        self.screen_to_world(&self.viewport.center())
    }

    /// First body close enough to the view centre to get a name label.
    pub fn labelled_body(&self) -> Option<&CelestialBody> {
        let center = self.view_center();
        self.bodies
            .iter()
            .find(|b| b.distance_to(&center) < b.radius * LABEL_RANGE_RADII)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_world() -> World {
        let config = WorldConfig { bodies: vec![], star_count: 0, ..Default::default() };
        World::new(&config, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn default_world_matches_config() {
        let config = WorldConfig { star_seed: Some(1), ..Default::default() };
        let world = World::new(&config, Viewport::default());
        assert_eq!(world.bodies().len(), 4);
        assert_eq!(world.stars().len(), 200);
        assert_eq!(*world.bounds(), Bounds::default());
    }

    #[test]
    fn empty_world_has_no_field() {
        let world = empty_world();
        assert_eq!(world.compute_gravity(&Vector2::new(0.0, 500.0)), Vector2::zeros());
    }

    // Eased offsets are not exactly representable, so the inverse holds
    // to within rounding of the operands.
    fn assert_round_trip(world: &World, p: &Vector2<f64>) {
        let offset = world.camera().offset;
        let tol = 1e-9 * (1.0 + p.norm() + offset.norm());
        let back = world.screen_to_world(&world.world_to_screen(p));
        assert!((back - p).norm() <= tol, "{:?} -> {:?}", p, back);
        let back = world.world_to_screen(&world.screen_to_world(p));
        assert!((back - p).norm() <= tol, "{:?} -> {:?}", p, back);
    }

    #[test]
    fn camera_round_trip_after_follow() {
        let mut world = empty_world();
        world.update_camera(&Vector2::new(256.0, -128.0));
        assert_round_trip(&world, &Vector2::new(3.0, 4.0));
    }

    #[test]
    fn camera_round_trip_random_points() {
        use rand::Rng;

        let mut world = empty_world();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..25 {
            world.update_camera(&Vector2::new(0.1, 500.3));
        }
        for _ in 0..1000 {
            let p = Vector2::new(rng.gen_range(-2500.0..2500.0), rng.gen_range(-3500.0..1500.0));
            assert_round_trip(&world, &p);
        }
    }

    #[test]
    fn clamp_does_not_touch_input() {
        let world = empty_world();
        let p = Vector2::new(9999.0, -9999.0);
        let c = world.clamp_to_bounds(&p);
        assert_eq!(p, Vector2::new(9999.0, -9999.0));
        assert!(world.is_in_bounds(&c));
        assert!(!world.is_in_bounds(&p));
    }

    #[test]
    fn label_shows_near_body() {
        let config = WorldConfig { star_count: 0, ..Default::default() };
        let mut world = World::new(&config, Viewport::new(800.0, 600.0));
        world.snap_camera(&Vector2::new(0.0, 500.0));
        assert_eq!(world.labelled_body().map(|b| b.name.as_str()), Some("Home Planet"));
        world.snap_camera(&Vector2::new(0.0, -2500.0));
        assert!(world.labelled_body().is_none());
    }

    #[test]
    fn resize_keeps_bounds() {
        let mut world = empty_world();
        world.resize(Viewport::new(320.0, 480.0));
        assert_eq!(world.viewport().width, 320.0);
        assert_eq!(*world.bounds(), Bounds::default());
    }
}
