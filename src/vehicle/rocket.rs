use nalgebra::Vector2;

use super::tuning::VehicleTuning;
use crate::world::World;

// ---------------------------------------------------------------------------
// Vehicle kinematic state
// ---------------------------------------------------------------------------

/// Player rocket. Screen convention: +y is down, heading 0 points up and
/// grows clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub pos: Vector2<f64>,   // world units
    pub vel: Vector2<f64>,   // world units per frame
    pub heading: f64,        // rad
    pub engine_on: bool,
    pub throttle: u8,        // percent, 0..=100
    pub tuning: VehicleTuning,
}

impl Vehicle {
    pub fn new(pos: Vector2<f64>, tuning: VehicleTuning) -> Self {
        Self {
            pos,
            vel: Vector2::zeros(),
            heading: 0.0,
            engine_on: false,
            throttle: 0,
            tuning,
        }
    }

    /// Unit vector along the nose.
    pub fn nose_direction(&self) -> Vector2<f64> {
        Vector2::new(self.heading.sin(), -self.heading.cos())
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    pub fn distance_from(&self, point: &Vector2<f64>) -> f64 {
        (self.pos - point).norm()
    }

    /// Rotate by `direction` (-1 left, +1 right) turn steps.
    pub fn turn(&mut self, direction: f64, scale: f64) {
        self.heading += direction * self.tuning.rotation_speed * scale;
    }

    /// Advance exactly one frame.
    pub fn update(&mut self, world: &World) {
        self.step(world, 1.0);
    }

    /// Advance `scale` nominal frames in a single explicit Euler step.
    ///
    /// Order: thrust, uniform gravity, planetary gravity, drag, speed cap,
    /// position, wall bounce. At `scale == 1.0` this is exactly the classic
    /// per-frame update.
    pub fn step(&mut self, world: &World, scale: f64) {
        let t = self.tuning;

        if self.engine_on && self.throttle > 0 {
            self.vel += self.nose_direction() * (t.thrust_at(self.throttle) * scale);
        }

        self.vel.y += t.gravity * scale;
        self.vel += world.compute_gravity(&self.pos) * scale;

        let drag = if scale == 1.0 { t.drag } else { t.drag.powf(scale) };
        self.vel *= drag;

        let speed = self.vel.norm();
        if speed > t.max_velocity {
            self.vel *= t.max_velocity / speed;
        }

        self.pos += self.vel * scale;

        self.pos = world.clamp_to_bounds(&self.pos);
        let b = world.bounds();
        if self.pos.x <= b.left || self.pos.x >= b.right {
            self.vel.x = -self.vel.x * t.bounce;
        }
        if self.pos.y <= b.top || self.pos.y >= b.bottom {
            self.vel.y = -self.vel.y * t.bounce;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::TuningBuilder;
    use crate::world::{Viewport, WorldConfig};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    fn world(bodies: bool) -> World {
        let mut config = WorldConfig { star_count: 0, ..Default::default() };
        if !bodies {
            config.bodies.clear();
        }
        World::new(&config, Viewport::new(800.0, 600.0))
    }

    fn rocket() -> Vehicle {
        Vehicle::new(Vector2::new(0.0, 500.0), VehicleTuning::default())
    }

    #[test]
    fn single_coasting_frame() {
        let w = world(false);
        let mut r = rocket();
        r.update(&w);
        assert!((r.vel.y - 0.0499).abs() < 1e-12);
        assert!((r.pos.y - 500.0499).abs() < 1e-9);
        assert_eq!(r.vel.x, 0.0);
    }

    #[test]
    fn single_frame_with_home_planet() {
        // Home Planet sits 300 units below and adds a tiny extra pull.
        let w = world(true);
        let mut r = rocket();
        r.update(&w);
        assert!((r.vel.y - 0.0499).abs() < 1e-5);
        assert!(r.vel.y > 0.0499);
        assert!((r.pos.y - 500.0499).abs() < 1e-5);
    }

    #[test]
    fn free_fall_without_drag() {
        let w = world(false);
        let mut r = Vehicle::new(Vector2::new(0.0, 0.0), TuningBuilder::new().drag(1.0).build());
        let n = 40;
        for _ in 0..n {
            r.update(&w);
        }
        assert!((r.vel.y - n as f64 * 0.05).abs() < 1e-9);
        assert_eq!(r.vel.x, 0.0);
    }

    #[test]
    fn free_fall_with_drag_is_geometric() {
        let w = world(false);
        let mut r = Vehicle::new(Vector2::zeros(), VehicleTuning::default());
        let mut expected = 0.0;
        for _ in 0..25 {
            r.update(&w);
            expected = (expected + 0.05) * 0.998;
        }
        assert!((r.vel.y - expected).abs() < 1e-12);
    }

    #[test]
    fn thrust_follows_heading() {
        let w = world(false);
        let mut r = rocket();
        r.engine_on = true;
        r.throttle = 100;
        r.update(&w);
        assert!(r.vel.y < 0.0, "nose up should climb");
        assert!(r.vel.x.abs() < 1e-12);

        let mut r = rocket();
        r.engine_on = true;
        r.throttle = 50;
        r.heading = FRAC_PI_2;
        r.update(&w);
        assert!((r.vel.x - 1.0 * 0.998).abs() < 1e-12);
    }

    #[test]
    fn no_thrust_at_zero_throttle() {
        let w = world(false);
        let mut burning = rocket();
        burning.engine_on = true;
        let mut coasting = rocket();
        burning.update(&w);
        coasting.update(&w);
        assert_eq!(burning.vel, coasting.vel);
    }

    #[test]
    fn speed_is_capped() {
        let w = world(true);
        let mut r = rocket();
        r.engine_on = true;
        r.throttle = 100;
        r.heading = 0.3;
        for _ in 0..300 {
            r.update(&w);
            assert!(r.speed() <= r.tuning.max_velocity + 1e-9);
        }
    }

    #[test]
    fn cap_preserves_direction() {
        let w = world(false);
        let tuning = TuningBuilder::new().gravity(0.0).drag(1.0).build();
        let mut r = Vehicle::new(Vector2::zeros(), tuning);
        r.vel = Vector2::new(30.0, 40.0);
        r.update(&w);
        assert!((r.speed() - 15.0).abs() < 1e-12);
        assert!((r.vel.x / r.vel.y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn bounces_off_walls() {
        let w = world(false);
        let tuning = TuningBuilder::new().gravity(0.0).drag(1.0).build();
        let mut r = Vehicle::new(Vector2::new(1995.0, 0.0), tuning);
        r.vel = Vector2::new(10.0, 0.0);
        r.update(&w);
        assert_eq!(r.pos.x, 2000.0);
        assert_eq!(r.vel.x, -5.0);

        let mut r = Vehicle::new(Vector2::new(0.0, -2999.0), tuning);
        r.vel = Vector2::new(0.0, -8.0);
        r.update(&w);
        assert_eq!(r.pos.y, -3000.0);
        assert_eq!(r.vel.y, 4.0);
    }

    #[test]
    fn never_leaves_bounds() {
        let w = world(true);
        let mut rng = StdRng::seed_from_u64(99);
        let mut r = rocket();
        for _ in 0..5_000 {
            r.engine_on = rng.gen_bool(0.7);
            r.throttle = rng.gen_range(0..=100);
            r.turn(rng.gen_range(-1.0..=1.0), 1.0);
            r.update(&w);
            assert!(w.is_in_bounds(&r.pos), "escaped to {:?}", r.pos);
            assert!(r.speed() <= r.tuning.max_velocity + 1e-9);
        }
    }

    #[test]
    fn scaled_step_matches_frame_at_unit_scale() {
        let w = world(true);
        let mut a = rocket();
        let mut b = rocket();
        a.engine_on = true;
        a.throttle = 60;
        b.engine_on = true;
        b.throttle = 60;
        a.update(&w);
        b.step(&w, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn distance_from_point() {
        let r = rocket();
        assert!((r.distance_from(&Vector2::new(3.0, 504.0)) - 5.0).abs() < 1e-12);
    }
}
