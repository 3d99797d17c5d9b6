use nalgebra::Vector2;
use rand::Rng;

use super::bounds::Bounds;

/// Decorative background star. Never touches the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vector2<f64>,
    pub size: f64,        // draw radius, px
    pub brightness: f64,  // alpha, 0.5..1.0
}

/// Scatter `count` stars uniformly over `bounds`.
pub fn generate<R: Rng + ?Sized>(bounds: &Bounds, count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vector2::new(
                rng.gen_range(bounds.left..bounds.right),
                rng.gen_range(bounds.top..bounds.bottom),
            ),
            size: rng.gen_range(0.5..2.5),
            brightness: rng.gen_range(0.5..1.0),
        })
        .collect()
}
