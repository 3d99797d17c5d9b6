use nalgebra::Vector2;

use crate::world::body::CelestialBody;

/// Default field strength constant for [`planetary_accel`].
pub const DEFAULT_GRAVITY_K: f64 = 0.001;

/// Pull of a single body on `point`.
///
/// Magnitude is `radius * k / d^2`, directed from `point` towards the body's
/// centre. Points at or inside the radius get nothing, so the field never
/// blows up near the centre.
pub fn body_accel(body: &CelestialBody, point: &Vector2<f64>, k: f64) -> Vector2<f64> {
    if body.contains(point) {
        return Vector2::zeros();
    }
    let delta = body.pos - point;
    let distance = delta.norm();
    let magnitude = body.radius * k / (distance * distance);
    delta / distance * magnitude
}

/// Summed pull of every body on `point` (velocity increment per frame).
pub fn planetary_accel(bodies: &[CelestialBody], point: &Vector2<f64>, k: f64) -> Vector2<f64> {
    bodies
        .iter()
        .map(|b| body_accel(b, point, k))
        .fold(Vector2::zeros(), |acc, a| acc + a)
}
