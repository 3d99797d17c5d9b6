use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Drawable area size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0 }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a screen point lies inside the viewport grown by `margin`.
    pub fn contains(&self, screen: &Vector2<f64>, margin: f64) -> bool {
        screen.x >= -margin
            && screen.x <= self.width + margin
            && screen.y >= -margin
            && screen.y <= self.height + margin
    }
}

// ---------------------------------------------------------------------------
// Follow camera: screen = world + offset
// ---------------------------------------------------------------------------

/// Translation-only camera with first-order easing towards its target.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub offset: Vector2<f64>,
    pub smoothing: f64, // fraction of the remaining error closed per frame, (0, 1]
}

impl Camera {
    pub fn new(smoothing: f64) -> Self {
        Self { offset: Vector2::zeros(), smoothing }
    }

    /// Offset that would put `target` exactly at the viewport centre.
    pub fn centering_offset(target: &Vector2<f64>, viewport: &Viewport) -> Vector2<f64> {
        viewport.center() - target
    }

    /// Close `fraction` of the gap between the current and desired offset.
    pub fn ease_towards(&mut self, desired: &Vector2<f64>, fraction: f64) {
        self.offset += (desired - self.offset) * fraction;
    }

    /// Move one frame towards centring `target`. `scale` is the frame length
    /// in nominal frames; the per-frame fraction compounds as `1 - (1 - s)^scale`.
    pub fn follow(&mut self, target: &Vector2<f64>, viewport: &Viewport, scale: f64) {
        let desired = Self::centering_offset(target, viewport);
        let fraction = if scale == 1.0 {
            self.smoothing
        } else {
            1.0 - (1.0 - self.smoothing).powf(scale)
        };
        self.ease_towards(&desired, fraction);
    }

    /// Jump straight to the centred position.
    pub fn snap_to(&mut self, target: &Vector2<f64>, viewport: &Viewport) {
        self.offset = Self::centering_offset(target, viewport);
    }

    pub fn world_to_screen(&self, world: &Vector2<f64>) -> Vector2<f64> {
        world + self.offset
    }

    pub fn screen_to_world(&self, screen: &Vector2<f64>) -> Vector2<f64> {
        screen - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_ten_percent_per_frame() {
        let mut cam = Camera::new(0.1);
        cam.ease_towards(&Vector2::new(100.0, 0.0), cam.smoothing);
        assert!((cam.offset.x - 10.0).abs() < 1e-12);
        assert_eq!(cam.offset.y, 0.0);
        cam.ease_towards(&Vector2::new(100.0, 0.0), cam.smoothing);
        assert!((cam.offset.x - 19.0).abs() < 1e-12);
    }

    #[test]
    fn follow_targets_viewport_centre() {
        let vp = Viewport::new(800.0, 600.0);
        let mut cam = Camera::new(0.1);
        cam.follow(&Vector2::new(-100.0, 0.0), &Viewport::new(0.0, 0.0), 1.0);
        assert!((cam.offset - Vector2::new(10.0, 0.0)).norm() < 1e-12);

        let target = Vector2::new(0.0, 500.0);
        cam.snap_to(&target, &vp);
        assert_eq!(cam.world_to_screen(&target), vp.center());
    }

    #[test]
    fn never_overshoots() {
        let vp = Viewport::new(800.0, 600.0);
        let target = Vector2::new(1000.0, -2000.0);
        let desired = Camera::centering_offset(&target, &vp);
        let mut cam = Camera::new(0.1);
        let mut prev_gap = (desired - cam.offset).norm();
        for _ in 0..200 {
            cam.follow(&target, &vp, 1.0);
            let gap = (desired - cam.offset).norm();
            assert!(gap < prev_gap);
            // Same direction as the initial error on both axes.
            assert!(cam.offset.x >= desired.x && cam.offset.y <= desired.y);
            prev_gap = gap;
        }
    }

    #[test]
    fn scaled_follow_matches_two_frames() {
        let vp = Viewport::new(800.0, 600.0);
        let target = Vector2::new(300.0, 0.0);
        let mut two = Camera::new(0.1);
        two.follow(&target, &vp, 1.0);
        two.follow(&target, &vp, 1.0);
        let mut once = Camera::new(0.1);
        once.follow(&target, &vp, 2.0);
        assert!((two.offset - once.offset).norm() < 1e-9);
    }

    #[test]
    fn screen_world_round_trip() {
        let mut cam = Camera::new(0.1);
        cam.offset = Vector2::new(640.0, -140.0);
        for p in [
            Vector2::new(0.0, 0.0),
            Vector2::new(12.5, -7.25),
            Vector2::new(-2000.0, 1000.0),
        ] {
            assert_eq!(cam.screen_to_world(&cam.world_to_screen(&p)), p);
            assert_eq!(cam.world_to_screen(&cam.screen_to_world(&p)), p);
        }
    }

    #[test]
    fn viewport_margin() {
        let vp = Viewport::new(100.0, 100.0);
        assert!(vp.contains(&Vector2::new(-10.0, 50.0), 10.0));
        assert!(!vp.contains(&Vector2::new(-10.5, 50.0), 10.0));
    }
}
