use nalgebra::Vector2;

use crate::world::Viewport;

/// Viewports at or below this width get the on-screen controls.
pub const COMPACT_MAX_WIDTH: f64 = 768.0;

const BUTTON_SIZE: f64 = 60.0;
const BUTTON_BOTTOM_GAP: f64 = 80.0;
const THROTTLE_BAR_TOP: f64 = 100.0;
const THROTTLE_BAR_WIDTH: f64 = 40.0;

/// Screen-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict interior test; points on the border miss.
    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

// ---------------------------------------------------------------------------
// HUD layout: turn buttons bottom-left, engine bottom-right, throttle bar right
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub left: Rect,
    pub right: Rect,
    pub engine: Rect,
    pub throttle_bar: Rect,
}

impl HudLayout {
    pub fn for_viewport(vp: &Viewport) -> Self {
        let button_y = vp.height - BUTTON_BOTTOM_GAP;
        Self {
            left: Rect::new(30.0, button_y, BUTTON_SIZE, BUTTON_SIZE),
            right: Rect::new(110.0, button_y, BUTTON_SIZE, BUTTON_SIZE),
            engine: Rect::new(vp.width - 90.0, button_y, BUTTON_SIZE, BUTTON_SIZE),
            throttle_bar: Rect::new(
                vp.width - 70.0,
                THROTTLE_BAR_TOP,
                THROTTLE_BAR_WIDTH,
                vp.height - 2.0 * THROTTLE_BAR_TOP,
            ),
        }
    }

    /// Whether on-screen controls should be shown for this viewport.
    pub fn is_compact(vp: &Viewport) -> bool {
        vp.width <= COMPACT_MAX_WIDTH
    }

    /// Throttle percent for a touch at `p`, or `None` when it misses the bar.
    ///
    /// The bar's whole vertical extent counts, ends included: the top edge
    /// is 100% and the bottom edge 0%.
    pub fn throttle_at(&self, p: &Vector2<f64>) -> Option<u8> {
        let bar = &self.throttle_bar;
        if bar.h <= 0.0 {
            return None;
        }
        let inside_x = p.x > bar.x && p.x < bar.x + bar.w;
        let inside_y = p.y >= bar.y && p.y <= bar.y + bar.h;
        if !(inside_x && inside_y) {
            return None;
        }
        let percent = 100.0 - (p.y - bar.y) / bar.h * 100.0;
        Some(percent.round().clamp(0.0, 100.0) as u8)
    }

    /// Knob centre height for a throttle setting.
    pub fn knob_y(&self, throttle: u8) -> f64 {
        let bar = &self.throttle_bar;
        bar.y + bar.h * (1.0 - f64::from(throttle.min(100)) / 100.0)
    }
}
