use crate::constants::{AREA_PER_STAR, MAX_STARS, MIN_STARS};
use glam::Vec2;

/// Drawable area the simulator lays particles out in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Number of twinkling stars for this size: `floor(w * h / 2000)`, kept
    /// within `[MIN_STARS, MAX_STARS]` unless the viewport has no area.
    pub fn star_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let area = self.width as f64 * self.height as f64;
        let raw = (area / AREA_PER_STAR).floor() as usize;
        raw.clamp(MIN_STARS, MAX_STARS)
    }

    /// Whether `p` lies inside the viewport grown by `margin` on every edge.
    #[inline]
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}
