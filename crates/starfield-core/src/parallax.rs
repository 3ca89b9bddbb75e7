use crate::constants::{PARALLAX_FOREGROUND_FACTOR, PARALLAX_RANGE};
use crate::viewport::Viewport;
use glam::Vec2;

/// Translations applied to the two layers for the latest pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    pub background: Vec2,
    pub foreground: Vec2,
}

impl ParallaxOffset {
    /// `((p / size) - 0.5) * 20` for the background, half of that for the
    /// star canvas. A pointer in the centre gives no offset.
    pub fn from_pointer(pointer: Vec2, viewport: Viewport) -> Self {
        if viewport.is_empty() {
            return Self::default();
        }
        let size = Vec2::new(viewport.width, viewport.height);
        let background = (pointer / size - Vec2::splat(0.5)) * PARALLAX_RANGE;
        Self {
            background,
            foreground: background * PARALLAX_FOREGROUND_FACTOR,
        }
    }
}
