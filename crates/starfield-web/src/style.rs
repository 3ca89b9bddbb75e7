// CSS value builders. Kept free of web-sys so they can be tested on the host.

use glam::Vec2;

/// Fill/stroke colour for every particle: white at `alpha`.
#[inline]
pub fn rgba_white(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {})", alpha.clamp(0.0, 1.0))
}

#[inline]
pub fn translate_px(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[inline]
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}
