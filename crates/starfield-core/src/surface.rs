//! Drawing-surface abstraction.
//!
//! The simulator never touches a real canvas. It draws through this trait,
//! which the web front-end implements on top of `CanvasRenderingContext2d`
//! and tests implement with a command recorder. All primitives draw in pure
//! white; only the alpha varies.

use glam::Vec2;

pub trait Surface {
    /// Erase the whole surface.
    fn clear(&mut self);
    /// Filled circle of `radius` at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
    /// Straight stroked segment from `from` to `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, alpha: f32);
}
