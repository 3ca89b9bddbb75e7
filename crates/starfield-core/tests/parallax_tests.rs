// Host-side tests for pointer-to-offset parallax mapping.

use glam::Vec2;
use starfield_core::{ParallaxOffset, Viewport};

#[test]
fn centred_pointer_gives_no_offset() {
    let off = ParallaxOffset::from_pointer(Vec2::new(500.0, 400.0), Viewport::new(1000.0, 800.0));
    assert_eq!(off.background, Vec2::ZERO);
    assert_eq!(off.foreground, Vec2::ZERO);
}

#[test]
fn corners_map_to_full_range() {
    let vp = Viewport::new(1000.0, 800.0);
    let top_left = ParallaxOffset::from_pointer(Vec2::ZERO, vp);
    assert_eq!(top_left.background, Vec2::new(-10.0, -10.0));
    assert_eq!(top_left.foreground, Vec2::new(-5.0, -5.0));

    let bottom_right = ParallaxOffset::from_pointer(Vec2::new(1000.0, 800.0), vp);
    assert_eq!(bottom_right.background, Vec2::new(10.0, 10.0));
    assert_eq!(bottom_right.foreground, Vec2::new(5.0, 5.0));
}

#[test]
fn foreground_moves_at_half_the_background() {
    let off = ParallaxOffset::from_pointer(Vec2::new(750.0, 200.0), Viewport::new(1000.0, 800.0));
    assert_eq!(off.background, Vec2::new(5.0, -5.0));
    assert_eq!(off.foreground, Vec2::new(2.5, -2.5));
}

#[test]
fn each_event_overwrites_the_previous_offset() {
    let vp = Viewport::new(640.0, 480.0);
    let a = ParallaxOffset::from_pointer(Vec2::new(0.0, 0.0), vp);
    let b = ParallaxOffset::from_pointer(Vec2::new(320.0, 240.0), vp);
    assert_ne!(a, b);
    assert_eq!(b, ParallaxOffset::default());
}

#[test]
fn empty_viewport_is_ignored() {
    let off = ParallaxOffset::from_pointer(Vec2::new(10.0, 10.0), Viewport::new(0.0, 0.0));
    assert_eq!(off, ParallaxOffset::default());
}
