// Host-side tests for tuning constants and their relationships.

use starfield_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(STAR_SIZE_MIN < STAR_SIZE_MAX);
    assert!(STAR_BASE_ALPHA_MIN < STAR_BASE_ALPHA_MAX);
    assert!(TWINKLE_SPEED_MIN < TWINKLE_SPEED_MAX);
    assert!(SHOOTING_SPEED_MIN < SHOOTING_SPEED_MAX);
    assert!(SHOOTING_LENGTH_MIN < SHOOTING_LENGTH_MAX);
    assert!(SPAWN_DELAY_MIN < SPAWN_DELAY_MAX);
    assert!(MIN_STARS <= MAX_STARS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn twinkle_band_stays_inside_unit_alpha() {
    // The oscillation band never needs clamping for a freshly drawn base alpha.
    assert!(STAR_BASE_ALPHA_MIN - TWINKLE_BAND >= 0.0);
    assert!(STAR_BASE_ALPHA_MAX + TWINKLE_BAND <= 1.0 + 1e-6);
    // A single step can never jump across the whole band.
    assert!(TWINKLE_SPEED_MAX < 2.0 * TWINKLE_BAND);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_and_parallax_factors_are_sane() {
    assert!(FADE_IN_STEP > 0.0 && FADE_IN_STEP <= 1.0);
    assert!(FADE_OUT_STEP > 0.0 && FADE_OUT_STEP <= 1.0);
    assert!(FADE_OUT_CHANCE > 0.0 && FADE_OUT_CHANCE < 1.0);
    assert!(OFFSCREEN_MARGIN >= SHOOTING_LENGTH_MAX);
    assert!(PARALLAX_FOREGROUND_FACTOR > 0.0 && PARALLAX_FOREGROUND_FACTOR < 1.0);
    assert!(SHOOTING_SPAWN_HEIGHT_FRACTION > 0.0 && SHOOTING_SPAWN_HEIGHT_FRACTION <= 1.0);
}
