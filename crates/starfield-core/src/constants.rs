// Fixed tuning constants for the starfield, parallax and player.

// Star density
pub const AREA_PER_STAR: f64 = 2000.0; // square drawing units per twinkling star
pub const MIN_STARS: usize = 1; // floor for any non-empty viewport
pub const MAX_STARS: usize = 10_000; // ceiling for very large viewports

// Twinkling stars
pub const STAR_SIZE_MIN: f32 = 0.5;
pub const STAR_SIZE_MAX: f32 = 2.0;
pub const STAR_BASE_ALPHA_MIN: f32 = 0.2;
pub const STAR_BASE_ALPHA_MAX: f32 = 0.8;
pub const TWINKLE_BAND: f32 = 0.2; // alpha oscillates within base ± band
pub const TWINKLE_SPEED_MIN: f32 = 0.005; // alpha change per tick
pub const TWINKLE_SPEED_MAX: f32 = 0.02;

// Shooting stars
pub const SHOOTING_ANGLE_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const SHOOTING_SPEED_MIN: f32 = 5.0; // units per tick
pub const SHOOTING_SPEED_MAX: f32 = 15.0;
pub const SHOOTING_LENGTH_MIN: f32 = 20.0;
pub const SHOOTING_LENGTH_MAX: f32 = 100.0;
pub const SHOOTING_SPAWN_HEIGHT_FRACTION: f32 = 0.5; // spawn within the top half
pub const FADE_IN_STEP: f32 = 0.05;
pub const FADE_OUT_STEP: f32 = 0.03;
pub const FADE_OUT_CHANCE: f64 = 0.05; // per-tick probability of a fade-out step
pub const OFFSCREEN_MARGIN: f32 = 100.0;
pub const HEAD_RADIUS: f32 = 2.0;
pub const TRAIL_WIDTH: f32 = 2.0;

// Spawn schedule (same clock as the frame timestamp, milliseconds in the browser)
pub const SPAWN_DELAY_MIN: f64 = 15_000.0;
pub const SPAWN_DELAY_MAX: f64 = 40_000.0;

// Parallax
pub const PARALLAX_RANGE: f32 = 20.0; // full pointer sweep maps to ±range/2
pub const PARALLAX_FOREGROUND_FACTOR: f32 = 0.5; // star canvas moves at half the background
