//! The two particle kinds: the static-but-twinkling background star and the
//! occasional shooting star. They share the `Particle` update/draw contract
//! but keep their own state.

use crate::constants::*;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::{Rng, RngCore};

pub trait Particle {
    /// Advance by exactly one tick.
    fn update(&mut self, rng: &mut dyn RngCore, viewport: Viewport);
    fn draw(&self, surface: &mut dyn Surface);
    /// `false` once the particle should leave the live set.
    fn is_active(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
pub struct TwinkleStar {
    pub position: Vec2,
    pub size: f32,
    pub base_alpha: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

impl TwinkleStar {
    pub fn new(position: Vec2, size: f32, base_alpha: f32, twinkle_speed: f32) -> Self {
        Self {
            position,
            size,
            base_alpha,
            alpha: base_alpha,
            twinkle_speed,
            direction: 1.0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        Self::new(
            position,
            rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
            rng.gen_range(STAR_BASE_ALPHA_MIN..STAR_BASE_ALPHA_MAX),
            rng.gen_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX),
        )
    }

    /// One oscillator step. Order matters: increment, flip on leaving the
    /// band, then clamp. The flip happens on the first out-of-band tick, so
    /// alpha overshoots the band by at most one step.
    pub fn twinkle(&mut self) {
        self.alpha += self.twinkle_speed * self.direction;
        let upper = self.base_alpha + TWINKLE_BAND;
        let lower = self.base_alpha - TWINKLE_BAND;
        if self.alpha > upper || self.alpha < lower {
            self.direction = -self.direction;
        }
        self.alpha = self.alpha.clamp(0.0, 1.0);
    }
}

impl Particle for TwinkleStar {
    fn update(&mut self, _rng: &mut dyn RngCore, _viewport: Viewport) {
        self.twinkle();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, self.size, self.alpha);
    }
}

#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
    pub length: f32,
    pub opacity: f32,
    pub fading_in: bool,
    pub active: bool,
}

impl ShootingStar {
    pub fn new(position: Vec2, velocity: Vec2, length: f32) -> Self {
        Self {
            position,
            velocity,
            speed: velocity.length(),
            length,
            opacity: 0.0,
            fading_in: true,
            active: true,
        }
    }

    /// Spawn somewhere in the top half of the viewport, heading down at 45°
    /// either to the right or to the left.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height * SHOOTING_SPAWN_HEIGHT_FRACTION,
        );
        let length = rng.gen_range(SHOOTING_LENGTH_MIN..SHOOTING_LENGTH_MAX);
        let speed = rng.gen_range(SHOOTING_SPEED_MIN..SHOOTING_SPEED_MAX);
        let heading = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let velocity = Vec2::new(
            heading * speed * SHOOTING_ANGLE_RAD.cos(),
            speed * SHOOTING_ANGLE_RAD.sin(),
        );
        Self::new(position, velocity, length)
    }

    /// End of the trail: `head - velocity * (length / speed)`.
    pub fn tail(&self) -> Vec2 {
        if self.speed > 0.0 {
            self.position - self.velocity * (self.length / self.speed)
        } else {
            self.position
        }
    }
}

impl Particle for ShootingStar {
    fn update(&mut self, rng: &mut dyn RngCore, viewport: Viewport) {
        if !self.active {
            return;
        }
        self.position += self.velocity;

        if self.fading_in {
            self.opacity += FADE_IN_STEP;
            if self.opacity >= 1.0 {
                self.opacity = 1.0;
                self.fading_in = false;
            }
        } else if rng.gen_bool(FADE_OUT_CHANCE) {
            self.opacity = (self.opacity - FADE_OUT_STEP).max(0.0);
        }

        if !viewport.contains_with_margin(self.position, OFFSCREEN_MARGIN) || self.opacity <= 0.0 {
            self.active = false;
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }
        surface.stroke_line(self.position, self.tail(), TRAIL_WIDTH, self.opacity);
        surface.fill_circle(self.position, HEAD_RADIUS, self.opacity);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
