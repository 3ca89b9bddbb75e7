use crate::constants::{SPAWN_DELAY_MAX, SPAWN_DELAY_MIN};
use crate::particle::{Particle, ShootingStar, TwinkleStar};
use crate::surface::Surface;
use crate::viewport::Viewport;
use rand::prelude::*;

/// Owns the twinkling-star batch, the live shooting stars and the spawn
/// schedule. Driven one frame at a time through [`Starfield::tick`], either by
/// the browser's animation frame or by a test feeding synthetic timestamps.
pub struct Starfield<R = StdRng> {
    viewport: Viewport,
    stars: Vec<TwinkleStar>,
    shooting_stars: Vec<ShootingStar>,
    next_spawn_at: Option<f64>,
    rng: R,
}

impl Starfield<StdRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> Starfield<R> {
    pub fn new(rng: R) -> Self {
        Self {
            viewport: Viewport::default(),
            stars: Vec::new(),
            shooting_stars: Vec::new(),
            next_spawn_at: None,
            rng,
        }
    }

    /// Throw away the current star batch and lay out a fresh one for
    /// `viewport`. Call before the first tick and on every resize.
    pub fn initialize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let count = viewport.star_count();
        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            let star = TwinkleStar::random(&mut self.rng, viewport);
            self.stars.push(star);
        }
        log::debug!(
            "[starfield] viewport {}x{} -> {} stars",
            viewport.width,
            viewport.height,
            count
        );
    }

    /// One simulation step followed by a full redraw.
    pub fn tick(&mut self, timestamp: f64, surface: &mut dyn Surface) {
        self.step(timestamp);
        self.draw(surface);
    }

    /// Advance every particle by one frame without drawing.
    pub fn step(&mut self, timestamp: f64) {
        let viewport = self.viewport;
        for star in &mut self.stars {
            star.update(&mut self.rng, viewport);
        }

        // A single spawn per crossing; missed deadlines are not caught up.
        match self.next_spawn_at {
            None => self.schedule_next_spawn(timestamp),
            Some(deadline) if timestamp > deadline => {
                self.spawn_shooting_star();
                self.schedule_next_spawn(timestamp);
            }
            Some(_) => {}
        }

        for shooting in &mut self.shooting_stars {
            shooting.update(&mut self.rng, viewport);
        }
        self.shooting_stars.retain(|s| s.is_active());
    }

    /// Clear, then stars, then shooting stars so trails sit on top.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for star in &self.stars {
            star.draw(surface);
        }
        for shooting in &self.shooting_stars {
            shooting.draw(surface);
        }
    }

    pub fn spawn_shooting_star(&mut self) {
        let star = ShootingStar::random(&mut self.rng, self.viewport);
        log::debug!(
            "[starfield] shooting star at ({:.0},{:.0}) v=({:.1},{:.1})",
            star.position.x,
            star.position.y,
            star.velocity.x,
            star.velocity.y
        );
        self.shooting_stars.push(star);
    }

    pub fn add_shooting_star(&mut self, star: ShootingStar) {
        self.shooting_stars.push(star);
    }

    /// Drop every particle and forget the spawn deadline.
    pub fn reset(&mut self) {
        self.stars.clear();
        self.shooting_stars.clear();
        self.next_spawn_at = None;
    }

    fn schedule_next_spawn(&mut self, now: f64) {
        let delay = self.rng.gen_range(SPAWN_DELAY_MIN..SPAWN_DELAY_MAX);
        self.next_spawn_at = Some(now + delay);
        log::debug!("[starfield] next shooting star in {:.0}", delay);
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn stars(&self) -> &[TwinkleStar] {
        &self.stars
    }

    #[inline]
    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    #[inline]
    pub fn next_spawn_at(&self) -> Option<f64> {
        self.next_spawn_at
    }
}
