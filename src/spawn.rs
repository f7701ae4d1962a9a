//! Spawn context for particle initialization.
//!
//! Provides helper methods to reduce boilerplate when spawning particles,
//! and carries the RNG so seeded fields are reproducible.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Context handed to the spawner for each particle.
///
/// ```
/// use driftfield::spawn::SpawnContext;
///
/// let mut ctx = SpawnContext::new(0, 15, 800.0, 600.0, Some(7));
/// let position = ctx.random_in_viewport();
/// assert!(position.x >= 0.0 && position.x <= 800.0);
/// ```
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: usize,
    /// Total number of particles being spawned.
    pub count: usize,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Internal RNG - use helper methods instead of accessing directly.
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a spawn context for one particle.
    ///
    /// With `seed` set, the same (seed, index) pair always yields the same
    /// draws; without it, entropy comes from the system clock so every run
    /// differs.
    pub fn new(index: usize, count: usize, width: f32, height: f32, seed: Option<u64>) -> Self {
        let rng_seed = match seed {
            Some(s) => s.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            None => {
                (index as u64)
                    ^ std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .map(|d| d.as_nanos() as u64)
                        .unwrap_or(42)
            }
        };

        Self {
            index,
            count,
            width,
            height,
            rng: SmallRng::seed_from_u64(rng_seed),
        }
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Fair coin flip.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.rng.gen()
    }

    // ========== Position helpers ==========

    /// Uniformly random point inside the viewport.
    pub fn random_in_viewport(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..self.width),
            self.rng.gen_range(0.0..self.height),
        )
    }

    // ========== Velocity helpers ==========

    /// Random drift velocity with each component in `[-max_speed, max_speed]`.
    pub fn drift_velocity(&mut self, max_speed: f32) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-max_speed..max_speed),
            self.rng.gen_range(-max_speed..max_speed),
        )
    }

    // ========== Cosmetic helpers ==========

    /// Random rotation in `[0, 360)` degrees.
    pub fn random_rotation(&mut self) -> f32 {
        self.rng.gen_range(0.0..360.0)
    }

    /// Random spin in `[-max, max]` degrees per frame.
    pub fn random_spin(&mut self, max: f32) -> f32 {
        self.rng.gen_range(-max..max)
    }
}
