//! The particle field: construction, stepping, and resize handling.

use glam::Vec2;

use crate::links::{proximity_links, Link};
use crate::particle::{Particle, ParticleShape, Tint};
use crate::rules::{self, Falloff};
use crate::spawn::SpawnContext;

/// Tuning knobs for a [`ParticleField`].
///
/// The defaults are the canonical backdrop: 15 slow ember/aqua elements with
/// gentle pointer repulsion and faint connecting lines. Use the `with_*`
/// methods to override individual values:
///
/// ```
/// use driftfield::field::FieldConfig;
///
/// let config = FieldConfig::default()
///     .with_count(20)
///     .with_repel_radius(200.0)
///     .with_seed(7);
/// ```
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Number of particles in the field.
    pub count: usize,
    /// Maximum initial speed per axis, pixels per frame.
    pub max_drift: f32,
    /// Particle diameter range in pixels.
    pub size_min: f32,
    /// See `size_min`.
    pub size_max: f32,
    /// Base opacity range.
    pub opacity_min: f32,
    /// See `opacity_min`.
    pub opacity_max: f32,
    /// Maximum rotation speed magnitude, degrees per frame.
    pub max_spin: f32,
    /// Pointer repulsion radius in pixels.
    pub repel_radius: f32,
    /// Velocity gained per frame at the repulsion center.
    pub repel_strength: f32,
    /// Repulsion falloff curve.
    pub repel_falloff: Falloff,
    /// Velocity scale applied on wall contact (reversed component).
    pub bounce_damping: f32,
    /// Per-frame velocity retention factor, < 1.
    pub friction: f32,
    /// Maximum distance at which particles link up, in pixels.
    pub link_distance: f32,
    /// Fixed RNG seed for reproducible fields. `None` spawns differently
    /// every run.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 15,
            max_drift: 0.25,
            size_min: 20.0,
            size_max: 60.0,
            opacity_min: 0.1,
            opacity_max: 0.4,
            max_spin: 1.0,
            repel_radius: 150.0,
            repel_strength: 0.02,
            repel_falloff: Falloff::Linear,
            bounce_damping: 0.8,
            friction: 0.98,
            link_distance: 200.0,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Set the number of particles.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the maximum initial drift speed per axis (pixels per frame).
    pub fn with_max_drift(mut self, max_drift: f32) -> Self {
        self.max_drift = max_drift;
        self
    }

    /// Set the pointer repulsion radius in pixels.
    pub fn with_repel_radius(mut self, radius: f32) -> Self {
        self.repel_radius = radius;
        self
    }

    /// Set the repulsion strength (velocity gained per frame at the center).
    pub fn with_repel_strength(mut self, strength: f32) -> Self {
        self.repel_strength = strength;
        self
    }

    /// Set the repulsion falloff curve.
    pub fn with_repel_falloff(mut self, falloff: Falloff) -> Self {
        self.repel_falloff = falloff;
        self
    }

    /// Set the wall bounce damping factor.
    pub fn with_bounce_damping(mut self, damping: f32) -> Self {
        self.bounce_damping = damping;
        self
    }

    /// Set the per-frame friction factor (must be < 1 to stay bounded).
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Set the maximum link distance in pixels.
    pub fn with_link_distance(mut self, distance: f32) -> Self {
        self.link_distance = distance;
        self
    }

    /// Fix the RNG seed so the field spawns identically every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A set of drifting particles bounded by the viewport.
///
/// The field owns its particles outright; stepping mutates them in place as
/// a deterministic function of the previous state, the pointer sample, and
/// the elapsed time. There is no hidden state between steps.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field spanning `width x height` pixels.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        let bounds = Vec2::new(width, height);
        let particles = spawn_all(&config, bounds);
        Self {
            config,
            bounds,
            particles,
        }
    }

    /// Create a field from hand-placed particles instead of random spawns.
    ///
    /// Stepping and resizing behave exactly as for [`new`](Self::new);
    /// a resize replaces the custom set with random spawns.
    pub fn with_particles(
        config: FieldConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            config,
            bounds: Vec2::new(width, height),
            particles,
        }
    }

    /// Advance the simulation by `dt` frames (1.0 = one 60 Hz frame).
    ///
    /// Order per particle: pointer repulsion, position integration, wall
    /// bounce, friction, rotation. `pointer` is the latest sampled cursor
    /// position, or `None` when the cursor is outside the viewport.
    pub fn step(&mut self, pointer: Option<Vec2>, dt: f32) {
        let cfg = &self.config;
        for p in &mut self.particles {
            if let Some(point) = pointer {
                rules::repel_from(
                    p,
                    point,
                    cfg.repel_strength,
                    cfg.repel_radius,
                    cfg.repel_falloff,
                    dt,
                );
            }

            p.position += p.velocity * dt;
            rules::bounce_walls(p, self.bounds, cfg.bounce_damping);
            rules::friction(p, cfg.friction, dt);

            p.rotation = (p.rotation + p.rotation_speed * dt).rem_euclid(360.0);
        }
    }

    /// Rebuild the field for a new viewport size.
    ///
    /// Resizing re-spawns every particle rather than rescaling positions
    /// in place.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Vec2::new(width, height);
        if bounds == self.bounds {
            return;
        }
        log::debug!(
            "field resize {}x{} -> {}x{}, respawning {} particles",
            self.bounds.x,
            self.bounds.y,
            width,
            height,
            self.config.count
        );
        self.bounds = bounds;
        self.particles = spawn_all(&self.config, bounds);
    }

    /// Links between all particle pairs within the configured link distance.
    pub fn links(&self) -> Vec<Link> {
        proximity_links(&self.particles, self.config.link_distance)
    }

    /// The current particle set.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Viewport size in pixels.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// The configuration this field was built with.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

fn spawn_all(config: &FieldConfig, bounds: Vec2) -> Vec<Particle> {
    (0..config.count)
        .map(|index| {
            let mut ctx = SpawnContext::new(index, config.count, bounds.x, bounds.y, config.seed);
            Particle {
                position: ctx.random_in_viewport(),
                velocity: ctx.drift_velocity(config.max_drift),
                size: ctx.random_range(config.size_min, config.size_max),
                opacity: ctx.random_range(config.opacity_min, config.opacity_max),
                tint: if ctx.coin() { Tint::Ember } else { Tint::Aqua },
                shape: match index % 3 {
                    0 => ParticleShape::Triangle,
                    1 => ParticleShape::Circle,
                    _ => ParticleShape::RoundedSquare,
                },
                rotation: ctx.random_rotation(),
                rotation_speed: ctx.random_spin(config.max_spin),
            }
        })
        .collect()
}
