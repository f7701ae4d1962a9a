//! Per-step behaviors applied to particles.
//!
//! Each behavior is a small, independently testable operation on a single
//! particle. [`crate::field::ParticleField::step`] composes them in a fixed
//! order: pointer repulsion, integration, wall bounce, friction, rotation.
//!
//! All behaviors are deterministic numeric transforms with no failure modes.
//! The one degenerate input worth guarding is a particle exactly colocated
//! with the repulsion point, which receives no force instead of an undefined
//! direction.

use crate::particle::Particle;
use glam::Vec2;

/// Distance falloff functions for force-based behaviors.
///
/// Controls how a force's strength changes with distance from the source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Falloff {
    /// Constant force regardless of distance.
    Constant,

    /// Linear falloff: force decreases linearly to zero at max range.
    #[default]
    Linear,

    /// Inverse falloff: force = 1/distance (with softening).
    Inverse,

    /// Inverse-square falloff: force = 1/distance² (realistic gravity/EM).
    InverseSquare,

    /// Smooth falloff using smoothstep for gradual transitions.
    Smooth,
}

impl Falloff {
    /// Compute the falloff factor for a given distance and effect radius.
    pub fn factor(&self, dist: f32, radius: f32) -> f32 {
        match self {
            Falloff::Constant => 1.0,
            Falloff::Linear => 1.0 - dist / radius,
            Falloff::Inverse => 1.0 / (dist + 0.01),
            Falloff::InverseSquare => 1.0 / (dist * dist + 0.0001),
            Falloff::Smooth => 1.0 - smoothstep(0.0, radius, dist),
        }
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Push a particle away from a point.
///
/// Particles within `radius` of the point gain outward velocity. The force
/// follows `falloff` (full strength at the point, zero at the radius edge)
/// and is scaled by `strength` and `dt`.
///
/// A particle exactly at the point has no meaningful direction and is left
/// untouched.
pub fn repel_from(
    p: &mut Particle,
    point: Vec2,
    strength: f32,
    radius: f32,
    falloff: Falloff,
    dt: f32,
) {
    let offset = p.position - point;
    let dist = offset.length();
    if dist >= radius || dist <= f32::EPSILON {
        return;
    }

    let force = falloff.factor(dist, radius).max(0.0);
    p.velocity += offset / dist * force * strength * dt;
}

/// Reflect a particle off the viewport edges.
///
/// When the particle sits on or beyond a boundary, the corresponding
/// velocity component is reversed and scaled by `damping` (< 1 shrinks it),
/// and the position is clamped back inside `[0, bounds]`.
pub fn bounce_walls(p: &mut Particle, bounds: Vec2, damping: f32) {
    if p.position.x <= 0.0 || p.position.x >= bounds.x {
        p.velocity.x *= -damping;
        p.position.x = p.position.x.clamp(0.0, bounds.x);
    }
    if p.position.y <= 0.0 || p.position.y >= bounds.y {
        p.velocity.y *= -damping;
        p.position.y = p.position.y.clamp(0.0, bounds.y);
    }
}

/// Uniform velocity damping.
///
/// Multiplies velocity by `factor` once per frame; fractional `dt` applies
/// the matching fractional decay (`factor^dt`), so variable frame timing
/// converges to the same curve.
pub fn friction(p: &mut Particle, factor: f32, dt: f32) {
    p.velocity *= factor.powf(dt);
}
