//! The particle type and its cosmetic attributes.
//!
//! A [`Particle`] is one drifting element of a backdrop field. Its motion
//! state (`position`, `velocity`) is updated every step; the cosmetic
//! attributes are fixed at spawn time, except `rotation` which advances by
//! `rotation_speed` each step.

use glam::{Vec2, Vec3};

/// Color tag for a particle.
///
/// The field draws from a fixed two-color palette rather than arbitrary RGB,
/// so links can inherit a matching tint from their endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tint {
    /// Warm orange (#f97316).
    #[default]
    Ember,

    /// Cool cyan (#06b6d4).
    Aqua,
}

impl Tint {
    /// RGB components in linear 0.0-1.0 range.
    pub fn rgb(self) -> Vec3 {
        match self {
            Tint::Ember => Vec3::new(0.976, 0.451, 0.086),
            Tint::Aqua => Vec3::new(0.024, 0.714, 0.831),
        }
    }
}

/// Visual shape of a particle.
///
/// Shapes are resolved in the fragment shader via a mask index; the
/// simulation itself never looks at them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticleShape {
    /// Soft circle with radial falloff (default).
    #[default]
    Circle,

    /// Equilateral triangle pointing up.
    Triangle,

    /// Square with rounded corners.
    RoundedSquare,
}

impl ParticleShape {
    /// Mask index used by the render shader.
    pub fn mask_index(self) -> u32 {
        match self {
            ParticleShape::Circle => 0,
            ParticleShape::Triangle => 1,
            ParticleShape::RoundedSquare => 2,
        }
    }
}

/// One drifting element of the backdrop field.
///
/// Positions and sizes are in viewport pixels, velocities in pixels per
/// frame (one frame = 1/60 s), rotation in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position within the viewport, `[0, width] x [0, height]`.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Diameter in pixels.
    pub size: f32,
    /// Base opacity, 0.0-1.0.
    pub opacity: f32,
    /// Palette color tag.
    pub tint: Tint,
    /// Fragment-shader mask.
    pub shape: ParticleShape,
    /// Current rotation in degrees, kept in `[0, 360)`.
    pub rotation: f32,
    /// Rotation advance in degrees per frame.
    pub rotation_speed: f32,
}

impl Particle {
    /// Current speed in pixels per frame.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_rgb_channels() {
        let ember = Tint::Ember.rgb();
        let aqua = Tint::Aqua.rgb();

        // Ember is red-dominant, aqua is blue/green-dominant
        assert!(ember.x > ember.z);
        assert!(aqua.z > aqua.x);
    }

    #[test]
    fn test_shape_mask_indices_distinct() {
        let indices = [
            ParticleShape::Circle.mask_index(),
            ParticleShape::Triangle.mask_index(),
            ParticleShape::RoundedSquare.mask_index(),
        ];
        assert_ne!(indices[0], indices[1]);
        assert_ne!(indices[1], indices[2]);
    }
}
