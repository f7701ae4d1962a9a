//! GPU-side vertex formats and shader sources.
//!
//! The simulation's particles and links are converted to these `Pod` structs
//! each frame and streamed into vertex buffers. Layouts here must match the
//! `@location` declarations in the WGSL sources exactly.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::links::Link;
use crate::particle::Particle;
use crate::trail::TrailPoint;

pub const PARTICLE_SHADER: &str = include_str!("particles.wgsl");
pub const LINK_SHADER: &str = include_str!("links.wgsl");

/// Viewport uniform shared by both pipelines.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Viewport {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            _pad: [0.0; 2],
        }
    }
}

/// Per-instance data for the particle quad pipeline.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub center: [f32; 2],
    pub size: f32,
    pub rotation: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub shape: u32,
}

impl ParticleInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32,
        2 => Float32,
        3 => Float32x3,
        4 => Float32,
        5 => Uint32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn from_particle(p: &Particle) -> Self {
        Self {
            center: p.position.to_array(),
            size: p.size,
            rotation: p.rotation,
            color: p.tint.rgb().to_array(),
            opacity: p.opacity,
            shape: p.shape.mask_index(),
        }
    }

    /// A small unrotated circle, used for pointer-trail glow points.
    pub fn glow(position: Vec2, size: f32, opacity: f32, color: Vec3) -> Self {
        Self {
            center: position.to_array(),
            size,
            rotation: 0.0,
            color: color.to_array(),
            opacity,
            shape: 0,
        }
    }

    pub fn from_trail_point(point: &TrailPoint, size: f32, color: Vec3) -> Self {
        Self::glow(point.position, size, point.opacity, color)
    }
}

/// Per-vertex data for the link line pipeline.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LinkVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
    pub opacity: f32,
}

impl LinkVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x3,
        2 => Float32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Both endpoints of a link, tinted by the first endpoint's palette
    /// color and faded by the link strength.
    pub fn pair(link: &Link, particles: &[Particle]) -> [Self; 2] {
        let color = particles[link.a].tint.rgb().to_array();
        [
            Self {
                position: particles[link.a].position.to_array(),
                color,
                opacity: link.strength,
            },
            Self {
                position: particles[link.b].position.to_array(),
                color,
                opacity: link.strength,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{ParticleShape, Tint};

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_particle_shader_is_valid() {
        validate_wgsl(PARTICLE_SHADER).expect("particle WGSL should be valid");
    }

    #[test]
    fn test_link_shader_is_valid() {
        validate_wgsl(LINK_SHADER).expect("link WGSL should be valid");
    }

    #[test]
    fn test_instance_conversion_carries_attributes() {
        let p = Particle {
            position: glam::Vec2::new(10.0, 20.0),
            velocity: glam::Vec2::ZERO,
            size: 32.0,
            opacity: 0.25,
            tint: Tint::Aqua,
            shape: ParticleShape::Triangle,
            rotation: 45.0,
            rotation_speed: 0.0,
        };
        let instance = ParticleInstance::from_particle(&p);
        assert_eq!(instance.center, [10.0, 20.0]);
        assert_eq!(instance.size, 32.0);
        assert_eq!(instance.shape, ParticleShape::Triangle.mask_index());
    }

    #[test]
    fn test_link_pair_fades_with_strength() {
        let particles = vec![
            Particle {
                position: glam::Vec2::new(0.0, 0.0),
                velocity: glam::Vec2::ZERO,
                size: 30.0,
                opacity: 0.3,
                tint: Tint::Ember,
                shape: ParticleShape::Circle,
                rotation: 0.0,
                rotation_speed: 0.0,
            },
            Particle {
                position: glam::Vec2::new(100.0, 0.0),
                velocity: glam::Vec2::ZERO,
                size: 30.0,
                opacity: 0.3,
                tint: Tint::Aqua,
                shape: ParticleShape::Circle,
                rotation: 0.0,
                rotation_speed: 0.0,
            },
        ];
        let link = Link {
            a: 0,
            b: 1,
            strength: 0.5,
        };
        let [start, end] = LinkVertex::pair(&link, &particles);
        assert_eq!(start.position, [0.0, 0.0]);
        assert_eq!(end.position, [100.0, 0.0]);
        // Both endpoints inherit the first particle's tint
        assert_eq!(start.color, end.color);
        assert_eq!(start.opacity, 0.5);
    }
}
