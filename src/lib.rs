//! # driftfield
//!
//! Ambient particle backdrops: a small field of drifting elements that
//! bounce off the viewport edges, shy away from the pointer, and link up
//! with faint lines when they drift close to each other.
//!
//! The simulation is plain CPU math over a handful of particles; the
//! included wgpu renderer and winit runner turn it into a windowed
//! decoration, but the field works headless too.
//!
//! ## Quick Start
//!
//! ```no_run
//! use driftfield::field::FieldConfig;
//!
//! fn main() {
//!     driftfield::window::run(FieldConfig::default()).unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the particle set. Each [`step`](field::ParticleField::step)
//! applies, in order: pointer repulsion, position integration, wall bounce,
//! friction, rotation. Positions never leave the viewport and friction keeps
//! speeds bounded, so the field can run forever.
//!
//! ```
//! use driftfield::field::{FieldConfig, ParticleField};
//! use glam::Vec2;
//!
//! let mut field = ParticleField::new(FieldConfig::default().with_seed(7), 800.0, 600.0);
//! field.step(Some(Vec2::new(400.0, 300.0)), 1.0);
//! let links = field.links();
//! ```
//!
//! ### The animator
//!
//! [`FieldAnimator`] adds the run lifecycle: `start()`, `advance()` once per
//! frame, `stop()` on teardown. Time comes from an injected [`FrameClock`],
//! so tests use a [`FixedClock`] and never sleep.
//!
//! ### Units
//!
//! Positions and distances are viewport pixels. Velocities are pixels per
//! frame and `dt` is measured in frames, where 1.0 is one 60 Hz frame; the
//! canonical constants in [`FieldConfig`] are expressed at that rate.

pub mod animator;
pub mod error;
pub mod field;
pub mod input;
pub mod links;
pub mod particle;
pub mod render;
pub mod rules;
pub mod shaders;
pub mod spawn;
pub mod time;
pub mod trail;
pub mod window;

pub use animator::FieldAnimator;
pub use error::{BackdropError, RenderError};
pub use field::{FieldConfig, ParticleField};
pub use glam::Vec2;
pub use links::{proximity_links, Link};
pub use particle::{Particle, ParticleShape, Tint};
pub use rules::Falloff;
pub use time::{FixedClock, FrameClock, SystemClock};
pub use trail::{PointerTrail, TrailPoint};

/// Convenient re-exports for common usage.
///
/// ```
/// use driftfield::prelude::*;
///
/// let field = ParticleField::new(FieldConfig::default().with_seed(1), 800.0, 600.0);
/// assert_eq!(field.particles().len(), 15);
/// ```
pub mod prelude {
    pub use crate::animator::FieldAnimator;
    pub use crate::field::{FieldConfig, ParticleField};
    pub use crate::input::PointerTracker;
    pub use crate::links::{proximity_links, Link};
    pub use crate::particle::{Particle, ParticleShape, Tint};
    pub use crate::rules::Falloff;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::{FixedClock, FrameClock, SystemClock};
    pub use crate::trail::{PointerTrail, TrailPoint};
    pub use crate::window::run;
    pub use glam::Vec2;
}
