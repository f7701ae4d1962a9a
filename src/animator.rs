//! The animation controller.
//!
//! [`FieldAnimator`] owns a [`ParticleField`] and a [`FrameClock`], and
//! exposes an explicit start/stop lifecycle. The host render loop calls
//! [`FieldAnimator::advance`] once per frame; while stopped, `advance` is a
//! no-op, so tearing a backdrop down is `stop()` plus dropping the animator.
//!
//! The pointer sample is plain last-sample-wins state: input handling writes
//! it, the step reads it, all on one thread.

use glam::Vec2;

use crate::field::ParticleField;
use crate::time::FrameClock;

/// Drives a particle field from an injected clock.
///
/// ```
/// use driftfield::animator::FieldAnimator;
/// use driftfield::field::{FieldConfig, ParticleField};
/// use driftfield::time::FixedClock;
///
/// let field = ParticleField::new(FieldConfig::default().with_seed(1), 800.0, 600.0);
/// let mut animator = FieldAnimator::new(field, FixedClock::new(1.0));
///
/// animator.start();
/// assert!(animator.advance());
/// animator.stop();
/// assert!(!animator.advance());
/// ```
#[derive(Debug)]
pub struct FieldAnimator<C: FrameClock> {
    field: ParticleField,
    clock: C,
    pointer: Option<Vec2>,
    running: bool,
    frame: u64,
}

impl<C: FrameClock> FieldAnimator<C> {
    /// Create a stopped animator around a field.
    pub fn new(field: ParticleField, clock: C) -> Self {
        Self {
            field,
            clock,
            pointer: None,
            running: false,
            frame: 0,
        }
    }

    /// Begin stepping on subsequent [`advance`](Self::advance) calls.
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("animator started");
            self.running = true;
        }
    }

    /// Stop stepping. The field keeps its last state.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("animator stopped after {} frames", self.frame);
            self.running = false;
        }
    }

    /// Whether the animator is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record the latest pointer sample (`None` = pointer left the viewport).
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// The pointer sample the next step will see.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Step the field once if running. Returns whether a step happened.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let dt = self.clock.tick();
        if dt <= 0.0 {
            return false;
        }
        self.field.step(self.pointer, dt);
        self.frame += 1;
        true
    }

    /// Rebuild the field for a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    /// The animated field.
    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Steps taken since construction.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
