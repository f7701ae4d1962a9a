//! Pointer trail: a short ribbon of recent cursor positions.
//!
//! The trail keeps the last few pointer samples and fades them from faint
//! (oldest) to brightest (newest). It is render-only decoration; the
//! simulation never reads it.

use std::collections::VecDeque;

use glam::Vec2;

/// Number of samples a default trail retains.
pub const TRAIL_LENGTH: usize = 8;

/// Peak opacity of the newest trail point.
const TRAIL_PEAK_OPACITY: f32 = 0.6;

/// One renderable trail sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    /// Position in window pixels.
    pub position: Vec2,
    /// Opacity, rising toward the newest sample.
    pub opacity: f32,
}

/// Fixed-capacity ring of recent pointer positions.
#[derive(Clone, Debug)]
pub struct PointerTrail {
    samples: VecDeque<Vec2>,
    capacity: usize,
}

impl PointerTrail {
    /// Create a trail holding [`TRAIL_LENGTH`] samples.
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_LENGTH)
    }

    /// Create a trail holding up to `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Record a pointer sample, dropping the oldest once full.
    ///
    /// A sample equal to the newest one is ignored, so a resting pointer
    /// does not pile up duplicates.
    pub fn push(&mut self, position: Vec2) {
        if self.samples.back() == Some(&position) {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(position);
    }

    /// Renderable points, oldest first, opacity ramping up to the newest.
    pub fn points(&self) -> Vec<TrailPoint> {
        let len = self.samples.len();
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &position)| TrailPoint {
                position,
                opacity: (i + 1) as f32 / len as f32 * TRAIL_PEAK_OPACITY,
            })
            .collect()
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trail holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for PointerTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_bounded() {
        let mut trail = PointerTrail::new();
        for i in 0..20 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        // Oldest surviving sample is the 12th push
        assert_eq!(trail.points()[0].position, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_opacity_ramps_toward_newest() {
        let mut trail = PointerTrail::new();
        trail.push(Vec2::new(0.0, 0.0));
        trail.push(Vec2::new(1.0, 0.0));
        trail.push(Vec2::new(2.0, 0.0));

        let points = trail.points();
        assert!(points[0].opacity < points[1].opacity);
        assert!(points[1].opacity < points[2].opacity);
        assert!((points[2].opacity - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_resting_pointer_does_not_accumulate() {
        let mut trail = PointerTrail::new();
        for _ in 0..5 {
            trail.push(Vec2::new(100.0, 100.0));
        }
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut trail = PointerTrail::new();
        trail.push(Vec2::ZERO);
        trail.clear();
        assert!(trail.is_empty());
        assert!(trail.points().is_empty());
    }
}
