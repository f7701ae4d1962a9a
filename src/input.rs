//! Pointer input for driftfield backdrops.
//!
//! [`PointerTracker`] folds raw window events into the one piece of input
//! the simulation reads: the latest pointer position. Mouse and touch feed
//! the same sample; whichever arrived last wins.

use glam::Vec2;
use winit::event::{Touch, TouchPhase, WindowEvent};

/// Latest pointer sample, in window pixels.
///
/// `None` while no cursor is over the window and no touch is active.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    /// Create a tracker with no pointer sample yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent pointer position, if any.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Some(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.position = None;
            }

            WindowEvent::Touch(Touch {
                phase, location, ..
            }) => match phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    self.position = Some(Vec2::new(location.x as f32, location.y as f32));
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    self.position = None;
                }
            },

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_sample_wins() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.position(), None);

        // Simulate cursor motion via direct state manipulation (normally done
        // via handle_event, which needs a live window to produce events)
        tracker.position = Some(Vec2::new(120.0, 45.0));
        assert_eq!(tracker.position(), Some(Vec2::new(120.0, 45.0)));

        tracker.position = Some(Vec2::new(200.0, 90.0));
        assert_eq!(tracker.position(), Some(Vec2::new(200.0, 90.0)));
    }

    #[test]
    fn test_cleared_sample_reads_none() {
        let mut tracker = PointerTracker::new();
        tracker.position = Some(Vec2::new(10.0, 10.0));
        tracker.position = None;
        assert_eq!(tracker.position(), None);
    }
}
