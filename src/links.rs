//! Proximity links between nearby particles.
//!
//! A link joins two particles closer than a threshold distance, with a
//! strength that fades linearly as they drift apart. The renderer draws
//! links as faint connecting lines; the simulation never reads them back.

use crate::particle::Particle;

/// A connector between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Index of the first endpoint.
    pub a: usize,
    /// Index of the second endpoint.
    pub b: usize,
    /// Fade factor: 1.0 when the endpoints coincide, 0.0 at `max_distance`.
    pub strength: f32,
}

/// Find all unordered pairs within `max_distance` of each other.
///
/// Strength decays linearly with distance. The scan is O(N²) over the pair
/// set; fields stay small (N ≤ 20).
pub fn proximity_links(particles: &[Particle], max_distance: f32) -> Vec<Link> {
    if max_distance <= 0.0 {
        return Vec::new();
    }

    let mut links = Vec::new();
    for a in 0..particles.len() {
        for b in (a + 1)..particles.len() {
            let dist = particles[a].position.distance(particles[b].position);
            if dist < max_distance {
                links.push(Link {
                    a,
                    b,
                    strength: 1.0 - dist / max_distance,
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{ParticleShape, Tint};
    use glam::Vec2;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: 30.0,
            opacity: 0.3,
            tint: Tint::Aqua,
            shape: ParticleShape::Circle,
            rotation: 0.0,
            rotation_speed: 0.0,
        }
    }

    #[test]
    fn test_no_links_beyond_max_distance() {
        let particles = vec![particle_at(0.0, 0.0), particle_at(250.0, 0.0)];
        assert!(proximity_links(&particles, 200.0).is_empty());
    }

    #[test]
    fn test_strength_decreases_with_distance() {
        let particles = vec![
            particle_at(0.0, 0.0),
            particle_at(50.0, 0.0),
            particle_at(150.0, 0.0),
        ];
        let links = proximity_links(&particles, 200.0);

        let near = links.iter().find(|l| l.a == 0 && l.b == 1).unwrap();
        let far = links.iter().find(|l| l.a == 0 && l.b == 2).unwrap();
        assert!(near.strength > far.strength);
        assert!((near.strength - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_particles_full_strength() {
        let particles = vec![particle_at(10.0, 10.0), particle_at(10.0, 10.0)];
        let links = proximity_links(&particles, 200.0);
        assert_eq!(links.len(), 1);
        assert!((links[0].strength - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pairs_are_unordered_and_unique() {
        let particles = vec![
            particle_at(0.0, 0.0),
            particle_at(10.0, 0.0),
            particle_at(20.0, 0.0),
        ];
        let links = proximity_links(&particles, 200.0);
        assert_eq!(links.len(), 3);
        for link in &links {
            assert!(link.a < link.b);
        }
    }

    #[test]
    fn test_zero_max_distance_yields_nothing() {
        let particles = vec![particle_at(0.0, 0.0), particle_at(0.0, 0.0)];
        assert!(proximity_links(&particles, 0.0).is_empty());
    }
}
