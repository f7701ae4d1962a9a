//! End-to-end tests for the particle field simulation.

use driftfield::prelude::*;

fn still_particle(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        size: 30.0,
        opacity: 0.3,
        tint: Tint::Ember,
        shape: ParticleShape::Circle,
        rotation: 0.0,
        rotation_speed: 0.0,
    }
}

#[test]
fn positions_stay_in_viewport_under_chaotic_input() {
    let mut field = ParticleField::new(FieldConfig::default().with_seed(3), 800.0, 600.0);

    for i in 0..2000u32 {
        // Pointer sweeps the viewport, including the edges and corners
        let pointer = match i % 4 {
            0 => Some(Vec2::new(0.0, 0.0)),
            1 => Some(Vec2::new((i * 7 % 800) as f32, (i * 13 % 600) as f32)),
            2 => Some(Vec2::new(800.0, 600.0)),
            _ => None,
        };
        // Mix of frame deltas, including stall-sized ones
        let dt = match i % 3 {
            0 => 0.3,
            1 => 1.0,
            _ => 3.0,
        };
        field.step(pointer, dt);

        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 800.0, "x escaped");
            assert!(p.position.y >= 0.0 && p.position.y <= 600.0, "y escaped");
            assert!(p.position.is_finite() && p.velocity.is_finite());
        }
    }
}

#[test]
fn speed_is_non_increasing_without_pointer() {
    let mut field = ParticleField::new(FieldConfig::default().with_seed(11), 800.0, 600.0);

    let mut previous: Vec<f32> = field.particles().iter().map(|p| p.speed()).collect();
    for _ in 0..300 {
        field.step(None, 1.0);
        for (p, prev) in field.particles().iter().zip(&previous) {
            // Friction and damped bounces only ever shrink speed
            assert!(p.speed() <= prev + 1e-5);
        }
        previous = field.particles().iter().map(|p| p.speed()).collect();
    }
}

#[test]
fn pointer_repels_a_particle_above_it() {
    // Viewport 800x600, one still particle mid-field, pointer 130px below
    let field_config = FieldConfig::default();
    let mut field = ParticleField::with_particles(
        field_config,
        800.0,
        600.0,
        vec![still_particle(400.0, 300.0)],
    );

    field.step(Some(Vec2::new(400.0, 430.0)), 1.0);

    let p = &field.particles()[0];
    assert!(p.velocity.y < 0.0, "particle should be pushed upward");
    assert_eq!(p.velocity.x, 0.0);
}

#[test]
fn pointer_on_the_radius_boundary_exerts_no_force() {
    // 150px is exactly the repulsion radius: linear falloff is zero there
    let mut field = ParticleField::with_particles(
        FieldConfig::default(),
        800.0,
        600.0,
        vec![still_particle(400.0, 300.0)],
    );

    field.step(Some(Vec2::new(400.0, 450.0)), 1.0);
    assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn wall_bounce_clamps_and_damps() {
    let mut field = ParticleField::with_particles(FieldConfig::default(), 800.0, 600.0, {
        let mut p = still_particle(799.0, 300.0);
        p.velocity = Vec2::new(5.0, 0.0);
        vec![p]
    });

    field.step(None, 1.0);

    let p = &field.particles()[0];
    assert!(p.position.x <= 800.0);
    assert!(p.velocity.x < 0.0, "x velocity should flip sign");
    assert!(p.velocity.x.abs() < 5.0, "bounce should damp the speed");
}

#[test]
fn colocated_pointer_never_poisons_the_state() {
    let mut field = ParticleField::with_particles(
        FieldConfig::default(),
        800.0,
        600.0,
        vec![still_particle(400.0, 300.0)],
    );

    for _ in 0..10 {
        field.step(Some(Vec2::new(400.0, 300.0)), 1.0);
        let p = &field.particles()[0];
        assert!(p.position.is_finite());
        assert!(p.velocity.is_finite());
    }
}

#[test]
fn links_respect_distance_and_fade() {
    let field = ParticleField::with_particles(
        FieldConfig::default(),
        800.0,
        600.0,
        vec![
            still_particle(100.0, 100.0),
            still_particle(150.0, 100.0),
            still_particle(280.0, 100.0),
            still_particle(700.0, 500.0),
        ],
    );

    let links = field.links();

    // The far-corner particle links to nobody
    assert!(links.iter().all(|l| l.a != 3 && l.b != 3));

    for link in &links {
        let dist = field.particles()[link.a]
            .position
            .distance(field.particles()[link.b].position);
        assert!(dist < 200.0);
        assert!((link.strength - (1.0 - dist / 200.0)).abs() < 1e-5);
        assert!(link.strength > 0.0 && link.strength <= 1.0);
    }
}

#[test]
fn seeded_initialization_is_reproducible() {
    let a = ParticleField::new(FieldConfig::default().with_seed(99), 1024.0, 768.0);
    let b = ParticleField::new(FieldConfig::default().with_seed(99), 1024.0, 768.0);
    assert_eq!(a.particles(), b.particles());

    let c = ParticleField::new(FieldConfig::default().with_seed(100), 1024.0, 768.0);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn animator_lifecycle_controls_stepping() {
    let field = ParticleField::new(FieldConfig::default().with_seed(5), 800.0, 600.0);
    let mut animator = FieldAnimator::new(field, FixedClock::new(1.0));

    let initial = animator.field().particles().to_vec();

    // Stopped: nothing moves
    assert!(!animator.advance());
    assert_eq!(animator.field().particles(), &initial[..]);

    // Running: the field advances every call
    animator.start();
    for _ in 0..5 {
        assert!(animator.advance());
    }
    assert_eq!(animator.frame(), 5);
    assert_ne!(animator.field().particles(), &initial[..]);

    // Stopped again: frozen where it was
    animator.stop();
    let frozen = animator.field().particles().to_vec();
    assert!(!animator.advance());
    assert_eq!(animator.field().particles(), &frozen[..]);
}
