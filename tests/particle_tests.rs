// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

fn still_params(count: usize) -> ParticleParams {
    ParticleParams {
        count,
        friction: 1.0,
        jitter: 0.0,
        ..ParticleParams::default()
    }
}

fn single(pos: Vec2, vel: Vec2) -> ParticleField {
    let mut field = ParticleField::new(still_params(1), Vec2::new(800.0, 600.0), 7);
    let p = &mut field.particles_mut()[0];
    p.position = pos;
    p.velocity = vel;
    field
}

#[test]
fn new_field_has_requested_count_inside_bounds() {
    for count in [0usize, 1, 100] {
        let params = ParticleParams {
            count,
            ..ParticleParams::default()
        };
        let field = ParticleField::new(params, Vec2::new(800.0, 600.0), 42);
        assert_eq!(field.len(), count);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
        }
    }
}

#[test]
fn spawned_attributes_stay_in_their_ranges() {
    let field = ParticleField::new(ParticleParams::default(), Vec2::new(1024.0, 768.0), 1);
    for p in field.particles() {
        assert!(p.radius >= 1.0 && p.radius < 3.0, "radius {}", p.radius);
        assert!(p.base_opacity >= 0.3 && p.base_opacity < 0.8);
        assert!(p.pulse_speed >= 0.01 && p.pulse_speed < 0.03);
        assert!(p.pulse_phase >= 0.0 && p.pulse_phase < std::f32::consts::TAU);
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
        assert!(PALETTE.contains(&p.color));
    }
}

#[test]
fn zero_sized_bounds_do_not_panic() {
    let mut field = ParticleField::new(ParticleParams::default(), Vec2::ZERO, 3);
    assert_eq!(field.len(), 100);
    field.step(None);
    field.step(Some(Vec2::ZERO));
}

#[test]
fn particles_stay_near_bounds_over_many_steps() {
    let bounds = Vec2::new(640.0, 480.0);
    let mut field = ParticleField::new(ParticleParams::default(), bounds, 99);
    let eps = 10.0;
    for i in 0..3000 {
        field.step(None);
        for p in field.particles() {
            assert!(
                p.position.x >= -eps && p.position.x <= bounds.x + eps,
                "x escaped at step {i}: {}",
                p.position.x
            );
            assert!(
                p.position.y >= -eps && p.position.y <= bounds.y + eps,
                "y escaped at step {i}: {}",
                p.position.y
            );
        }
    }
}

#[test]
fn velocity_flips_when_crossing_an_edge() {
    let mut field = single(Vec2::new(0.5, 300.0), Vec2::new(-1.0, 0.0));
    field.step(None);
    let p = &field.particles()[0];
    assert!((p.position.x + 0.5).abs() < 1e-5);
    assert_eq!(p.velocity.x, 1.0);

    let mut field = single(Vec2::new(400.0, 599.5), Vec2::new(0.0, 1.0));
    field.step(None);
    let p = &field.particles()[0];
    assert!(p.position.y > 600.0);
    assert_eq!(p.velocity.y, -1.0);
}

#[test]
fn velocity_is_kept_inside_bounds() {
    let mut field = single(Vec2::new(400.0, 300.0), Vec2::new(-1.0, 0.5));
    field.step(None);
    let p = &field.particles()[0];
    assert_eq!(p.velocity, Vec2::new(-1.0, 0.5));
    assert_eq!(p.position, Vec2::new(399.0, 300.5));
}

#[test]
fn particle_heading_back_in_is_not_flipped_again() {
    let mut field = single(Vec2::new(-3.0, 300.0), Vec2::new(1.0, 0.0));
    field.step(None);
    assert_eq!(field.particles()[0].velocity.x, 1.0);
}

#[test]
fn pointer_pushes_nearby_particle_away() {
    let mut field = single(Vec2::new(100.0, 100.0), Vec2::ZERO);
    field.step(Some(Vec2::new(150.0, 100.0)));
    let p = &field.particles()[0];
    // force = (100 - 50) / 100 = 0.5, scaled by repulsion 0.5
    assert!((p.velocity.x + 0.25).abs() < 1e-5, "vx {}", p.velocity.x);
    assert!(p.velocity.y.abs() < 1e-6);
}

#[test]
fn pointer_outside_radius_has_no_effect() {
    let mut field = single(Vec2::new(100.0, 100.0), Vec2::ZERO);
    field.step(Some(Vec2::new(250.0, 100.0)));
    assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn pointer_exactly_on_particle_stays_finite() {
    let mut field = single(Vec2::new(100.0, 100.0), Vec2::ZERO);
    field.step(Some(Vec2::new(100.0, 100.0)));
    let p = &field.particles()[0];
    assert!(p.velocity.is_finite());
    assert!(p.position.is_finite());
}

#[test]
fn pointer_held_at_an_edge_cannot_pin_a_particle_outside() {
    let bounds = Vec2::new(800.0, 600.0);
    let eps = 5.0;
    let cases = [
        (Vec2::new(5.0, 300.0), Vec2::new(30.0, 300.0)),
        (Vec2::new(795.0, 300.0), Vec2::new(770.0, 300.0)),
        (Vec2::new(400.0, 5.0), Vec2::new(400.0, 30.0)),
        (Vec2::new(400.0, 595.0), Vec2::new(400.0, 570.0)),
        (Vec2::new(5.0, 5.0), Vec2::new(20.0, 20.0)),
    ];
    for (start, pointer) in cases {
        let mut field = ParticleField::new(
            ParticleParams {
                count: 1,
                jitter: 0.0,
                ..ParticleParams::default()
            },
            bounds,
            4,
        );
        field.particles_mut()[0].position = start;
        field.particles_mut()[0].velocity = Vec2::ZERO;
        for i in 0..2000 {
            field.step(Some(pointer));
            let pos = field.particles()[0].position;
            assert!(
                pos.x >= -eps && pos.x <= bounds.x + eps && pos.y >= -eps && pos.y <= bounds.y + eps,
                "start {start} pointer {pointer}: escaped to {pos} at step {i}"
            );
        }
    }
}

#[test]
fn pointer_push_never_drives_an_outside_particle_further_out() {
    let mut field = single(Vec2::new(-2.0, 300.0), Vec2::ZERO);
    field.step(Some(Vec2::new(20.0, 300.0)));
    let p = &field.particles()[0];
    assert_eq!(p.velocity.x, 0.0);
    assert_eq!(p.position.x, -2.0);
}

#[test]
fn friction_slows_particles_down() {
    let params = ParticleParams {
        count: 1,
        jitter: 0.0,
        ..ParticleParams::default()
    };
    let mut field = ParticleField::new(params, Vec2::new(800.0, 600.0), 5);
    field.particles_mut()[0].position = Vec2::new(400.0, 300.0);
    field.particles_mut()[0].velocity = Vec2::new(1.0, 0.0);
    field.step(None);
    assert!((field.particles()[0].velocity.x - 0.99).abs() < 1e-6);
}

#[test]
fn reset_rebuilds_the_whole_field() {
    let mut field = ParticleField::new(ParticleParams::default(), Vec2::new(800.0, 600.0), 11);
    for _ in 0..10 {
        field.step(None);
    }
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

    field.reset(Vec2::new(200.0, 100.0));
    assert_eq!(field.len(), 100);
    assert_eq!(field.bounds(), Vec2::new(200.0, 100.0));
    for (p, old) in field.particles().iter().zip(&before) {
        assert!(p.position.x <= 200.0 && p.position.y <= 100.0);
        assert_ne!(p.position, *old);
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
    }
}

#[test]
fn connection_opacity_fades_to_zero_at_threshold() {
    assert_eq!(connection_opacity(150.0, 150.0), 0.0);
    assert_eq!(connection_opacity(200.0, 150.0), 0.0);
    assert_eq!(connection_opacity(0.0, 150.0), 1.0);
    let mut prev = 0.0;
    for d in (0..150).rev() {
        let o = connection_opacity(d as f32, 150.0);
        assert!(o > prev, "not increasing at d={d}");
        prev = o;
    }
}

#[test]
fn connections_link_only_close_pairs() {
    let mut field = ParticleField::new(still_params(3), Vec2::new(800.0, 600.0), 2);
    field.particles_mut()[0].position = Vec2::new(0.0, 0.0);
    field.particles_mut()[1].position = Vec2::new(100.0, 0.0);
    field.particles_mut()[2].position = Vec2::new(400.0, 0.0);

    let links: Vec<Connection> = field.connections().collect();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    let expected = (1.0 - 100.0 / 150.0) * 0.2;
    assert!((links[0].opacity - expected).abs() < 1e-6);
}

#[test]
fn connections_cover_each_unordered_pair_once() {
    let mut field = ParticleField::new(still_params(4), Vec2::new(800.0, 600.0), 2);
    for p in field.particles_mut() {
        p.position = Vec2::new(10.0, 10.0);
    }
    let links: Vec<Connection> = field.connections().collect();
    assert_eq!(links.len(), 6);
    assert!(links.iter().all(|c| c.a < c.b));
}

#[test]
fn pulse_opacity_is_clamped() {
    assert_eq!(pulse_opacity(0.95, 0.2, std::f32::consts::FRAC_PI_2), 1.0);
    assert_eq!(pulse_opacity(0.05, 0.2, -std::f32::consts::FRAC_PI_2), 0.0);
    assert!((pulse_opacity(0.5, 0.2, 0.0) - 0.5).abs() < 1e-6);

    let field = ParticleField::new(ParticleParams::default(), Vec2::new(800.0, 600.0), 8);
    for t in [0.0, 1.5, 60.0, 3600.0] {
        for p in field.particles() {
            let o = field.pulse_opacity(p, t);
            assert!((0.0..=1.0).contains(&o));
        }
    }
}

#[test]
fn colors_format_for_canvas() {
    assert_eq!(PALETTE[0].hex(), "#00ff46");
    assert_eq!(PALETTE[1].rgba(0.5), "rgba(139, 92, 246, 0.5)");
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(ParticleParams::default(), Vec2::new(800.0, 600.0), 1234);
    let b = ParticleField::new(ParticleParams::default(), Vec2::new(800.0, 600.0), 1234);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.color, pb.color);
    }
}
