// Background particle field: a fixed set of drifting dots that shy away from
// the pointer and link up with faint lines when close to each other.
//
// Everything here is platform-agnostic; the canvas adapter in `render.rs`
// only reads the field after each [`ParticleField::step`].

use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Simple 8-bit RGB color used for particles and their links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form, used for the glow shadow color.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// CSS `rgba(...)` with the given alpha.
    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

// Matrix green, violet, blue, cyan
pub const PALETTE: [Rgb; 4] = [
    Rgb(0x00, 0xff, 0x46),
    Rgb(0x8b, 0x5c, 0xf6),
    Rgb(0x3b, 0x82, 0xf6),
    Rgb(0x00, 0xd4, 0xff),
];

/// Tuning knobs for the field. `Default` reproduces the site's look.
#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub connection_distance: f32,
    pub mouse_radius: f32,
    pub repulsion: f32,
    pub friction: f32,
    pub jitter: f32,
    pub initial_speed: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub pulse_amplitude: f32,
    // multiplies pulse_speed before it reaches the sinusoid
    pub pulse_rate: f32,
    pub link_max_opacity: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: 100,
            connection_distance: 150.0,
            mouse_radius: 100.0,
            repulsion: 0.5,
            friction: 0.99,
            jitter: 0.05,
            initial_speed: 0.25,
            radius_min: 1.0,
            radius_span: 2.0,
            pulse_amplitude: 0.2,
            pulse_rate: 10.0,
            link_max_opacity: 0.2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub base_opacity: f32,
    pub pulse_speed: f32,
    pub pulse_phase: f32,
}

/// A line between two particles, indices into [`ParticleField::particles`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

pub struct ParticleField {
    pub params: ParticleParams,
    bounds: Vec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams, bounds: Vec2, seed: u64) -> Self {
        let mut field = Self {
            params,
            bounds,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Drop every particle and scatter a fresh set over the new bounds.
    /// Nothing carries over from the previous layout.
    pub fn reset(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        self.populate();
    }

    fn populate(&mut self) {
        let count = self.params.count;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(self.spawn());
        }
        self.particles = particles;
    }

    fn spawn(&mut self) -> Particle {
        let p = &self.params;
        let r = &mut self.rng;
        let color = *PALETTE.choose(r).unwrap_or(&PALETTE[0]);
        Particle {
            position: Vec2::new(r.gen::<f32>() * self.bounds.x, r.gen::<f32>() * self.bounds.y),
            velocity: Vec2::new(
                (r.gen::<f32>() * 2.0 - 1.0) * p.initial_speed,
                (r.gen::<f32>() * 2.0 - 1.0) * p.initial_speed,
            ),
            radius: p.radius_min + r.gen::<f32>() * p.radius_span,
            color,
            base_opacity: 0.3 + r.gen::<f32>() * 0.5,
            pulse_speed: 0.01 + r.gen::<f32>() * 0.02,
            pulse_phase: r.gen::<f32>() * TAU,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let ParticleParams {
            mouse_radius,
            repulsion,
            friction,
            jitter,
            ..
        } = self.params;
        let bounds = self.bounds;
        for p in self.particles.iter_mut() {
            if let Some(m) = pointer {
                let delta = m - p.position;
                let dist = delta.length();
                // d == 0 has no direction to push along
                if dist > 0.0 && dist < mouse_radius {
                    let force = (mouse_radius - dist) / mouse_radius;
                    let push = -delta / dist * force * repulsion;
                    p.velocity.x += inward_only(p.position.x, push.x, bounds.x);
                    p.velocity.y += inward_only(p.position.y, push.y, bounds.y);
                }
            }

            p.velocity *= friction;
            p.velocity.x += (self.rng.gen::<f32>() * 2.0 - 1.0) * jitter;
            p.velocity.y += (self.rng.gen::<f32>() * 2.0 - 1.0) * jitter;

            p.position += p.velocity;

            reflect_axis(p.position.x, &mut p.velocity.x, bounds.x);
            reflect_axis(p.position.y, &mut p.velocity.y, bounds.y);
        }
    }

    /// Render opacity of particle `p` at `elapsed_sec`.
    #[inline]
    pub fn pulse_opacity(&self, p: &Particle, elapsed_sec: f32) -> f32 {
        pulse_opacity(
            p.base_opacity,
            self.params.pulse_amplitude,
            elapsed_sec * p.pulse_speed * self.params.pulse_rate + p.pulse_phase,
        )
    }

    /// Every unordered pair closer than `connection_distance`.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let max_d = self.params.connection_distance;
        let max_alpha = self.params.link_max_opacity;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let d = ps[a].position.distance(ps[b].position);
                (d < max_d).then(|| Connection {
                    a,
                    b,
                    opacity: connection_opacity(d, max_d) * max_alpha,
                })
            })
        })
    }
}

// Flip only while heading further out so a particle that is already on its way
// back is not turned around again.
#[inline]
fn reflect_axis(pos: f32, vel: &mut f32, extent: f32) {
    if (pos < 0.0 && *vel < 0.0) || (pos > extent && *vel > 0.0) {
        *vel = -*vel;
    }
}

// A particle already past an edge keeps only the part of the pointer push
// that brings it back; otherwise it parks where the force fades out.
#[inline]
fn inward_only(pos: f32, push: f32, extent: f32) -> f32 {
    if (pos < 0.0 && push < 0.0) || (pos > extent && push > 0.0) {
        0.0
    } else {
        push
    }
}

/// `base + amplitude * sin(angle)`, clamped to a valid alpha.
#[inline]
pub fn pulse_opacity(base: f32, amplitude: f32, angle: f32) -> f32 {
    (base + amplitude * angle.sin()).clamp(0.0, 1.0)
}

/// Linear falloff: 1 at distance 0, 0 at (and beyond) `max_distance`.
#[inline]
pub fn connection_opacity(distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}
