//! Particles Component
//!
//! Decorative orange dots floating behind the landing card.

use egui::{Color32, Painter, Pos2, Rect, vec2};
use rand::Rng;

/// Number of particles in a field
pub const PARTICLE_COUNT: usize = 50;

/// Vertical distance (points) a particle covers between the ends of its float
pub const FLOAT_DISTANCE: f32 = 20.0;

/// One decorative particle. Positions are percentages of the area it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Diameter in points, in `[1, 4)`
    pub size: f32,
    /// `[0, 100)`
    pub x: f32,
    /// `[0, 100)`
    pub y: f32,
    /// Seconds per float leg, in `[20, 30)`
    pub duration: f32,
    /// Seconds before the float starts, in `[0, 5)`
    pub delay: f32,
}

impl Particle {
    /// Draws a particle with every field uniform over its range
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            size: rng.gen_range(1.0..4.0),
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(20.0..30.0),
            delay: rng.gen_range(0.0..5.0),
        }
    }

    /// Progress through the float at `time` seconds, in `[0, 1]`.
    ///
    /// Stays at 0 until `delay` has elapsed, then goes 0 -> 1 over `duration`
    /// seconds and back again, forever.
    pub fn drift(&self, time: f64) -> f32 {
        let elapsed = time - f64::from(self.delay);
        if elapsed <= 0.0 {
            return 0.0;
        }
        let phase = (elapsed / f64::from(self.duration)) % 2.0;
        let progress = if phase <= 1.0 { phase } else { 2.0 - phase };
        progress.clamp(0.0, 1.0) as f32
    }

    /// Screen position of the particle center inside `area` at `time`
    pub fn position(&self, area: Rect, time: f64) -> Pos2 {
        let base = area.min + vec2(area.width() * self.x / 100.0, area.height() * self.y / 100.0);
        base - vec2(0.0, self.drift(time) * FLOAT_DISTANCE)
    }
}

/// Generates a full batch of particles with ids `0..PARTICLE_COUNT`
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|id| Particle::random(id, rng)).collect()
}

/// A batch of particles that is generated once and then only painted
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    initialized: bool,
}

impl ParticleField {
    /// Empty field; call [`ParticleField::initialize`] before painting
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the particles. Only the first call has an effect.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.initialized {
            return;
        }
        self.particles = generate_particles(rng);
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Paints `particles` as filled circles inside `area`
pub fn paint_particles(painter: &Painter, area: Rect, particles: &[Particle], time: f64, color: Color32) {
    for particle in particles {
        painter.circle_filled(particle.position(area, time), particle.size / 2.0, color);
    }
}
