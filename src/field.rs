// The particle field itself: a fixed population of drifting points, the
// bounds they bounce inside, and the last known pointer position. Pure
// state and math; the DOM side lives in the renderer and the backdrop.

use rand::Rng;
use vecmath::{self, Vector2};

use crate::constants::{
    LINK_ALPHA_BASE, LINK_ALPHA_FALLOFF, LINK_DISTANCE, PARTICLE_COUNT, POINTER_LINK_ALPHA_BASE,
    POINTER_LINK_ALPHA_FALLOFF, POINTER_LINK_DISTANCE,
};
use crate::particle::Particle;

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    pointer: Option<Vector2<f64>>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField::with_rng(&mut rand::thread_rng(), width, height)
    }

    /// Deterministic construction for tests; `new` feeds it `thread_rng`.
    pub fn with_rng<R: Rng>(rng: &mut R, width: f64, height: f64) -> ParticleField {
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            particles.push(Particle::random(rng, width, height));
        }

        ParticleField {
            particles,
            width,
            height,
            pointer: None,
        }
    }

    /// Advance every particle one frame.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update(self.width, self.height);
        }
    }

    /// New bounds take effect on the next step. Existing particles keep
    /// their positions and velocities; anything stranded outside a smaller
    /// field re-enters through ordinary edge reflection.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Record the pointer. Until the first call the field has no pointer
    /// and draws no pointer links.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    vecmath::vec2_len(vecmath::vec2_sub(a, b))
}

/// Stroke alpha for a particle-to-particle link, or `None` at and beyond the
/// visibility threshold. The ramp hits exactly zero at the threshold, so the
/// cutoff never culls a visible line.
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some(LINK_ALPHA_BASE - distance / LINK_ALPHA_FALLOFF)
    } else {
        None
    }
}

/// Stroke alpha for a particle-to-pointer link, or `None` at and beyond the
/// threshold.
pub fn pointer_link_alpha(distance: f64) -> Option<f64> {
    if distance < POINTER_LINK_DISTANCE {
        Some(POINTER_LINK_ALPHA_BASE - distance / POINTER_LINK_ALPHA_FALLOFF)
    } else {
        None
    }
}
