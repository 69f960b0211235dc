// Simple particle struct to keep track of individual position, velocity, and
// draw radius

use rand::Rng;
use vecmath::{self, Vector2};

use crate::constants::{MAX_DRIFT, MAX_RADIUS, MIN_RADIUS};

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    /// Spawn a particle uniformly inside `width x height`, with slow drift on
    /// both axes and a radius from the field's fixed range.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (2.0 * MAX_DRIFT) - MAX_DRIFT;
        let vel_y = rng.gen::<f64>() * (2.0 * MAX_DRIFT) - MAX_DRIFT;
        let radius = rng.gen::<f64>() * (MAX_RADIUS - MIN_RADIUS) + MIN_RADIUS;

        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    /// Advance one frame, then reflect off the canvas edges. Reflection only
    /// negates the offending velocity component; the position stays where it
    /// landed and walks back inside on the following step.
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] = -self.vel[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_spawn_respects_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0] >= -MAX_DRIFT && p.vel[0] < MAX_DRIFT);
            assert!(p.vel[1] >= -MAX_DRIFT && p.vel[1] < MAX_DRIFT);
            assert!(p.radius >= MIN_RADIUS && p.radius < MAX_RADIUS);
        }
    }

    #[test]
    fn update_advances_position_by_velocity() {
        let mut p = Particle::new(100.0, 100.0, 0.2, -0.1, 2.0);
        p.update(800.0, 600.0);
        assert!((p.pos[0] - 100.2).abs() < 1e-9);
        assert!((p.pos[1] - 99.9).abs() < 1e-9);
    }

    #[test]
    fn crossing_the_right_edge_flips_horizontal_velocity() {
        let mut p = Particle::new(799.9, 300.0, 0.2, 0.0, 1.5);
        p.update(800.0, 600.0);
        assert!(p.pos[0] > 800.0);
        assert!(p.vel[0] < 0.0);

        // The next step walks it back inside.
        p.update(800.0, 600.0);
        assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
    }

    #[test]
    fn crossing_the_left_edge_flips_horizontal_velocity() {
        let mut p = Particle::new(0.05, 300.0, -0.2, 0.0, 1.5);
        p.update(800.0, 600.0);
        assert!(p.pos[0] < 0.0);
        assert!(p.vel[0] > 0.0);
    }

    #[test]
    fn crossing_the_bottom_edge_flips_vertical_velocity() {
        let mut p = Particle::new(400.0, 599.95, 0.0, 0.2, 1.5);
        p.update(800.0, 600.0);
        assert!(p.pos[1] > 600.0);
        assert!(p.vel[1] < 0.0);
    }

    #[test]
    fn out_of_bounds_particle_turns_back_within_one_step() {
        // A shrink can strand a particle past the edge; the regular update
        // rule is what brings it home.
        let mut p = Particle::new(850.0, 10.0, 0.1, 0.0, 1.0);
        p.update(800.0, 600.0);
        assert!(p.vel[0] < 0.0);
    }
}
