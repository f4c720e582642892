use crate::boid::BoidSet;
use crate::config::FlockConfig;
use crate::forces::alignment::alignment_force;
use crate::forces::cohesion::cohesion_force;
use crate::forces::seek::seek_force;
use crate::forces::separation::separation_force;
use crate::math::hash_signed;
use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct Flock {
    pub boids: BoidSet,
    pub config: FlockConfig,
    /// Optional shared steering target (pointer chase, scripted goal).
    pub seek_target: Option<Vec3>,
    /// Steering forces for the current step, computed from pre-step
    /// state before any boid is integrated.
    forces: Vec<Vec3>,
}

impl Flock {
    pub fn new(boid_count: usize) -> Self {
        Self::with_config(boid_count, FlockConfig::default())
    }

    pub fn with_config(boid_count: usize, config: FlockConfig) -> Self {
        let mut flock = Self {
            boids: BoidSet::new(boid_count),
            config,
            seek_target: None,
            forces: vec![Vec3::ZERO; boid_count],
        };
        flock.reinitialize(0);
        flock
    }

    /// Scatter the flock through the spawn cube with randomized
    /// velocities. Deterministic for a given `(seed, count)`.
    pub fn reinitialize(&mut self, seed: u32) {
        for i in 0..self.boids.count {
            self.boids.position[i] = Vec3::new(
                hash_signed(seed, i, 0),
                hash_signed(seed, i, 1),
                hash_signed(seed, i, 2),
            ) * self.config.spawn_extent;
            self.boids.velocity[i] = Vec3::new(
                hash_signed(seed, i, 3),
                hash_signed(seed, i, 4),
                hash_signed(seed, i, 5),
            ) * self.config.spawn_speed;
            self.boids.acceleration[i] = Vec3::ZERO;
            self.boids.heading[i] = Vec3::Z;
        }
    }

    /// Advance the simulation one frame.
    ///
    /// Two phases: steering forces for every boid are computed from the
    /// pre-step state of the whole flock, then integration applies them.
    /// Force computation for boid N therefore never observes boid M's
    /// post-step state within the same step.
    pub fn step(&mut self) {
        self.compute_forces();
        self.integrate();
    }

    /// Phase 1: weighted steering forces into the force buffer.
    fn compute_forces(&mut self) {
        let boids = &self.boids;
        let config = &self.config;
        let seek_target = self.seek_target;

        #[cfg(feature = "parallel")]
        self.forces
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, force)| {
                *force = steering_for(boids, config, seek_target, i);
            });

        #[cfg(not(feature = "parallel"))]
        for (i, force) in self.forces.iter_mut().enumerate() {
            *force = steering_for(boids, config, seek_target, i);
        }
    }

    /// Phase 2: integrate velocities and positions, wrap, re-orient.
    fn integrate(&mut self) {
        let bounds = self.config.bounds;
        let max_speed = self.config.max_speed;

        for i in 0..self.boids.count {
            self.boids.acceleration[i] += self.forces[i];

            let velocity = (self.boids.velocity[i] + self.boids.acceleration[i])
                .clamp_length_max(max_speed);
            let mut position = self.boids.position[i] + velocity;
            self.boids.acceleration[i] = Vec3::ZERO;

            position.x = wrap_axis(position.x, bounds);
            position.y = wrap_axis(position.y, bounds);
            position.z = wrap_axis(position.z, bounds);

            self.boids.velocity[i] = velocity;
            self.boids.position[i] = position;

            // A boid at rest keeps its stale heading
            if let Some(direction) = velocity.try_normalize() {
                self.boids.heading[i] = direction;
            }
        }
    }
}

/// Combined weighted steering force for one boid, read entirely from
/// pre-step flock state.
fn steering_for(
    boids: &BoidSet,
    config: &FlockConfig,
    seek_target: Option<Vec3>,
    index: usize,
) -> Vec3 {
    let position = boids.position[index];
    let velocity = boids.velocity[index];

    let sep = separation_force(position, velocity, &boids.position, config);
    let ali = alignment_force(position, velocity, &boids.position, &boids.velocity, config);
    let coh = cohesion_force(position, velocity, &boids.position, config);

    let mut force = sep * config.separation_weight
        + ali * config.alignment_weight
        + coh * config.cohesion_weight;

    if let Some(target) = seek_target {
        force += seek_force(position, velocity, target, config) * config.seek_weight;
    }

    force
}

/// Toroidal wrap: exiting one face teleports to the opposite face.
#[inline]
fn wrap_axis(value: f32, bounds: f32) -> f32 {
    if value > bounds {
        -bounds
    } else if value < -bounds {
        bounds
    } else {
        value
    }
}
