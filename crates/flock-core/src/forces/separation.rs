use glam::Vec3;

use crate::config::FlockConfig;

/// Separation: steer away from crowding flockmates.
///
/// Every candidate closer than `separation_radius` contributes a unit
/// vector pointing away from it, divided by the distance so that closer
/// neighbors push harder. The accumulated push is averaged, rescaled to
/// `max_speed` as a desired velocity, and converted to a steering force
/// clamped to `max_force`.
///
/// Candidates at exactly zero distance contribute nothing; this is how
/// the focal boid is excluded when the candidate slice is the whole
/// flock, and it also covers a coincident flockmate. The averaged push
/// can cancel to a zero vector when neighbors surround the boid
/// symmetrically; the zero survives normalization and the result is
/// then a pure braking force.
pub fn separation_force(
    position: Vec3,
    velocity: Vec3,
    positions: &[Vec3],
    config: &FlockConfig,
) -> Vec3 {
    let mut steer = Vec3::ZERO;
    let mut count = 0u32;

    for &other in positions {
        let distance = position.distance(other);
        if distance > 0.0 && distance < config.separation_radius {
            steer += (position - other).normalize() / distance;
            count += 1;
        }
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    let desired = (steer / count as f32).normalize_or_zero() * config.max_speed;
    (desired - velocity).clamp_length_max(config.max_force)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_boid_feels_no_separation() {
        let config = FlockConfig::default();
        let positions = [Vec3::new(5.0, 0.0, 0.0)];
        let force = separation_force(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, &positions, &config);
        assert_eq!(force, Vec3::ZERO, "self at distance 0 must not contribute");
    }

    #[test]
    fn test_close_pair_pushes_apart() {
        let config = FlockConfig::default();
        let positions = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
        let force = separation_force(Vec3::ZERO, Vec3::ZERO, &positions, &config);

        assert!(force.x < 0.0, "boid at origin should be pushed in -x, got {:?}", force);
        assert!(
            force.y.abs() < 1e-6 && force.z.abs() < 1e-6,
            "push should stay on the x axis, got {:?}",
            force
        );
        assert!(
            force.length() <= config.max_force + 1e-6,
            "force exceeds max_force: {}",
            force.length()
        );
    }

    #[test]
    fn test_coincident_pair_is_finite() {
        let config = FlockConfig::default();
        let positions = [Vec3::new(2.0, 2.0, 2.0), Vec3::new(2.0, 2.0, 2.0)];
        let force =
            separation_force(Vec3::new(2.0, 2.0, 2.0), Vec3::ZERO, &positions, &config);
        assert!(force.is_finite(), "coincident boids must not produce NaN");
        assert_eq!(force, Vec3::ZERO, "zero-distance candidates contribute nothing");
    }

    #[test]
    fn test_symmetric_neighbors_brake() {
        // Two neighbors at +/-x cancel exactly; the zero push becomes a
        // braking force opposing the focal velocity.
        let config = FlockConfig::default();
        let positions = [
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(-3.0, 0.0, 0.0),
            Vec3::ZERO,
        ];
        let velocity = Vec3::new(1.0, 0.0, 0.0);
        let force = separation_force(Vec3::ZERO, velocity, &positions, &config);

        assert!(force.is_finite(), "cancelled push must not produce NaN");
        assert!(force.x < 0.0, "expected braking force opposing +x velocity, got {:?}", force);
        assert!(
            force.length() <= config.max_force + 1e-6,
            "braking force exceeds max_force: {}",
            force.length()
        );
    }

    #[test]
    fn test_out_of_radius_ignored() {
        let config = FlockConfig::default();
        let positions = [Vec3::ZERO, Vec3::new(config.separation_radius + 1.0, 0.0, 0.0)];
        let force = separation_force(Vec3::ZERO, Vec3::ZERO, &positions, &config);
        assert_eq!(force, Vec3::ZERO, "neighbor beyond the radius must be ignored");
    }
}
