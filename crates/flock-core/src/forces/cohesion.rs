use glam::Vec3;

use crate::config::FlockConfig;
use crate::forces::seek::seek_force;

/// Cohesion: steer toward the centroid of nearby flockmates.
///
/// Positions of candidates closer than `cohesion_radius` are averaged
/// into a target point, then seeking that point produces the force.
/// Zero-distance candidates (the focal boid itself) are excluded.
pub fn cohesion_force(
    position: Vec3,
    velocity: Vec3,
    positions: &[Vec3],
    config: &FlockConfig,
) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;

    for &other in positions {
        let distance = position.distance(other);
        if distance > 0.0 && distance < config.cohesion_radius {
            sum += other;
            count += 1;
        }
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    seek_force(position, velocity, sum / count as f32, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_neighbors_no_force() {
        let config = FlockConfig::default();
        let positions = [Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)];
        let force = cohesion_force(Vec3::ZERO, Vec3::ZERO, &positions, &config);
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_pulls_toward_centroid() {
        let config = FlockConfig::default();
        let positions = [
            Vec3::ZERO,
            Vec3::new(4.0, 2.0, 0.0),
            Vec3::new(4.0, -2.0, 0.0),
        ];
        let force = cohesion_force(Vec3::ZERO, Vec3::ZERO, &positions, &config);

        // Centroid of the two neighbors is (4, 0, 0)
        assert!(force.x > 0.0, "cohesion should pull toward +x, got {:?}", force);
        assert!(force.y.abs() < 1e-6, "y components cancel at the centroid, got {:?}", force);
        assert!(
            force.length() <= config.max_force + 1e-6,
            "cohesion force exceeds max_force: {}",
            force.length()
        );
    }

    #[test]
    fn test_centroid_on_focal_position_is_zero() {
        // Neighbors straddling the focal boid average to its own
        // position; seek degrades to zero rather than faulting.
        let config = FlockConfig::default();
        let positions = [
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(-5.0, 0.0, 0.0),
        ];
        let force = cohesion_force(Vec3::ZERO, Vec3::ZERO, &positions, &config);
        assert_eq!(force, Vec3::ZERO);
    }
}
