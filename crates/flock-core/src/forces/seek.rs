use glam::Vec3;

use crate::config::FlockConfig;

/// Seek: steer toward a world-space target point.
///
/// The desired velocity points at the target with magnitude `max_speed`;
/// the returned steering force is the clamped difference to the current
/// velocity. A target coinciding with the current position has no
/// defined direction and yields the zero force.
pub fn seek_force(position: Vec3, velocity: Vec3, target: Vec3, config: &FlockConfig) -> Vec3 {
    let direction = match (target - position).try_normalize() {
        Some(direction) => direction,
        None => return Vec3::ZERO,
    };

    let desired = direction * config.max_speed;
    (desired - velocity).clamp_length_max(config.max_force)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_points_at_target() {
        let config = FlockConfig::default();
        let force = seek_force(Vec3::ZERO, Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), &config);
        assert!(force.x > 0.0, "seek should steer toward +x, got {:?}", force);
        assert!(
            (force.length() - config.max_force).abs() < 1e-6,
            "from rest the steer saturates at max_force, got {}",
            force.length()
        );
    }

    #[test]
    fn test_seek_own_position_is_zero() {
        let config = FlockConfig::default();
        let position = Vec3::new(3.0, -4.0, 5.0);
        let force = seek_force(position, Vec3::new(1.0, 0.0, 0.0), position, &config);
        assert_eq!(force, Vec3::ZERO, "degenerate target must yield zero force");
    }
}
