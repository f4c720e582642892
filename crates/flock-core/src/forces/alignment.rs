use glam::Vec3;

use crate::config::FlockConfig;

/// Alignment: steer toward the average heading of nearby flockmates.
///
/// Velocities of candidates closer than `alignment_radius` are averaged
/// into a desired velocity at `max_speed`, and the difference to the
/// focal velocity is clamped to `max_force`. Zero-distance candidates
/// (the focal boid itself) are excluded. If every neighbor is at rest
/// the averaged velocity normalizes to zero and the result degrades to
/// a braking force.
pub fn alignment_force(
    position: Vec3,
    velocity: Vec3,
    positions: &[Vec3],
    velocities: &[Vec3],
    config: &FlockConfig,
) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;

    for (&other_position, &other_velocity) in positions.iter().zip(velocities.iter()) {
        let distance = position.distance(other_position);
        if distance > 0.0 && distance < config.alignment_radius {
            sum += other_velocity;
            count += 1;
        }
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    let desired = (sum / count as f32).normalize_or_zero() * config.max_speed;
    (desired - velocity).clamp_length_max(config.max_force)
}
