/// Hash float to [0,1] - port of GLSL hash11
pub fn hash11(p: f32) -> f32 {
    let mut p = (p * 0.1031).fract();
    p *= p + 33.33;
    p *= p + p;
    p.fract()
}

/// Hash a (seed, boid index, channel) triple to [0,1).
///
/// Channels keep the axes of one boid decorrelated; consecutive indices
/// land far apart in hash space.
pub fn hash_unit(seed: u32, index: usize, channel: u32) -> f32 {
    hash11(seed as f32 * 0.618_034 + index as f32 * 1.618_034 + channel as f32 * 43.758_547)
}

/// Hash a (seed, boid index, channel) triple to [-1,1).
pub fn hash_signed(seed: u32, index: usize, channel: u32) -> f32 {
    hash_unit(seed, index, channel) * 2.0 - 1.0
}
