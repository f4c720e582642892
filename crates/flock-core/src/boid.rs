use glam::Vec3;

/// SoA boid storage
pub struct BoidSet {
    pub count: usize,
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    /// Per-step steering accumulator; zero outside of a step
    pub acceleration: Vec<Vec3>,
    /// Unit facing direction for the render layer. Holds its last value
    /// while velocity is zero.
    pub heading: Vec<Vec3>,
}

impl BoidSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
            acceleration: vec![Vec3::ZERO; count],
            heading: vec![Vec3::Z; count],
        }
    }

    /// Fill `out` with the current presentation transforms.
    ///
    /// `out` must hold exactly `count` entries.
    pub fn write_transforms(&self, out: &mut [BoidTransform]) {
        assert_eq!(out.len(), self.count, "transform buffer length mismatch");
        for i in 0..self.count {
            let pos = self.position[i];
            let dir = self.heading[i];
            out[i] = BoidTransform {
                position: [pos.x, pos.y, pos.z],
                _pad0: 0.0,
                heading: [dir.x, dir.y, dir.z],
                _pad1: 0.0,
            };
        }
    }
}

/// Per-boid render transform: 32 bytes, matches WGSL Boid
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoidTransform {
    pub position: [f32; 3], // 12 bytes
    pub _pad0: f32,         //  4 bytes
    pub heading: [f32; 3],  // 12 bytes
    pub _pad1: f32,         //  4 bytes
}
