pub struct FlockConfig {
    pub max_speed: f32,
    pub max_force: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    /// Applied only while a seek target is set on the flock.
    pub seek_weight: f32,
    /// Half-extent of the toroidal world on each axis.
    pub bounds: f32,
    /// Half-extent of the cube boids spawn into.
    pub spawn_extent: f32,
    /// Per-axis bound on initial velocity components.
    pub spawn_speed: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            max_force: 0.03,
            separation_radius: 8.0,
            alignment_radius: 12.0,
            cohesion_radius: 15.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            seek_weight: 1.0,
            bounds: 100.0,
            spawn_extent: 50.0,
            spawn_speed: 1.0,
        }
    }
}
