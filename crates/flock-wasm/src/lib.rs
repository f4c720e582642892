use flock_core::boid::BoidTransform;
use flock_core::flock::Flock;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FlockWorld {
    flock: Flock,
    transform_buffer: Vec<BoidTransform>,
}

#[wasm_bindgen]
impl FlockWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(boid_count: usize) -> FlockWorld {
        web_sys::console::log_1(
            &format!("WASM FlockWorld created: {} boids", boid_count).into()
        );

        let flock = Flock::new(boid_count);
        let transform_buffer = vec![BoidTransform {
            position: [0.0; 3],
            _pad0: 0.0,
            heading: [0.0, 0.0, 1.0],
            _pad1: 0.0,
        }; boid_count];

        let mut world = FlockWorld { flock, transform_buffer };
        world.write_transform_output();
        world
    }

    /// Advance one simulation frame and refresh the transform buffer.
    /// Returns the elapsed step time in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self) -> f32 {
        let start = js_sys::Date::now();
        self.flock.step();
        self.write_transform_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn get_transform_buffer_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<BoidTransform, f32>(&self.transform_buffer).as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_transform_buffer_byte_length(&self) -> usize {
        self.transform_buffer.len() * std::mem::size_of::<BoidTransform>()
    }

    #[wasm_bindgen]
    pub fn boid_count(&self) -> usize {
        self.flock.boids.count
    }

    #[wasm_bindgen]
    pub fn set_steering_weights(&mut self, separation: f32, alignment: f32, cohesion: f32) {
        self.flock.config.separation_weight = separation;
        self.flock.config.alignment_weight = alignment;
        self.flock.config.cohesion_weight = cohesion;
    }

    #[wasm_bindgen]
    pub fn set_radii(&mut self, separation: f32, alignment: f32, cohesion: f32) {
        self.flock.config.separation_radius = separation;
        self.flock.config.alignment_radius = alignment;
        self.flock.config.cohesion_radius = cohesion;
    }

    #[wasm_bindgen]
    pub fn set_limits(&mut self, max_speed: f32, max_force: f32) {
        self.flock.config.max_speed = max_speed;
        self.flock.config.max_force = max_force;
    }

    #[wasm_bindgen]
    pub fn set_bounds(&mut self, bounds: f32) {
        self.flock.config.bounds = bounds;
    }

    #[wasm_bindgen]
    pub fn set_seek_target(&mut self, active: bool, x: f32, y: f32, z: f32, weight: f32) {
        self.flock.config.seek_weight = weight;
        self.flock.seek_target = if active {
            Some(glam::Vec3::new(x, y, z))
        } else {
            None
        };
    }

    #[wasm_bindgen]
    pub fn reinitialize(&mut self, seed: u32) {
        self.flock.reinitialize(seed);
        self.write_transform_output();
    }
}

impl FlockWorld {
    fn write_transform_output(&mut self) {
        self.flock.boids.write_transforms(&mut self.transform_buffer);
    }
}
