pub mod alignment;
pub mod cohesion;
pub mod seek;
pub mod separation;
