pub mod math;
pub mod curve;
pub mod rng;
pub mod time;
pub mod surface;
