pub mod color;
pub mod element;
pub mod particle;
