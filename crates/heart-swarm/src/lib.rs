pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::SwarmConfig;
pub use api::error::SwarmError;
pub use components::color::HslColor;
pub use components::element::Element;
pub use components::particle::{Particle, Phase};
pub use crate::core::curve::heart;
pub use crate::core::math::{dist, NEAR_ZERO};
pub use crate::core::rng::Rng;
pub use crate::core::surface::Surface;
pub use crate::core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::draw_list::{DrawCommand, DrawList};
pub use renderer::traits::DrawTarget;
