use serde::Serialize;

use crate::api::error::SwarmError;

/// Fixed constants for the swarm.
///
/// There is no way to change these at runtime; the struct exists so the
/// numbers live in one place and the web bridge can report them to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmConfig {
    /// Number of particles (default: 500). Never changes after init.
    pub particle_count: usize,
    /// Radius of each drawn particle in pixels (default: 3).
    pub particle_radius: f32,
    /// Multiplier applied to the unit heart curve (default: 10).
    pub curve_scale: f32,
    /// Launch delay added per particle index, in frames (default: 2).
    pub delay_step: u32,
    /// Explosion velocities are drawn from `[-explosion_speed, explosion_speed]` (default: 15).
    pub explosion_speed: f32,
    /// Opacity of the black fade painted over the canvas each tick (default: 0.05).
    pub fade_alpha: f32,
    /// Simulation tick period in seconds (default: 0.010).
    pub tick_seconds: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particle_count: 500,
            particle_radius: 3.0,
            curve_scale: 10.0,
            delay_step: 2,
            explosion_speed: 15.0,
            fade_alpha: 0.05,
            tick_seconds: 0.010,
        }
    }
}

impl SwarmConfig {
    /// Serialize to a JSON object for the host page.
    pub fn to_json(&self) -> Result<String, SwarmError> {
        Ok(serde_json::to_string(self)?)
    }
}
