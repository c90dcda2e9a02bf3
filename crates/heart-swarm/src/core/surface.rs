//! The simulation: owns the particles, the cursor and the frame loop body.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::api::config::SwarmConfig;
use crate::api::error::SwarmError;
use crate::components::color::HslColor;
use crate::components::element::Element;
use crate::components::particle::Particle;
use crate::core::curve::heart;
use crate::core::rng::Rng;
use crate::input::queue::InputEvent;
use crate::renderer::traits::DrawTarget;

/// A fixed population of particles launched from a ring toward the heart curve.
///
/// Dimensions are captured once at init and never re-derived.
pub struct Surface {
    config: SwarmConfig,
    width: f32,
    height: f32,
    cursor: Vec2,
    particles: Vec<Particle>,
    rng: Rng,
    frame: u64,
}

impl Surface {
    /// Build the population for a `width` x `height` viewport.
    ///
    /// Particle `i` of `n` starts on the ring of radius `min(w, h) / 2` at angle
    /// `i/n * 2π - π/2` (12 o'clock, clockwise in screen space), targets the
    /// scaled heart curve at the same parameter, launches after `2i` frames and
    /// gets hue `i * 360 / n`.
    pub fn initialize(width: f32, height: f32, seed: u64) -> Result<Self, SwarmError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SwarmError::InvalidViewport { width, height });
        }

        let config = SwarmConfig::default();
        let center = Vec2::new(width / 2.0, height / 2.0);
        let ring = center.x.min(center.y);
        let count = config.particle_count;

        let particles = (0..count)
            .map(|index| {
                let t = index as f32 / count as f32 * TAU;
                let color = HslColor::new(index as f32 * 360.0 / count as f32, 1.0, 0.5);

                let start = center + Vec2::from_angle(t - FRAC_PI_2) * ring;
                let mut particle = Particle::new(start, color, config.particle_radius);

                let goal = heart(t) * config.curve_scale + center;
                particle.set_target(goal.x, goal.y);
                particle.set_delay(config.delay_step * index as u32);
                particle
            })
            .collect();

        log::info!("surface: {} particles on {}x{}", count, width, height);

        Ok(Self {
            config,
            width,
            height,
            cursor: Vec2::ZERO,
            particles,
            rng: Rng::new(seed),
            frame: 0,
        })
    }

    /// One frame: fade the whole surface, then step and draw every particle in order.
    pub fn tick(&mut self, target: &mut dyn DrawTarget) {
        target.fill_rect(
            Vec2::ZERO,
            Vec2::new(self.width, self.height),
            [0.0, 0.0, 0.0, self.config.fade_alpha],
        );

        let cursor = self.cursor;
        for particle in &mut self.particles {
            particle.step(cursor);
            particle.draw(target);
        }
        self.frame += 1;
    }

    /// Fling every particle in a random direction. Delays, positions and
    /// targets are untouched.
    pub fn on_pointer_down(&mut self) {
        let speed = self.config.explosion_speed;
        for particle in &mut self.particles {
            let dx = self.rng.range(-speed, speed);
            let dy = self.rng.range(-speed, speed);
            particle.set_velocity(dx, dy);
        }
        log::debug!("surface: explosion at frame {}", self.frame);
    }

    /// Remember where the pointer is; particles read it on their next step.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    /// Route a queued input event to its handler.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown => self.on_pointer_down(),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Ticks completed since init.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }
}
