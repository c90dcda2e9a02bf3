//! The drawing surface the swarm renders onto.
//!
//! The core never talks to a platform API directly. The web bridge implements
//! this on `CanvasRenderingContext2d`; [`DrawList`](super::DrawList) records
//! the same calls in memory for headless hosts and tests.

use glam::Vec2;

use crate::components::color::HslColor;

/// A 2D drawing surface with fixed pixel dimensions.
pub trait DrawTarget {
    /// Width in pixels.
    fn width(&self) -> f32;

    /// Height in pixels.
    fn height(&self) -> f32;

    /// Called once before each batch of ticks. Targets that keep per-frame
    /// data reset it here; a canvas keeps its pixels for the fading trails.
    fn begin_frame(&mut self) {}

    /// Fill an axis-aligned rectangle with a straight (non-premultiplied) RGBA color.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, rgba: [f32; 4]);

    /// Fill an opaque circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &HslColor);
}
