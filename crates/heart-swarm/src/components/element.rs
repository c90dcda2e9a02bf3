use glam::Vec2;

use crate::renderer::traits::DrawTarget;

/// Anything the surface steps and draws once per tick.
pub trait Element {
    /// Advance one frame. `cursor` is the last known pointer position.
    fn step(&mut self, cursor: Vec2);

    /// Render onto `target`. Must not change the element.
    fn draw(&self, target: &mut dyn DrawTarget);
}
