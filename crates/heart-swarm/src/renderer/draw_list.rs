use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::traits::DrawTarget;
use crate::components::color::HslColor;

/// One recorded draw call. 9 floats = 36 bytes stride.
///
/// For circles `width` holds the radius and `height` is zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    /// [`DrawCommand::RECT`] or [`DrawCommand::CIRCLE`].
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 9;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const RECT: f32 = 0.0;
    pub const CIRCLE: f32 = 1.0;

    pub fn is_circle(&self) -> bool {
        self.kind == Self::CIRCLE
    }

    pub fn is_rect(&self) -> bool {
        self.kind == Self::RECT
    }
}

/// In-memory draw target that records the calls since the last `begin_frame`.
///
/// Hosts that render themselves can read the flat float buffer through
/// [`DrawList::as_floats`].
#[derive(Debug, Clone)]
pub struct DrawList {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded circles, in draw order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_circle())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The commands as one contiguous `f32` slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

}

impl DrawTarget for DrawList {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn begin_frame(&mut self) {
        self.clear();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        self.commands.push(DrawCommand {
            kind: DrawCommand::RECT,
            x: origin.x,
            y: origin.y,
            width: size.x,
            height: size.y,
            r,
            g,
            b,
            a,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &HslColor) {
        let [r, g, b] = color.rgb();
        self.commands.push(DrawCommand {
            kind: DrawCommand::CIRCLE,
            x: center.x,
            y: center.y,
            width: radius,
            height: 0.0,
            r,
            g,
            b,
            a: 1.0,
        });
    }
}
