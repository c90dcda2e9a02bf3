use std::f64::consts::TAU;

use glam::Vec2;
use heart_swarm::{DrawTarget, HslColor, SwarmError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// `DrawTarget` backed by a `<canvas>` 2D context.
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasTarget {
    /// Find the canvas with `canvas_id`, grab its 2D context and size it to the
    /// browser viewport. The size is fixed from here on.
    pub fn acquire(window: &Window, canvas_id: &str) -> Result<Self, SwarmError> {
        let document = window
            .document()
            .ok_or_else(|| SwarmError::unavailable("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SwarmError::unavailable(format!("no element #{canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SwarmError::unavailable(format!("#{canvas_id} is not a <canvas>")))?;
        let context = canvas
            .get_context("2d")
            .map_err(|_| SwarmError::unavailable("2d context request failed"))?
            .ok_or_else(|| SwarmError::unavailable("2d context not supported"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SwarmError::unavailable("unexpected 2d context type"))?;

        let width = viewport_dimension(window.inner_width())?;
        let height = viewport_dimension(window.inner_height())?;
        canvas.set_width(width);
        canvas.set_height(height);

        Ok(Self {
            canvas,
            context,
            width: width as f32,
            height: height as f32,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    #[allow(deprecated)]
    fn set_fill(&self, style: &str) {
        self.context.set_fill_style(&JsValue::from_str(style));
    }
}

fn viewport_dimension(value: Result<JsValue, JsValue>) -> Result<u32, SwarmError> {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .ok_or_else(|| SwarmError::unavailable("viewport size"))
}

/// CSS `rgba()` string for straight RGBA channels in 0..=1.
pub fn css_rgba(rgba: [f32; 4]) -> String {
    let [r, g, b, a] = rgba;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({},{},{},{})", channel(r), channel(g), channel(b), a)
}

impl DrawTarget for CanvasTarget {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, rgba: [f32; 4]) {
        self.set_fill(&css_rgba(rgba));
        self.context
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &HslColor) {
        self.context.begin_path();
        self.set_fill(color.css());
        let _ = self
            .context
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.context.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_color_string() {
        assert_eq!(css_rgba([0.0, 0.0, 0.0, 0.05]), "rgba(0,0,0,0.05)");
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(css_rgba([2.0, -1.0, 0.5, 1.0]), "rgba(255,0,128,1)");
    }
}
