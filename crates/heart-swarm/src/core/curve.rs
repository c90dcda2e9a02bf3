//! The closed curve the swarm settles onto.

use glam::Vec2;

/// Point on the heart curve for parameter `t` (radians).
///
/// Unit scale: x spans ±16, y spans roughly -12..17. The y axis is flipped
/// for screen space so the lobes come out on top. Period 2π.
pub fn heart(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(x, y)
}
