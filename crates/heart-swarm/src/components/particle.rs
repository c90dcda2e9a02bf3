//! A single swarm particle: delayed launch, cursor repulsion, two-regime friction.

use glam::Vec2;

use super::color::HslColor;
use super::element::Element;
use crate::core::math::{dist, NEAR_ZERO};
use crate::renderer::traits::DrawTarget;

/// Where a particle is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still counting down its launch delay; does not move.
    Held,
    /// Moving toward its target with light friction.
    Active,
    /// Within a pixel of its target and nearly still; heavy friction.
    Settled,
}

#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    delay: u32,
    radius: f32,
    color: HslColor,
}

impl Particle {
    /// Friction multipliers indexed by regime: `[active, settled]`.
    pub const FRICTION: [f32; 2] = [0.99, 0.90];
    /// Strength of the cursor's push on the target point.
    pub const REPULSION: f32 = 8000.0;
    /// Divides the unit pull toward the target each frame.
    pub const PULL_DIVISOR: f32 = 10.0;
    /// Distance and speed at or below which a particle counts as settled.
    pub const SETTLE_THRESHOLD: f32 = 1.0;

    /// A particle at rest on `position`, targeting where it stands, with no delay.
    pub fn new(position: Vec2, color: HslColor, radius: f32) -> Self {
        Particle {
            position,
            velocity: Vec2::ZERO,
            target: position,
            delay: 0,
            radius,
            color,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Frames to wait before the first movement.
    pub fn set_delay(&mut self, frames: u32) {
        self.delay = frames;
    }

    /// Overwrite the velocity. Leaves the delay alone, so a held particle
    /// launches with this velocity once its countdown runs out.
    pub fn set_velocity(&mut self, dx: f32, dy: f32) {
        self.velocity = Vec2::new(dx, dy);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> &HslColor {
        &self.color
    }

    /// Current phase judged against the stored (unwarped) target.
    pub fn phase(&self) -> Phase {
        if self.delay > 0 {
            return Phase::Held;
        }
        let offset = self.target - self.position;
        if dist(offset.x, offset.y) <= Self::SETTLE_THRESHOLD
            && dist(self.velocity.x, self.velocity.y) <= Self::SETTLE_THRESHOLD
        {
            Phase::Settled
        } else {
            Phase::Active
        }
    }

    /// Target pushed away from the cursor, by `REPULSION / distance`.
    /// A cursor sitting on the particle exerts no push.
    pub fn warped_target(&self, cursor: Vec2) -> Vec2 {
        let away = cursor - self.position;
        let m = dist(away.x, away.y);
        if m < NEAR_ZERO {
            return self.target;
        }
        self.target - away * (Self::REPULSION / (m * m))
    }

    /// Advance one frame and report the regime this frame ran under.
    pub fn update(&mut self, cursor: Vec2) -> Phase {
        if self.delay > 0 {
            self.delay -= 1;
            return Phase::Held;
        }

        let offset = self.warped_target(cursor) - self.position;
        let d = dist(offset.x, offset.y);

        let phase = if d <= Self::SETTLE_THRESHOLD
            && dist(self.velocity.x, self.velocity.y) <= Self::SETTLE_THRESHOLD
        {
            Phase::Settled
        } else {
            Phase::Active
        };

        // Constant-magnitude pull; nothing to pull toward when already there.
        if d >= NEAR_ZERO {
            self.velocity += offset / d / Self::PULL_DIVISOR;
        }

        let friction = match phase {
            Phase::Settled => Self::FRICTION[1],
            _ => Self::FRICTION[0],
        };
        self.velocity *= friction;
        self.position += self.velocity;

        phase
    }
}

impl Element for Particle {
    fn step(&mut self, cursor: Vec2) {
        self.update(cursor);
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        target.fill_circle(self.position, self.radius, &self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::DrawList;

    const FAR_AWAY: Vec2 = Vec2::new(1.0e5, 1.0e5);

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), HslColor::new(0.0, 1.0, 0.5), 3.0)
    }

    #[test]
    fn settles_on_first_step_when_already_home() {
        let mut p = particle_at(100.0, 100.0);
        assert_eq!(p.update(FAR_AWAY), Phase::Settled);
        assert!(p.velocity().length() < 0.1);
    }

    #[test]
    fn delay_holds_for_exactly_n_steps() {
        let mut p = particle_at(0.0, 0.0);
        p.set_target(200.0, 0.0);
        p.set_delay(5);

        for i in 0..5 {
            assert_eq!(p.update(FAR_AWAY), Phase::Held, "step {i}");
            assert_eq!(p.position(), Vec2::new(0.0, 0.0));
        }
        assert_eq!(p.delay(), 0);

        assert_eq!(p.update(FAR_AWAY), Phase::Active);
        assert!(p.position().x > 0.0, "should launch on step n+1");
    }

    #[test]
    fn approach_is_monotonic_then_converges() {
        let mut p = particle_at(0.0, 0.0);
        p.set_target(300.0, 0.0);

        let mut last = (p.target() - p.position()).length();
        for i in 0..50 {
            p.update(FAR_AWAY);
            let now = (p.target() - p.position()).length();
            assert!(now < last, "distance grew on step {i}: {last} -> {now}");
            last = now;
        }

        for _ in 0..5000 {
            p.update(FAR_AWAY);
        }
        assert!((p.target() - p.position()).length() < 1.0);
        assert_eq!(p.phase(), Phase::Settled);
    }

    #[test]
    fn set_position_teleports_without_touching_motion() {
        let mut p = particle_at(0.0, 0.0);
        p.set_velocity(2.0, 3.0);
        p.set_position(7.0, 8.0);
        assert_eq!(p.position(), Vec2::new(7.0, 8.0));
        assert_eq!(p.velocity(), Vec2::new(2.0, 3.0));
        assert_eq!(p.target(), Vec2::ZERO);
    }

    #[test]
    fn cursor_pushes_target_away() {
        let p = particle_at(100.0, 100.0);
        let warped = p.warped_target(Vec2::new(110.0, 100.0));
        // 8000 * 10 / 100 = 800 pixels in the direction away from the cursor
        assert!((warped.x - (100.0 - 800.0)).abs() < 1e-2);
        assert!((warped.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn repulsion_fades_with_distance() {
        let p = particle_at(0.0, 0.0);
        let near = (p.warped_target(Vec2::new(10.0, 0.0)) - p.target()).length();
        let far = (p.warped_target(Vec2::new(1000.0, 0.0)) - p.target()).length();
        assert!(near > far * 50.0);
    }

    #[test]
    fn cursor_on_particle_stays_finite() {
        let mut p = particle_at(50.0, 50.0);
        p.set_target(80.0, 20.0);
        for _ in 0..10 {
            p.update(p.position());
            assert!(p.position().is_finite());
            assert!(p.velocity().is_finite());
        }
    }

    #[test]
    fn zero_distance_to_target_stays_put() {
        // Cursor on the particle and target on the particle: both divisions vanish.
        let mut p = particle_at(5.0, 5.0);
        assert_eq!(p.update(Vec2::new(5.0, 5.0)), Phase::Settled);
        assert_eq!(p.position(), Vec2::new(5.0, 5.0));
        assert_eq!(p.velocity(), Vec2::ZERO);
    }

    #[test]
    fn explosion_velocity_waits_out_the_delay() {
        let mut p = particle_at(0.0, 0.0);
        p.set_target(0.0, 0.0);
        p.set_delay(3);
        p.set_velocity(12.0, -7.0);
        assert_eq!(p.phase(), Phase::Held);

        for _ in 0..3 {
            p.update(FAR_AWAY);
        }
        assert_eq!(p.position(), Vec2::ZERO);
        assert_eq!(p.velocity(), Vec2::new(12.0, -7.0));

        p.update(FAR_AWAY);
        assert!(p.position().x > 10.0 && p.position().y < -5.0);
    }

    #[test]
    fn perturbed_settled_particle_reactivates() {
        let mut p = particle_at(10.0, 10.0);
        p.update(FAR_AWAY);
        assert_eq!(p.phase(), Phase::Settled);
        p.set_velocity(15.0, 0.0);
        assert_eq!(p.phase(), Phase::Active);
        assert_eq!(p.update(FAR_AWAY), Phase::Active);
    }

    #[test]
    fn draw_is_idempotent() {
        let mut p = particle_at(42.0, 24.0);
        p.set_velocity(1.0, 1.0);
        let before = p.clone();

        let mut list = DrawList::new(100.0, 100.0);
        p.draw(&mut list);
        p.draw(&mut list);

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0], list.commands()[1]);
        assert_eq!(p.position(), before.position());
        assert_eq!(p.velocity(), before.velocity());
    }

    #[test]
    fn draw_emits_circle_at_position() {
        let p = particle_at(42.0, 24.0);
        let mut list = DrawList::new(100.0, 100.0);
        p.draw(&mut list);
        let circle = list.commands()[0];
        assert!(circle.is_circle());
        assert_eq!((circle.x, circle.y, circle.width), (42.0, 24.0, 3.0));
        assert_eq!([circle.r, circle.g, circle.b], p.color().rgb());
    }
}
