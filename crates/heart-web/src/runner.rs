use heart_swarm::{
    DrawTarget, FixedTimestep, InputEvent, InputQueue, Surface, SwarmConfig, SwarmError,
};

/// Wires the swarm to a draw target, an input queue and a fixed timestep.
///
/// The web bridge keeps one of these in a `thread_local!`; the interval
/// callback and the pointer listeners are its only callers.
pub struct SwarmRunner<T: DrawTarget> {
    surface: Surface,
    target: T,
    input: InputQueue,
    timestep: FixedTimestep,
}

impl<T: DrawTarget> SwarmRunner<T> {
    /// Build the swarm sized to `target`.
    pub fn new(target: T, seed: u64) -> Result<Self, SwarmError> {
        let surface = Surface::initialize(target.width(), target.height(), seed)?;
        let timestep = FixedTimestep::new(surface.config().tick_seconds);
        Ok(Self {
            surface,
            target,
            input: InputQueue::new(),
            timestep,
        })
    }

    /// Queue an input event; it takes effect at the start of the next `tick`.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply pending input, then run as many simulation ticks as `dt` seconds
    /// of wall time cover. Returns the number of ticks run.
    ///
    /// The target only holds what this call drew.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.target.begin_frame();

        for event in self.input.drain() {
            self.surface.handle_input(&event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.surface.tick(&mut self.target);
        }
        steps
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn config(&self) -> &SwarmConfig {
        self.surface.config()
    }

    pub fn particle_count(&self) -> u32 {
        self.surface.particle_count() as u32
    }

    pub fn frame_count(&self) -> f64 {
        self.surface.frame_count() as f64
    }
}
