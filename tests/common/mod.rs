//! Common test utilities
//!
//! A headless harness around `GlitchGrid` that drives the frame loop with a
//! synthetic clock, so tests control time exactly.

use glitchgrid::{FramePlan, GlitchConfig, GlitchGrid, MockSink};

/// Frame step used by `step`, close to a 60 Hz callback cadence
pub const FRAME_STEP_MS: f64 = 16.0;

/// Engine plus a synthetic clock
pub struct EngineHarness {
    pub grid: GlitchGrid,
    pub now_ms: f64,
}

impl EngineHarness {
    /// Build a harness with a fixed seed for reproducible runs
    pub fn new(mut config: GlitchConfig, width: f64, height: f64) -> Self {
        config.seed.get_or_insert(1234);
        Self {
            grid: GlitchGrid::new(config, width, height),
            now_ms: 0.0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(GlitchConfig::default(), 800.0, 600.0)
    }

    /// Advance one frame at the default cadence
    pub fn step(&mut self) -> FramePlan {
        self.step_by(FRAME_STEP_MS)
    }

    /// Advance one frame after `dt_ms`
    pub fn step_by(&mut self, dt_ms: f64) -> FramePlan {
        self.now_ms += dt_ms;
        self.grid.frame(self.now_ms)
    }

    /// Run `frames` frames, returning how many were full ticks
    pub fn run_frames(&mut self, frames: usize) -> usize {
        (0..frames)
            .filter(|_| self.step() == FramePlan::Tick)
            .count()
    }

    /// Sum of all cell ages (total mutations applied)
    pub fn total_age(&self) -> u64 {
        self.grid.cells().iter().map(|c| c.age).sum()
    }

    /// Draw the current frame into a fresh recording sink
    pub fn draw(&mut self) -> MockSink {
        let mut sink = MockSink::new();
        self.grid.draw_into(&mut sink);
        sink
    }
}
