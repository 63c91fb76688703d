//! Glitch Render - the glyph-grid animation engine
//!
//! This crate provides:
//! - Grid layout derivation from surface pixel size
//! - The glyph cell store, mutation scheduler and color transitions
//! - Pattern displacement functions applied at draw time
//! - Frame building against a GPU-agnostic sink (with a recording mock)
//! - The two-stage composite pipeline (buffered blit or direct draw)

pub mod cell;
pub mod displacement;
pub mod frame;
pub mod glyph;
pub mod grid;
pub mod mock;
pub mod overlays;
pub mod pipeline;
pub mod scene;
pub mod scheduler;
pub mod traits;

pub use cell::{CellStore, GlyphCell, MUTATION_COOLDOWN_MS, TRANSITION_STEP};
pub use frame::FrameParams;
pub use grid::{CellMetrics, GridLayout};
pub use mock::MockSink;
pub use pipeline::{BufferedTarget, CompositeTarget, DirectTarget, RenderError};
pub use scene::SceneSink;
pub use scheduler::TickOutcome;
pub use traits::{FrameSink, GlyphDraw};
