//! Draw-sink abstractions for frame building
//!
//! The frame builder targets a GPU-agnostic sink so the whole draw stage can
//! run headlessly under test. The vello-backed sink lives in `scene`; the
//! recording sink lives in `mock`.

use glitch_core::Rgb;

/// One glyph ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDraw {
    /// Character to draw
    pub ch: char,
    /// Displaced center position in surface pixels
    pub x: f64,
    pub y: f64,
    /// Display color
    pub color: Rgb,
    /// Opacity in [0, 1], after any theme oscillation
    pub alpha: f32,
    /// Whether the theme asks for a glow halo
    pub glow: bool,
}

/// Receiver for one frame's draw operations
///
/// Implementations must treat every call as self-contained: glyph modifier
/// state (glow, alpha) arrives per call and must not leak into the next one.
pub trait FrameSink {
    /// Clear the draw target for a new frame
    fn clear(&mut self);

    /// Draw one glyph
    fn glyph(&mut self, draw: &GlyphDraw);

    /// Fill an axis-aligned rectangle (overlays)
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb, alpha: f32);
}
