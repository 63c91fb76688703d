//! Recording sink for tests
//!
//! Implements `FrameSink` without a GPU: every call is recorded for
//! assertion. Mirrors how the engine is exercised headlessly elsewhere in
//! the test suite.

use glitch_core::Rgb;

use crate::traits::{FrameSink, GlyphDraw};

/// Record of one draw call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// Target was cleared
    Clear,
    /// A glyph was drawn
    Glyph(GlyphDraw),
    /// A rectangle was filled
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
        alpha: f32,
    },
}

/// A sink that records all draw calls for test inspection
#[derive(Debug, Default)]
pub struct MockSink {
    pub calls: Vec<RenderCall>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded calls
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Recorded glyph draws, in order
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphDraw> {
        self.calls.iter().filter_map(|call| match call {
            RenderCall::Glyph(draw) => Some(draw),
            _ => None,
        })
    }

    /// Number of glyphs drawn
    pub fn glyph_count(&self) -> usize {
        self.glyphs().count()
    }

    /// Number of rectangles filled
    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::FillRect { .. }))
            .count()
    }

    /// Whether the first recorded call cleared the target
    pub fn cleared_first(&self) -> bool {
        matches!(self.calls.first(), Some(RenderCall::Clear))
    }
}

impl FrameSink for MockSink {
    fn clear(&mut self) {
        self.calls.push(RenderCall::Clear);
    }

    fn glyph(&mut self, draw: &GlyphDraw) {
        self.calls.push(RenderCall::Glyph(draw.clone()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb, alpha: f32) {
        self.calls.push(RenderCall::FillRect {
            x,
            y,
            width,
            height,
            color,
            alpha,
        });
    }
}
