//! Per-frame draw pass
//!
//! Walks every cell, computes its displaced position and theme modifiers,
//! and emits draw calls into a sink. Draw order is cells first, then
//! overlays, so overlays always composite on top.

use glitch_core::{Pattern, Rng};
use glitch_theme::ResolvedTheme;

use crate::cell::CellStore;
use crate::displacement::displacement;
use crate::overlays;
use crate::traits::{FrameSink, GlyphDraw};

/// Everything the draw pass needs besides the cells
pub struct FrameParams<'a> {
    pub theme: &'a ResolvedTheme,
    pub pattern: Pattern,
    pub now_ms: f64,
    /// Last observed pointer position in surface pixels
    pub pointer: Option<(f64, f64)>,
    /// Whether pointer tracking is enabled; the ripple pattern is inert
    /// without it even when a position was observed
    pub pointer_tracking: bool,
    pub scanlines: bool,
    pub noise: bool,
    pub performance_mode: bool,
}

/// Draw one frame into `sink`
pub fn render_frame(
    store: &CellStore,
    params: &FrameParams<'_>,
    rng: &mut Rng,
    sink: &mut dyn FrameSink,
) {
    sink.clear();

    let layout = store.layout();
    let pointer = if params.pointer_tracking {
        params.pointer
    } else {
        None
    };

    for cell in store.iter() {
        let (cx, cy) = layout.cell_center(cell.grid_x, cell.grid_y);
        let (dx, dy) = displacement(params.pattern, cell, layout, pointer, params.now_ms);

        let alpha = if params.theme.alpha_oscillation {
            // Oscillates in [0.3, 1.0], desynchronized by the cell phase
            0.65 + 0.35 * (params.now_ms * 0.01 + cell.phase).sin() as f32
        } else {
            1.0
        };

        sink.glyph(&GlyphDraw {
            ch: cell.ch,
            x: cx + dx,
            y: cy + dy,
            color: cell.color,
            alpha,
            glow: params.theme.glow,
        });
    }

    if params.scanlines {
        overlays::draw_scanlines(sink, layout.surface_width, layout.surface_height);
    }

    // Noise is the expensive overlay; performance mode drops it entirely and
    // a failed attempt only costs this frame's overlay, never the frame.
    if params.noise && !params.performance_mode {
        if let Err(e) =
            overlays::draw_noise(sink, layout.surface_width, layout.surface_height, rng)
        {
            log::debug!("noise overlay skipped: {}", e);
        }
    }
}
