//! Draw-time positional displacement
//!
//! Patterns displace where a cell is drawn, never where it lives: stored
//! grid coordinates are untouched. All functions are pure in `now_ms`.

use glitch_core::Pattern;

use crate::cell::GlyphCell;
use crate::grid::GridLayout;

/// Wave horizontal amplitude in pixels
const WAVE_AMPLITUDE: f64 = 5.0;
/// Spiral offset magnitude in pixels
const SPIRAL_MAGNITUDE: f64 = 2.0;
/// Ripple amplitude in pixels
const RIPPLE_AMPLITUDE: f64 = 3.0;

/// Pixel offset to apply when drawing `cell`
///
/// `pointer` must be `None` when pointer tracking is disabled; the ripple
/// pattern is inert without it.
pub fn displacement(
    pattern: Pattern,
    cell: &GlyphCell,
    layout: &GridLayout,
    pointer: Option<(f64, f64)>,
    now_ms: f64,
) -> (f64, f64) {
    match pattern {
        Pattern::Random | Pattern::Cascade => (0.0, 0.0),

        Pattern::Wave => {
            let dx = (cell.phase + now_ms * 0.001).sin() * WAVE_AMPLITUDE;
            (dx, 0.0)
        }

        Pattern::Spiral => {
            let (cx, cy) = layout.surface_center();
            let (x, y) = layout.cell_center(cell.grid_x, cell.grid_y);
            let angle = (y - cy).atan2(x - cx) + now_ms * 0.001;
            (angle.cos() * SPIRAL_MAGNITUDE, angle.sin() * SPIRAL_MAGNITUDE)
        }

        Pattern::Ripple => {
            let Some((px, py)) = pointer else {
                return (0.0, 0.0);
            };
            let (x, y) = layout.cell_center(cell.grid_x, cell.grid_y);
            let dx = x - px;
            let dy = y - py;
            let distance = dx.hypot(dy);
            if distance == 0.0 {
                return (0.0, 0.0);
            }
            let magnitude = (distance * 0.1 - now_ms * 0.005).sin() * RIPPLE_AMPLITUDE;
            (dx / distance * magnitude, dy / distance * magnitude)
        }
    }
}
