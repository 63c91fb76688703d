//! Per-tick mutation scheduling
//!
//! Each tick selects a bounded batch of candidate cells and mutates the ones
//! whose cooldown has elapsed. Candidates failing the cooldown are dropped
//! without retry, so a tick may mutate fewer cells than it drew.

use glitch_core::{Intensity, Pattern, Rng};
use glitch_theme::ResolvedTheme;

use crate::cell::CellStore;

/// What one tick actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Raw candidates drawn (bounded by the intensity budget)
    pub candidates: usize,
    /// Cells actually mutated after the cooldown gate
    pub mutated: usize,
}

/// Candidate budget for one tick: `max(1, floor(total * factor))`
pub fn update_count(total_cells: usize, intensity: Intensity) -> usize {
    ((total_cells as f64 * intensity.factor()).floor() as usize).max(1)
}

/// Run one mutation tick over the store
///
/// The cascade pattern draws a uniformly random column and row per candidate
/// independently. That is not a top-to-bottom sweep, but the selection bias
/// it produces is load-bearing for the visuals, so it stays.
pub fn run_tick(
    store: &mut CellStore,
    theme: &ResolvedTheme,
    pattern: Pattern,
    intensity: Intensity,
    smooth: bool,
    rng: &mut Rng,
    now_ms: f64,
) -> TickOutcome {
    let total = store.len();
    if total == 0 {
        return TickOutcome {
            candidates: 0,
            mutated: 0,
        };
    }

    let budget = update_count(total, intensity);
    let mut mutated = 0;

    for _ in 0..budget {
        let index = match pattern {
            Pattern::Cascade => {
                let layout = store.layout();
                let column = rng.pick_index(layout.columns as usize) as u32;
                let row = rng.pick_index(layout.rows as usize) as u32;
                layout.index(column, row)
            }
            _ => rng.pick_index(total),
        };

        let Some(cell) = store.get_mut(index) else {
            continue;
        };
        if cell.cooldown_elapsed(now_ms) {
            cell.mutate(theme, rng, now_ms, smooth);
            mutated += 1;
        }
    }

    TickOutcome {
        candidates: budget,
        mutated,
    }
}
