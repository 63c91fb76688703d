//! Glyph cell store and color transitions
//!
//! One mutable record per grid position. The store is created fresh on every
//! grid (re)build; no cell state survives a resize. Mutation and transition
//! advancement both run serially from the same tick, so plain `&mut` access
//! is all the synchronization this needs.

use glitch_core::{Rgb, Rng};
use glitch_theme::ResolvedTheme;
use std::f64::consts::TAU;

use crate::grid::GridLayout;

/// Minimum interval between two mutations of the same cell
pub const MUTATION_COOLDOWN_MS: f64 = 16.0;

/// Per-frame progress step for smooth color transitions
pub const TRANSITION_STEP: f32 = 0.05;

/// One grid position
#[derive(Debug, Clone)]
pub struct GlyphCell {
    /// Displayed character, drawn from the active character set
    pub ch: char,
    /// Current display color
    pub color: Rgb,
    /// Color captured when the current transition began
    pub base_color: Rgb,
    /// Transition goal color
    pub target_color: Rgb,
    /// 1.0 = fully transitioned; reset to 0.0 when a mutation starts a blend
    pub color_progress: f32,
    /// Fixed logical grid coordinates
    pub grid_x: u32,
    pub grid_y: u32,
    /// Mutations applied since creation
    pub age: u64,
    /// Random phase in [0, 2π), reseeded on every mutation
    pub phase: f64,
    /// Stamp of the last mutation, for the cooldown gate
    pub last_update_ms: f64,
}

impl GlyphCell {
    fn seeded(grid_x: u32, grid_y: u32, theme: &ResolvedTheme, rng: &mut Rng) -> Self {
        let color = *rng.pick(&theme.palette);
        Self {
            ch: *rng.pick(&theme.charset),
            color,
            base_color: color,
            target_color: color,
            color_progress: 1.0,
            grid_x,
            grid_y,
            age: 0,
            phase: rng.next_f64() * TAU,
            last_update_ms: f64::NEG_INFINITY,
        }
    }

    /// Whether the per-cell cooldown has elapsed
    pub fn cooldown_elapsed(&self, now_ms: f64) -> bool {
        now_ms - self.last_update_ms >= MUTATION_COOLDOWN_MS
    }

    /// Apply a glitch mutation
    ///
    /// With smooth transitions the displayed color is left in place and a
    /// blend toward the new target begins; without them the cell snaps to
    /// the target immediately.
    pub fn mutate(&mut self, theme: &ResolvedTheme, rng: &mut Rng, now_ms: f64, smooth: bool) {
        self.ch = *rng.pick(&theme.charset);
        self.target_color = *rng.pick(&theme.palette);
        self.age += 1;
        self.phase = rng.next_f64() * TAU;
        self.last_update_ms = now_ms;

        if smooth {
            self.base_color = self.color;
            self.color_progress = 0.0;
        } else {
            self.color = self.target_color;
            self.base_color = self.target_color;
            self.color_progress = 1.0;
        }
    }

    /// Advance a pending color transition by one step
    ///
    /// Returns true when the displayed color changed.
    pub fn advance_transition(&mut self) -> bool {
        if self.color_progress >= 1.0 {
            return false;
        }

        // Snap the final half-step so accumulated float error cannot strand
        // progress just below 1
        let advanced = self.color_progress + TRANSITION_STEP;
        self.color_progress = if advanced >= 1.0 - TRANSITION_STEP / 2.0 {
            1.0
        } else {
            advanced
        };
        let next = self.base_color.lerp(self.target_color, self.color_progress);
        let changed = next != self.color;
        self.color = next;
        changed
    }
}

/// All cells of the current grid, row-major
pub struct CellStore {
    layout: GridLayout,
    cells: Vec<GlyphCell>,
}

impl CellStore {
    /// Populate a fresh store for `layout`
    pub fn populate(layout: GridLayout, theme: &ResolvedTheme, rng: &mut Rng) -> Self {
        let mut cells = Vec::with_capacity(layout.total_cells());
        for row in 0..layout.rows {
            for column in 0..layout.columns {
                cells.push(GlyphCell::seeded(column, row, theme, rng));
            }
        }
        Self { layout, cells }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GlyphCell> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GlyphCell> {
        self.cells.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphCell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GlyphCell> {
        self.cells.iter_mut()
    }

    /// Advance all pending color transitions by one step
    ///
    /// Returns true when at least one cell's displayed color changed, which
    /// means the frame needs a redraw.
    pub fn advance_transitions(&mut self) -> bool {
        let mut any = false;
        for cell in &mut self.cells {
            any |= cell.advance_transition();
        }
        any
    }
}
