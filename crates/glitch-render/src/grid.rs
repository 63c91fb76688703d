//! Grid layout derivation
//!
//! Column and row counts come from the surface pixel size and fixed glyph
//! cell metrics. Partial cells round up so the grid always covers the whole
//! surface, and both dimensions are at least 1.

/// Fixed pixel dimensions of one glyph cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl CellMetrics {
    /// Derive cell metrics from a font size in pixels
    pub fn from_font_size(font_size: f32) -> Self {
        let size = font_size as f64;
        Self {
            width: (size * 0.6).ceil(),
            height: (size * 1.2).ceil(),
        }
    }
}

/// Grid dimensions for a given surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub metrics: CellMetrics,
    pub surface_width: f64,
    pub surface_height: f64,
}

impl GridLayout {
    /// Compute the layout for a surface of `width` x `height` pixels
    pub fn derive(width: f64, height: f64, metrics: CellMetrics) -> Self {
        let columns = ((width / metrics.width).ceil() as u32).max(1);
        let rows = ((height / metrics.height).ceil() as u32).max(1);
        Self {
            columns,
            rows,
            metrics,
            surface_width: width,
            surface_height: height,
        }
    }

    /// Total number of cells
    pub fn total_cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Row-major store index for a grid coordinate
    pub fn index(&self, column: u32, row: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    /// Top-left pixel position of a cell
    pub fn cell_origin(&self, column: u32, row: u32) -> (f64, f64) {
        (
            column as f64 * self.metrics.width,
            row as f64 * self.metrics.height,
        )
    }

    /// Center pixel position of a cell
    pub fn cell_center(&self, column: u32, row: u32) -> (f64, f64) {
        let (x, y) = self.cell_origin(column, row);
        (x + self.metrics.width / 2.0, y + self.metrics.height / 2.0)
    }

    /// Surface center in pixels
    pub fn surface_center(&self) -> (f64, f64) {
        (self.surface_width / 2.0, self.surface_height / 2.0)
    }
}
