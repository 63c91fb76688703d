//! Vello-backed frame sink
//!
//! Paints draw calls into a `vello::Scene`. Glow is layered translucent
//! fills behind the glyph, widest first, so the stroke stays crisp on top.

use vello::Scene;
use vello::kurbo::{Affine, Circle, Point, Rect, Stroke};
use vello::peniko::{Brush, Color, Fill};

use glitch_core::Rgb;

use crate::glyph::glyph_path;
use crate::grid::CellMetrics;
use crate::traits::{FrameSink, GlyphDraw};

/// Glyph stroke width
const STROKE_WIDTH: f64 = 1.5;
/// Number of glow halo layers
const GLOW_LAYERS: u32 = 3;
/// Glow spread beyond the glyph, relative to cell width
const GLOW_SPREAD: f64 = 0.8;

fn brush(color: Rgb, alpha: f32) -> Brush {
    Brush::Solid(Color::new([
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    ]))
}

/// Sink that paints into a vello scene
pub struct SceneSink<'a> {
    scene: &'a mut Scene,
    metrics: CellMetrics,
}

impl<'a> SceneSink<'a> {
    pub fn new(scene: &'a mut Scene, metrics: CellMetrics) -> Self {
        Self { scene, metrics }
    }
}

impl FrameSink for SceneSink<'_> {
    fn clear(&mut self) {
        self.scene.reset();
    }

    fn glyph(&mut self, draw: &GlyphDraw) {
        let center = Point::new(draw.x, draw.y);

        if draw.glow {
            for i in (0..GLOW_LAYERS).rev() {
                let t = (i + 1) as f64 / GLOW_LAYERS as f64;
                let radius = self.metrics.width * (0.5 + GLOW_SPREAD * t);
                let alpha = draw.alpha * ((1.0 - t) as f32) * 0.35;
                if alpha <= 0.001 {
                    continue;
                }
                self.scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    &brush(draw.color, alpha),
                    None,
                    &Circle::new(center, radius),
                );
            }
        }

        let path = glyph_path(draw.ch, center, self.metrics.width, self.metrics.height);
        self.scene.stroke(
            &Stroke::new(STROKE_WIDTH),
            Affine::IDENTITY,
            &brush(draw.color, draw.alpha),
            None,
            &path,
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb, alpha: f32) {
        let rect = Rect::new(x, y, x + width, y + height);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &brush(color, alpha),
            None,
            &rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_sink_accepts_draw_calls() {
        let mut scene = Scene::new();
        let metrics = CellMetrics {
            width: 10.0,
            height: 20.0,
        };
        let mut sink = SceneSink::new(&mut scene, metrics);

        sink.clear();
        sink.glyph(&GlyphDraw {
            ch: 'X',
            x: 20.0,
            y: 30.0,
            color: Rgb::new(0, 255, 65),
            alpha: 0.8,
            glow: true,
        });
        sink.fill_rect(0.0, 0.0, 100.0, 1.0, Rgb::BLACK, 0.12);
    }
}
