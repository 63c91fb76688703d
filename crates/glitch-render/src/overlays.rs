//! Post-processing overlays
//!
//! Scanlines are thin low-opacity bands at a fixed interval; noise is a
//! sparse scatter of low-alpha specks. Both draw after every glyph and both
//! degrade to a no-op rather than failing the frame.

use glitch_core::{Rgb, Rng};
use thiserror::Error;

use crate::traits::FrameSink;

/// Vertical interval between scanline bands
pub const SCANLINE_SPACING: f64 = 4.0;
/// Scanline band opacity
pub const SCANLINE_ALPHA: f32 = 0.12;
/// Noise speck opacity
pub const NOISE_ALPHA: f32 = 0.08;
/// One speck per this many square pixels
const NOISE_AREA_PER_SPECK: f64 = 300.0;
/// Upper bound on specks per frame, whatever the surface size
const NOISE_MAX_SPECKS: usize = 2048;

/// Overlay failure; the pipeline skips the overlay for the frame and moves on
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("overlay target has no drawable area")]
    EmptySurface,
}

/// Draw horizontal scanline bands over the whole surface
pub fn draw_scanlines(sink: &mut dyn FrameSink, width: f64, height: f64) {
    let mut y = 0.0;
    while y < height {
        sink.fill_rect(0.0, y, width, 1.0, Rgb::BLACK, SCANLINE_ALPHA);
        y += SCANLINE_SPACING;
    }
}

/// Scatter noise specks over the surface
///
/// Returns the number of specks drawn.
pub fn draw_noise(
    sink: &mut dyn FrameSink,
    width: f64,
    height: f64,
    rng: &mut Rng,
) -> Result<usize, OverlayError> {
    if width <= 0.0 || height <= 0.0 {
        return Err(OverlayError::EmptySurface);
    }

    let specks = ((width * height / NOISE_AREA_PER_SPECK) as usize)
        .clamp(1, NOISE_MAX_SPECKS);
    for _ in 0..specks {
        let x = rng.next_f64() * width;
        let y = rng.next_f64() * height;
        sink.fill_rect(x, y, 1.0, 1.0, Rgb::WHITE, NOISE_ALPHA);
    }
    Ok(specks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSink;

    #[test]
    fn test_scanlines_cover_surface_at_interval() {
        let mut sink = MockSink::new();
        draw_scanlines(&mut sink, 100.0, 40.0);
        assert_eq!(sink.rect_count(), 10); // 40 / 4
    }

    #[test]
    fn test_scanlines_on_empty_surface_draw_nothing() {
        let mut sink = MockSink::new();
        draw_scanlines(&mut sink, 100.0, 0.0);
        assert_eq!(sink.rect_count(), 0);
    }

    #[test]
    fn test_noise_density_scales_with_area() {
        let mut sink = MockSink::new();
        let mut rng = Rng::new(5);
        let small = draw_noise(&mut sink, 100.0, 60.0, &mut rng).unwrap();
        let large = draw_noise(&mut sink, 800.0, 600.0, &mut rng).unwrap();
        assert_eq!(small, 20);
        assert_eq!(large, 1600);
        assert_eq!(sink.rect_count(), small + large);
    }

    #[test]
    fn test_noise_is_capped() {
        let mut sink = MockSink::new();
        let mut rng = Rng::new(5);
        let specks = draw_noise(&mut sink, 10_000.0, 10_000.0, &mut rng).unwrap();
        assert_eq!(specks, NOISE_MAX_SPECKS);
    }

    #[test]
    fn test_noise_rejects_empty_surface() {
        let mut sink = MockSink::new();
        let mut rng = Rng::new(5);
        assert!(matches!(
            draw_noise(&mut sink, 0.0, 600.0, &mut rng),
            Err(OverlayError::EmptySurface)
        ));
        assert_eq!(sink.rect_count(), 0);
    }

    #[test]
    fn test_noise_specks_inside_surface() {
        let mut sink = MockSink::new();
        let mut rng = Rng::new(5);
        draw_noise(&mut sink, 320.0, 240.0, &mut rng).unwrap();
        for call in &sink.calls {
            if let crate::mock::RenderCall::FillRect { x, y, .. } = call {
                assert!((0.0..320.0).contains(x));
                assert!((0.0..240.0).contains(y));
            }
        }
    }
}
