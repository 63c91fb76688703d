//! Engine functional tests
//!
//! Drive the component headlessly through its public surface: synthetic
//! frame timestamps in, recorded draw calls out. No GPU required.

mod common;

use common::EngineHarness;
use glitchgrid::{FramePlan, GlitchConfig, Intensity, Pattern, Phase, Theme};

// === Grid lifecycle ===

#[test]
fn test_mount_covers_surface() {
    let harness = EngineHarness::with_defaults();
    // 800x600 at font 16 (10x20 cells)
    assert_eq!(harness.grid.layout().columns, 80);
    assert_eq!(harness.grid.layout().rows, 30);
    assert_eq!(harness.grid.cells().len(), 2400);
}

#[test]
fn test_resize_rebuilds_after_debounce() {
    let mut harness = EngineHarness::with_defaults();
    harness.run_frames(10);
    assert!(harness.total_age() > 0);

    let t = harness.now_ms;
    harness.grid.handle_resize(400.0, 300.0, t);

    // Within the debounce window the old grid survives
    harness.step();
    assert_eq!(harness.grid.layout().columns, 80);

    // 100ms after the signal the grid is rebuilt and all state discarded
    harness.step_by(100.0);
    assert_eq!(harness.grid.layout().columns, 40);
    assert_eq!(harness.grid.layout().rows, 15);
    assert_eq!(harness.grid.cells().len(), 600);
    let age_after: u64 = harness.grid.cells().iter().map(|c| c.age).sum();
    // The rebuild frame may already tick the fresh store once
    assert!(age_after <= 30, "prior mutation state leaked: {}", age_after);
}

#[test]
fn test_resize_signals_restart_debounce() {
    let mut harness = EngineHarness::with_defaults();
    harness.grid.handle_resize(400.0, 300.0, 0.0);

    // A later signal supersedes the first and restarts the window
    harness.now_ms = 80.0;
    harness.grid.handle_resize(200.0, 100.0, 80.0);

    harness.grid.frame(120.0); // 120ms after first, 40ms after second
    assert_eq!(harness.grid.layout().columns, 80, "debounce restarted");

    harness.grid.frame(180.0);
    assert_eq!(harness.grid.layout().columns, 20);
    assert_eq!(harness.grid.layout().rows, 5);
}

// === Scheduling ===

#[test]
fn test_tick_cadence_follows_intensity() {
    // low intensity: 50ms * 2.0 = 100ms between ticks
    let config = GlitchConfig {
        intensity: Intensity::Low,
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 200.0, 200.0);
    let ticks = harness.run_frames(100); // 1600ms at 16ms steps
    assert!(
        (14..=17).contains(&ticks),
        "expected ~16 ticks at 100ms cadence, got {}",
        ticks
    );
}

#[test]
fn test_mutations_bounded_by_budget() {
    let mut harness = EngineHarness::with_defaults();
    // medium on 2400 cells: 120 candidates per tick
    let before = harness.total_age();
    let ticks = harness.run_frames(50);
    let after = harness.total_age();
    assert!(after > before);
    assert!(after - before <= ticks as u64 * 120);
}

#[test]
fn test_hidden_surface_freezes_engine() {
    let mut harness = EngineHarness::with_defaults();
    harness.run_frames(5);
    let frozen_age = harness.total_age();

    harness.grid.visibility_changed(false);
    assert_eq!(harness.grid.phase(), Phase::Paused);
    for _ in 0..50 {
        assert_eq!(harness.step(), FramePlan::Skip);
    }
    assert_eq!(harness.total_age(), frozen_age);
}

#[test]
fn test_resume_does_not_burst() {
    let mut harness = EngineHarness::with_defaults();
    harness.run_frames(5);

    harness.grid.visibility_changed(false);
    harness.step_by(10_000.0); // a long hidden stretch
    harness.grid.visibility_changed(true);

    let before = harness.total_age();
    harness.step();
    let after = harness.total_age();
    // One tick's budget at most, despite 200 missed intervals
    assert!(after - before <= 120, "burst after resume: {}", after - before);
}

#[test]
fn test_smooth_transitions_blend_between_ticks() {
    let mut harness = EngineHarness::with_defaults();
    assert_eq!(harness.step_by(0.0), FramePlan::Tick);
    // 16ms later the 50ms tick interval has not elapsed; smooth mode blends
    assert_eq!(harness.step(), FramePlan::Blend);

    let in_transition = harness
        .grid
        .cells()
        .iter()
        .filter(|c| c.color_progress < 1.0)
        .count();
    assert!(in_transition > 0, "mutated cells should be blending");
}

#[test]
fn test_instant_mode_skips_idle_frames() {
    let config = GlitchConfig {
        smooth_transitions: false,
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 200.0, 200.0);
    assert_eq!(harness.step_by(0.0), FramePlan::Tick);
    assert_eq!(harness.step(), FramePlan::Skip);

    // Every cell that mutated snapped straight to its target
    for cell in harness.grid.cells().iter() {
        assert_eq!(cell.color_progress, 1.0);
        assert_eq!(cell.color, cell.target_color);
    }
}

// === Drawing ===

#[test]
fn test_draw_emits_every_cell() {
    let mut harness = EngineHarness::with_defaults();
    harness.run_frames(3);
    let sink = harness.draw();
    assert!(sink.cleared_first());
    assert_eq!(sink.glyph_count(), 2400);
}

#[test]
fn test_ripple_without_tracking_never_displaces() {
    let config = GlitchConfig {
        pattern: Pattern::Ripple,
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 200.0, 200.0);
    harness.grid.pointer_moved(66.0, 99.0);
    harness.run_frames(4);

    let sink = harness.draw();
    let layout = *harness.grid.layout();
    for (cell, draw) in harness.grid.cells().iter().zip(sink.glyphs()) {
        let (cx, cy) = layout.cell_center(cell.grid_x, cell.grid_y);
        assert_eq!((draw.x, draw.y), (cx, cy));
    }
}

#[test]
fn test_ripple_with_tracking_displaces() {
    let config = GlitchConfig {
        pattern: Pattern::Ripple,
        pointer_tracking: true,
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 200.0, 200.0);
    harness.grid.pointer_moved(66.0, 99.0);
    harness.run_frames(4);

    let sink = harness.draw();
    let layout = *harness.grid.layout();
    let displaced = harness
        .grid
        .cells()
        .iter()
        .zip(sink.glyphs())
        .filter(|(cell, draw)| {
            let (cx, cy) = layout.cell_center(cell.grid_x, cell.grid_y);
            (draw.x, draw.y) != (cx, cy)
        })
        .count();
    assert!(displaced > 0);
}

#[test]
fn test_overlays_respect_config() {
    let plain = EngineHarness::with_defaults().draw();
    assert_eq!(plain.rect_count(), 0);

    let config = GlitchConfig {
        scanlines: true,
        noise: true,
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 800.0, 600.0);
    let sink = harness.draw();
    // 150 scanline bands plus a nonzero noise scatter
    assert!(sink.rect_count() > 150);

    let config = GlitchConfig {
        scanlines: true,
        noise: true,
        performance_mode: true,
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 800.0, 600.0);
    let sink = harness.draw();
    assert_eq!(sink.rect_count(), 150, "performance mode keeps only scanlines");
}

#[test]
fn test_theme_override_reaches_draw() {
    let config = GlitchConfig {
        theme: Theme::Minimal,
        charset: Some("@".to_string()),
        palette: Some(vec!["#ff0000".to_string()]),
        ..GlitchConfig::default()
    };
    let mut harness = EngineHarness::new(config, 100.0, 100.0);
    harness.run_frames(10);

    let sink = harness.draw();
    for draw in sink.glyphs() {
        assert_eq!(draw.ch, '@');
        assert_eq!(draw.color, glitchgrid::Rgb::new(255, 0, 0));
    }
}

// === Teardown ===

#[test]
fn test_dispose_is_terminal() {
    let mut harness = EngineHarness::with_defaults();
    harness.run_frames(3);
    harness.grid.dispose();

    let age = harness.total_age();
    for _ in 0..10 {
        assert_eq!(harness.step(), FramePlan::Skip);
    }
    assert_eq!(harness.total_age(), age);

    // Visibility events cannot revive a disposed component
    harness.grid.visibility_changed(true);
    assert_eq!(harness.grid.phase(), Phase::Disposed);
}
