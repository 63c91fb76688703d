//! GlitchGrid - animated glyph-grid glitch effect
//!
//! A self-contained visual effect component: a grid of glyphs that randomly
//! mutate in character and color, with selectable motion patterns, color
//! themes and post-processing overlays. The host supplies a rectangular
//! surface (a wgpu device/queue and a destination texture view) and forwards
//! pointer and visibility events; the component does the rest.
//!
//! The implementation lives in:
//! - `glitch-core` - colors, PRNG, configuration
//! - `glitch-theme` - bundled themes and resolution
//! - `glitch-render` - grid, scheduler, displacement, composite pipeline
//!
//! ## Usage
//!
//! ```no_run
//! use glitchgrid::{FrameClock, GlitchConfig, GlitchGrid};
//!
//! let mut grid = GlitchGrid::new(GlitchConfig::default(), 800.0, 600.0);
//! let clock = FrameClock::new();
//! // per host frame callback:
//! // grid.frame(clock.now_ms());
//! // grid.render(&device, &queue, &view, format, (800, 600))?;
//! # let _ = (grid, clock);
//! ```

pub mod clock;
pub mod gate;

pub use clock::FrameClock;
pub use gate::{FrameGate, FramePlan, Phase};

pub use glitch_core::{
    ConfigError, Direction, FontConfig, GlitchConfig, Intensity, Pattern, Rgb, Rng, Theme,
};
pub use glitch_render::{
    CellMetrics, CellStore, FrameSink, GlyphCell, GlyphDraw, GridLayout, MockSink, RenderError,
};
pub use glitch_theme::{ResolvedTheme, resolve};

use glitch_render::frame::{self, FrameParams};
use glitch_render::pipeline::{self, CompositeTarget};
use glitch_render::scene::SceneSink;
use glitch_render::scheduler;
use vello::Scene;

/// Debounce window after the last resize signal
const RESIZE_DEBOUNCE_MS: f64 = 100.0;

type Callback = Box<dyn FnMut()>;

struct PendingResize {
    width: f64,
    height: f64,
    signaled_ms: f64,
}

/// The glitch grid component
///
/// Owns all engine state explicitly: cells, PRNG, frame gate, pointer and
/// visibility flags, the cached composite strategy. Everything runs on the
/// host's frame-callback thread; no internal locking.
pub struct GlitchGrid {
    config: GlitchConfig,
    theme: ResolvedTheme,
    cells: CellStore,
    rng: Rng,
    gate: FrameGate,
    pointer: Option<(f64, f64)>,
    hovered: bool,
    pending_resize: Option<PendingResize>,
    now_ms: f64,
    scene: Scene,
    target: Option<Box<dyn CompositeTarget>>,
    render_disabled: bool,
    on_hover_enter: Option<Callback>,
    on_hover_leave: Option<Callback>,
    on_activate: Option<Callback>,
}

impl GlitchGrid {
    /// Mount the component on a surface of `width` x `height` pixels
    pub fn new(config: GlitchConfig, width: f64, height: f64) -> Self {
        let theme = glitch_theme::resolve(
            config.theme,
            config.palette.as_deref(),
            config.charset.as_deref(),
        );
        let mut rng = match config.seed {
            Some(seed) => Rng::new(seed),
            None => Rng::from_entropy(),
        };
        let metrics = CellMetrics::from_font_size(config.font.size);
        let layout = GridLayout::derive(width, height, metrics);
        let cells = CellStore::populate(layout, &theme, &mut rng);
        log::debug!(
            "mounted {}x{} grid ({} theme, {:?} pattern)",
            layout.columns,
            layout.rows,
            theme.name,
            config.pattern
        );

        Self {
            config,
            theme,
            cells,
            rng,
            gate: FrameGate::new(),
            pointer: None,
            hovered: false,
            pending_resize: None,
            now_ms: 0.0,
            scene: Scene::new(),
            target: None,
            render_disabled: false,
            on_hover_enter: None,
            on_hover_leave: None,
            on_activate: None,
        }
    }

    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    pub fn theme(&self) -> &ResolvedTheme {
        &self.theme
    }

    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    pub fn layout(&self) -> &GridLayout {
        self.cells.layout()
    }

    pub fn phase(&self) -> Phase {
        self.gate.phase()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    // === Host events ===

    /// Signal a surface resize; applied after the debounce window
    pub fn handle_resize(&mut self, width: f64, height: f64, now_ms: f64) {
        if !self.config.responsive_resize {
            return;
        }
        // Every signal restarts the window; only the last size is kept
        self.pending_resize = Some(PendingResize {
            width,
            height,
            signaled_ms: now_ms,
        });
    }

    /// Update the pointer position in surface-local pixels
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    /// Pointer entered the surface
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        if self.config.pause_on_hover {
            self.gate.set_hover(true);
        }
        if let Some(cb) = &mut self.on_hover_enter {
            cb();
        }
    }

    /// Pointer left the surface
    pub fn pointer_left(&mut self) {
        self.hovered = false;
        self.gate.set_hover(false);
        if let Some(cb) = &mut self.on_hover_leave {
            cb();
        }
    }

    /// Surface was clicked/tapped
    pub fn activate(&mut self) {
        if let Some(cb) = &mut self.on_activate {
            cb();
        }
    }

    /// Document/tab visibility changed
    pub fn visibility_changed(&mut self, visible: bool) {
        self.gate.set_hidden(!visible);
    }

    /// External pause flag (reserved for hosts)
    pub fn set_paused(&mut self, paused: bool) {
        self.gate.set_explicit(paused);
    }

    /// Tear the component down; every later frame is a no-op
    pub fn dispose(&mut self) {
        self.gate.dispose();
        self.target = None;
    }

    // === Callbacks ===

    pub fn set_on_hover_enter(&mut self, callback: impl FnMut() + 'static) {
        self.on_hover_enter = Some(Box::new(callback));
    }

    pub fn set_on_hover_leave(&mut self, callback: impl FnMut() + 'static) {
        self.on_hover_leave = Some(Box::new(callback));
    }

    pub fn set_on_activate(&mut self, callback: impl FnMut() + 'static) {
        self.on_activate = Some(Box::new(callback));
    }

    // === Frame loop ===

    /// Advance the engine for one host frame
    ///
    /// Runs the debounced resize, the mutation tick when due, and pending
    /// color transitions. Returns what this frame did so the host can skip
    /// `render` when nothing changed.
    pub fn frame(&mut self, now_ms: f64) -> FramePlan {
        self.now_ms = now_ms;
        if self.gate.phase() == Phase::Disposed {
            return FramePlan::Skip;
        }

        self.apply_pending_resize(now_ms);

        let plan = self.gate.plan(
            now_ms,
            self.config.effective_interval_ms(),
            self.config.smooth_transitions,
        );
        match plan {
            FramePlan::Tick => {
                scheduler::run_tick(
                    &mut self.cells,
                    &self.theme,
                    self.config.pattern,
                    self.config.intensity,
                    self.config.smooth_transitions,
                    &mut self.rng,
                    now_ms,
                );
                if self.config.smooth_transitions {
                    self.cells.advance_transitions();
                }
            }
            FramePlan::Blend => {
                self.cells.advance_transitions();
            }
            FramePlan::Skip => {}
        }
        plan
    }

    fn apply_pending_resize(&mut self, now_ms: f64) {
        let due = self
            .pending_resize
            .as_ref()
            .is_some_and(|p| now_ms - p.signaled_ms >= RESIZE_DEBOUNCE_MS);
        if !due {
            return;
        }
        let Some(pending) = self.pending_resize.take() else {
            return;
        };

        let metrics = CellMetrics::from_font_size(self.config.font.size);
        let layout = GridLayout::derive(pending.width, pending.height, metrics);
        self.cells = CellStore::populate(layout, &self.theme, &mut self.rng);
        log::debug!("grid rebuilt: {}x{}", layout.columns, layout.rows);
    }

    // === Drawing ===

    /// Draw the current frame into an arbitrary sink
    ///
    /// This is the headless draw path; `render` uses it with the vello sink.
    pub fn draw_into(&mut self, sink: &mut dyn FrameSink) {
        let params = FrameParams {
            theme: &self.theme,
            pattern: self.config.pattern,
            now_ms: self.now_ms,
            pointer: self.pointer,
            pointer_tracking: self.config.pointer_tracking,
            scanlines: self.config.scanlines,
            noise: self.config.noise,
            performance_mode: self.config.performance_mode,
        };
        frame::render_frame(&self.cells, &params, &mut self.rng, sink);
    }

    /// Draw the current frame and composite it onto `dest`
    ///
    /// The composite strategy is selected on first use and cached for the
    /// session. If no strategy can be constructed at all, rendering is
    /// disabled (logged once) and the call becomes a no-op; the host stays
    /// up either way.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        dest: &wgpu::TextureView,
        dest_format: wgpu::TextureFormat,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        if self.gate.phase() == Phase::Disposed || self.render_disabled {
            return Ok(());
        }

        if self.target.is_none() {
            match pipeline::select_target(device, dest_format, self.config.performance_mode) {
                Ok(target) => self.target = Some(target),
                Err(e) => {
                    log::error!("rendering disabled: {}", e);
                    self.render_disabled = true;
                    return Ok(());
                }
            }
        }

        let params = FrameParams {
            theme: &self.theme,
            pattern: self.config.pattern,
            now_ms: self.now_ms,
            pointer: self.pointer,
            pointer_tracking: self.config.pointer_tracking,
            scanlines: self.config.scanlines,
            noise: self.config.noise,
            performance_mode: self.config.performance_mode,
        };
        let mut sink = SceneSink::new(&mut self.scene, self.cells.layout().metrics);
        frame::render_frame(&self.cells, &params, &mut self.rng, &mut sink);

        let Some(target) = self.target.as_mut() else {
            return Ok(());
        };
        target.composite(device, queue, &self.scene, dest, size)
    }
}
