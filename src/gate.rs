//! Frame gating state machine
//!
//! Replaces scattered pause booleans with an explicit phase. Pause reasons
//! (hover, hidden, explicit) are tracked independently; the phase is
//! recomputed on every reason change so entry/exit is a single place.
//! Disposed is terminal.

/// Lifecycle phase of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Disposed,
}

/// What the current frame should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePlan {
    /// Nothing: paused, disposed, or nothing due
    Skip,
    /// Advance pending color transitions only
    Blend,
    /// Full tick: mutate, transition, redraw
    Tick,
}

/// Gate deciding per frame whether the engine runs
#[derive(Debug)]
pub struct FrameGate {
    phase: Phase,
    hover: bool,
    hidden: bool,
    explicit: bool,
    last_tick_ms: Option<f64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self {
            phase: Phase::Running,
            hover: false,
            hidden: false,
            explicit: false,
            last_tick_ms: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pause/resume for pointer hover
    pub fn set_hover(&mut self, paused: bool) {
        self.hover = paused;
        self.recompute();
    }

    /// Pause/resume for document visibility
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.recompute();
    }

    /// External pause flag, reserved for hosts
    pub fn set_explicit(&mut self, paused: bool) {
        self.explicit = paused;
        self.recompute();
    }

    /// Tear down; no plan will ever be produced again
    pub fn dispose(&mut self) {
        if self.phase != Phase::Disposed {
            log::debug!("frame gate: {:?} -> Disposed", self.phase);
            self.phase = Phase::Disposed;
        }
    }

    fn recompute(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        let next = if self.hover || self.hidden || self.explicit {
            Phase::Paused
        } else {
            Phase::Running
        };
        if next != self.phase {
            log::debug!("frame gate: {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    /// Decide what this frame does
    ///
    /// A tick is due when `effective_interval_ms` has elapsed since the last
    /// one (or none has happened yet). Pausing does not touch the tick
    /// stamp, so resuming runs at most one tick on the first frame back;
    /// missed ticks are never replayed.
    pub fn plan(&mut self, now_ms: f64, effective_interval_ms: f64, smooth: bool) -> FramePlan {
        match self.phase {
            Phase::Disposed | Phase::Paused => FramePlan::Skip,
            Phase::Running => {
                let due = self
                    .last_tick_ms
                    .is_none_or(|last| now_ms - last >= effective_interval_ms);
                if due {
                    self.last_tick_ms = Some(now_ms);
                    FramePlan::Tick
                } else if smooth {
                    FramePlan::Blend
                } else {
                    FramePlan::Skip
                }
            }
        }
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}
