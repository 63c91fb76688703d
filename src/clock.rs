//! Millisecond frame clock for native hosts
//!
//! The engine only consumes `now_ms` values handed to `frame()`; hosts with
//! their own frame timestamps (compositor vsync, browser callbacks) pass
//! those through. This clock covers everyone else.

use std::time::Instant;

/// Monotonic clock reporting milliseconds since creation
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = FrameClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn test_clock_reports_milliseconds() {
        let clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let elapsed = clock.now_ms();
        assert!(elapsed >= 20.0, "elapsed: {}", elapsed);
        assert!(elapsed < 5000.0, "elapsed: {}", elapsed);
    }
}
