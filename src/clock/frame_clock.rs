use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::foundation::error::{StageError, StageResult};

/// Monotonic time source in seconds.
///
/// Sources are shared between scenes; each [`FrameClock`] keeps its own mount
/// origin on top of the shared reading.
pub trait ClockSource {
    fn now_secs(&self) -> f64;
}

/// Wall-clock source backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven source for offline drivers and deterministic tests.
///
/// Clones share the same underlying reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_secs: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_secs)),
        }
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    pub fn advance(&self, delta_secs: f64) {
        self.now.set(self.now.get() + delta_secs);
    }
}

impl ClockSource for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

/// Per-scene elapsed time, starting at zero when the scene mounts.
pub struct FrameClock {
    source: Rc<dyn ClockSource>,
    mounted_at: f64,
    last: f64,
}

impl FrameClock {
    /// Start a clock at the source's current reading.
    pub fn mount(source: Rc<dyn ClockSource>) -> StageResult<Self> {
        let mounted_at = source.now_secs();
        if !mounted_at.is_finite() {
            return Err(StageError::clock(format!(
                "time source returned a non-finite reading ({mounted_at}) at mount"
            )));
        }
        Ok(Self {
            source,
            mounted_at,
            last: 0.0,
        })
    }

    /// Seconds since mount; never decreases between calls.
    pub fn elapsed(&mut self) -> f64 {
        let raw = self.source.now_secs() - self.mounted_at;
        if raw.is_finite() && raw > self.last {
            self.last = raw;
        }
        self.last
    }

    /// Most recent value returned by [`FrameClock::elapsed`].
    pub fn last_elapsed(&self) -> f64 {
        self.last
    }

    pub fn mounted_at(&self) -> f64 {
        self.mounted_at
    }
}

impl std::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameClock")
            .field("mounted_at", &self.mounted_at)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/frame_clock.rs"]
mod tests;
