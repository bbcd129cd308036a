//! Wall-clock timing helpers.

use std::time::{Duration, Instant};

/// Accumulates elapsed time over many separately timed calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    laps: usize,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f`, adding its wall-clock duration to the total.
    #[inline]
    pub fn time<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.elapsed += start.elapsed();
        self.laps += 1;
        result
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of calls timed so far.
    pub fn laps(&self) -> usize {
        self.laps
    }
}

/// RAII timer that logs how long a phase took when dropped.
///
/// ```ignore
/// let _t = Timed::info("generate inputs");
/// // ... work ...
/// // logs "generate inputs: 1.234s"
/// ```
pub struct Timed {
    label: String,
    start: Instant,
    level: log::Level,
}

impl Timed {
    pub fn info(label: impl Into<String>) -> Self {
        Self::at(label.into(), log::Level::Info)
    }

    pub fn debug(label: impl Into<String>) -> Self {
        Self::at(label.into(), log::Level::Debug)
    }

    fn at(label: String, level: log::Level) -> Self {
        log::trace!("{}...", label);
        Self {
            label,
            start: Instant::now(),
            level,
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "{}: {:.3?}", self.label, self.start.elapsed());
    }
}
