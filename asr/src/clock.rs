use std::time::{Duration, Instant};

/// Wall clock for the `time` uniform, restarted by `prepare_for_rendering`.
#[derive(Debug, Clone, Copy)]
pub struct RenderClock {
    start: Instant,
}

impl Default for RenderClock {
    fn default() -> Self {
        Self::start_new()
    }
}

impl RenderClock {
    pub fn start_new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        millis_to_seconds(self.elapsed())
    }
}

/// Whole milliseconds, then seconds; sub-millisecond parts are dropped.
pub fn millis_to_seconds(elapsed: Duration) -> f32 {
    (elapsed.as_millis() as f64 / 1000.0) as f32
}
