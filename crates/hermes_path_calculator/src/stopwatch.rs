use std::time::{Duration, Instant};

use tracing::debug;

/// Measures a named section and reports it as a `debug` event
pub(crate) struct Stopwatch<'a> {
    start_time: Instant,
    name: &'a str,
}

impl<'a> Stopwatch<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn report(&self) {
        debug!(section = self.name, elapsed = ?self.elapsed(), "stopwatch");
    }
}
