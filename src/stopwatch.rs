use std::time::{Duration, Instant};

/// Elapsed-time source driven by the event loop
pub trait Stopwatch {
    fn start(&mut self);
    fn stop(&mut self);
    /// Clear accumulated time and stop.
    fn reset(&mut self);
    fn elapsed(&self) -> Duration;
    fn is_running(&self) -> bool;
}

/// Wall-clock stopwatch backed by `Instant`
#[derive(Debug, Default, Clone)]
pub struct SystemStopwatch {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl SystemStopwatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stopwatch for SystemStopwatch {
    fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + started_at.elapsed(),
            None => self.accumulated,
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

/// Stopwatch that only moves when told to. Used for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct ManualStopwatch {
    running: bool,
    elapsed: Duration,
}

impl ManualStopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock, but only while running.
    pub fn advance(&mut self, by: Duration) {
        if self.running {
            self.elapsed += by;
        }
    }
}

impl Stopwatch for ManualStopwatch {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn reset(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
