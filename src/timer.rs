//! Pausable stopwatch
//!
//! The clock is passed in (seconds since some fixed origin), so the timer
//! works the same with `macroquad::time::get_time` and in tests.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timer {
    /// Clock time when started, shifted forward by time spent paused
    start: f64,
    /// Elapsed time frozen at pause
    paused_at: f64,
    started: bool,
    paused: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: f64) {
        self.started = true;
        self.paused = false;
        self.start = now;
        self.paused_at = 0.0;
    }

    pub fn stop(&mut self) {
        self.started = false;
        self.paused = false;
        self.start = 0.0;
        self.paused_at = 0.0;
    }

    pub fn pause(&mut self, now: f64) {
        if self.started && !self.paused {
            self.paused = true;
            self.paused_at = now - self.start;
            self.start = 0.0;
        }
    }

    pub fn unpause(&mut self, now: f64) {
        if self.started && self.paused {
            self.paused = false;
            self.start = now - self.paused_at;
            self.paused_at = 0.0;
        }
    }

    /// Seconds counted so far; 0 when not started
    pub fn elapsed(&self, now: f64) -> f64 {
        match (self.started, self.paused) {
            (false, _) => 0.0,
            (true, true) => self.paused_at,
            (true, false) => now - self.start,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused && self.started
    }
}
