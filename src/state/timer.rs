//! Active-session timer.
//!
//! A single elapsed-seconds counter driven by the app's one-second tick.
//! Start/stop transitions are caller-driven; nothing is persisted, so an
//! app restart always begins from zero.

/// Elapsed-seconds counter for the active reading session.
#[derive(Debug, Clone, Default)]
pub struct SessionTimer {
    elapsed_secs: u64,
    running: bool,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter by one second, if running.
    ///
    /// Called once per tick of the app's interval timer.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    /// Start (or resume) counting.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze the counter without losing the elapsed total.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Freeze the counter and report the elapsed total, for logging the
    /// session.
    pub fn stop(&mut self) -> u64 {
        self.running = false;
        self.elapsed_secs
    }

    /// Zero the counter. The only way the elapsed total goes back to 0.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_secs = 0;
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// `H:MM:SS` (or `MM:SS` under an hour) for display.
    pub fn display(&self) -> String {
        let hours = self.elapsed_secs / 3600;
        let minutes = (self.elapsed_secs % 3600) / 60;
        let seconds = self.elapsed_secs % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{:02}:{:02}", minutes, seconds)
        }
    }
}
