//! Stopwatch for timing a real tender's first turnaround.

use std::time::{Duration, Instant};

/// A start/stop/reset stopwatch.
///
/// Reads a monotonic clock on demand rather than owning a tick; the once-a-
/// second display refresh is the presentation layer's business.
#[derive(Debug, Default)]
pub struct TurnaroundTimer {
    accumulated: Duration,
    started: Option<Instant>,
}

impl TurnaroundTimer {
    /// A stopped timer at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start, or resume after a stop. Starting a running timer does nothing.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stop, keeping the accumulated time. Stopping a stopped timer does
    /// nothing.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    /// Stop and return to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True while running.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Total measured time.
    pub fn elapsed(&self) -> Duration {
        let running = self
            .started
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default();

        self.accumulated + running
    }

    /// Whole seconds on the clock.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Elapsed time in minutes, rounded to two decimals. This is the value
    /// handed to the session's working turnaround time.
    pub fn elapsed_minutes(&self) -> f64 {
        let minutes = self.elapsed_seconds() as f64 / 60.0;

        (minutes * 100.0).round() / 100.0
    }

    /// `MM:SS` display form.
    pub fn display(&self) -> String {
        let seconds = self.elapsed_seconds();

        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    fn timer_at(seconds: u64) -> TurnaroundTimer {
        TurnaroundTimer {
            accumulated: Duration::from_secs(seconds),
            started: None,
        }
    }

    #[test]
    fn test_fresh_timer_is_zero() {
        let timer = TurnaroundTimer::new();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.display(), "00:00");
        assert_eq!(timer.elapsed_minutes(), 0.0);
    }

    #[test]
    fn test_start_stop_reset() {
        let mut timer = timer_at(90);

        timer.start();
        assert!(timer.is_running());
        timer.start(); // no effect while running
        timer.stop();
        assert!(!timer.is_running());
        assert!(timer.elapsed_seconds() >= 90);

        timer.reset();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_elapsed_minutes_rounds_to_two_decimals() {
        assert_eq!(timer_at(150).elapsed_minutes(), 2.5);
        assert_eq!(timer_at(100).elapsed_minutes(), 1.67);
        assert_eq!(timer_at(60).elapsed_minutes(), 1.0);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(timer_at(615).display(), "10:15");
        assert_eq!(timer_at(59).display(), "00:59");
        assert_eq!(timer_at(3600).display(), "60:00");
    }
}
