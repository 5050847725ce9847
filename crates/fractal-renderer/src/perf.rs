//! Frame timing and performance monitoring.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest step handed to the animation, in seconds.
///
/// A stalled frame (window drag, debugger) otherwise turns into a visible
/// jump in every spin angle.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Tracks frame durations for FPS calculation and animation steps.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            last_frame: now,
            last_report: now,
            max_samples: 120,
        }
    }

    /// Record the start of a new frame and return the animation step in
    /// seconds, clamped to [`MAX_FRAME_DT`]. Call this once per frame.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        dt.as_secs_f32().min(MAX_FRAME_DT)
    }

    /// Restart timing without recording a frame, e.g. after the window
    /// was occluded, so the next step does not include the pause.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Returns true at most once per `interval`. A zero interval never reports.
    pub fn report_due(&mut self, interval: Duration) -> bool {
        if interval.is_zero() {
            return false;
        }
        let now = Instant::now();
        if now.duration_since(self.last_report) >= interval {
            self.last_report = now;
            return true;
        }
        false
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn fps_after_frames() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            std::thread::sleep(Duration::from_millis(1));
            timer.begin_frame();
        }
        // FPS should be some positive number
        assert!(timer.fps() > 0.0);
        assert!(timer.frame_time_ms() > 0.0);
        assert_eq!(timer.sample_count(), 10);
    }

    #[test]
    fn max_samples_respected() {
        let mut timer = FrameTimer::new();
        for _ in 0..200 {
            timer.begin_frame();
        }
        assert!(timer.sample_count() <= 120);
    }

    #[test]
    fn step_is_positive_and_small() {
        let mut timer = FrameTimer::new();
        std::thread::sleep(Duration::from_millis(2));
        let dt = timer.begin_frame();
        assert!(dt > 0.0);
        assert!(dt <= MAX_FRAME_DT);
    }

    #[test]
    fn stalled_frame_is_clamped() {
        let mut timer = FrameTimer::new();
        timer.last_frame = Instant::now() - Duration::from_secs(3);
        assert_eq!(timer.begin_frame(), MAX_FRAME_DT);
        // The raw duration still counts towards FPS.
        assert!(timer.frame_time_ms() >= 3000.0);
    }

    #[test]
    fn reset_drops_the_pause() {
        let mut timer = FrameTimer::new();
        timer.last_frame = Instant::now() - Duration::from_secs(3);
        timer.reset();
        assert!(timer.begin_frame() < MAX_FRAME_DT);
    }

    #[test]
    fn zero_interval_never_reports() {
        let mut timer = FrameTimer::new();
        assert!(!timer.report_due(Duration::ZERO));
    }

    #[test]
    fn report_due_once_per_interval() {
        let mut timer = FrameTimer::new();
        timer.last_report = Instant::now() - Duration::from_secs(10);
        assert!(timer.report_due(Duration::from_secs(5)));
        assert!(!timer.report_due(Duration::from_secs(5)));
    }
}
