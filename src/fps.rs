//! Frames-per-second meter that refreshes once per second.

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts frames over rolling one-second windows.
///
/// The reported value only changes when a window closes; every `tick`
/// inside a window returns the figure computed for the previous one.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window_start: Instant,
    frame_count: u32,
    current_fps: u32,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::with_start(Instant::now())
    }

    /// Start the first window at `start`.
    pub fn with_start(start: Instant) -> Self {
        Self {
            window_start: start,
            frame_count: 0,
            current_fps: 0,
        }
    }

    /// Record one frame now and return the current FPS.
    pub fn tick(&mut self) -> u32 {
        self.tick_at(Instant::now())
    }

    /// Record one frame observed at `now` and return the current FPS.
    pub fn tick_at(&mut self, now: Instant) -> u32 {
        self.frame_count += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= WINDOW {
            self.current_fps = (f64::from(self.frame_count) / elapsed.as_secs_f64()) as u32;
            self.frame_count = 0;
            self.window_start = now;
        }
        self.current_fps
    }

    /// Last reported value, without recording a frame.
    pub fn current(&self) -> u32 {
        self.current_fps
    }
}
