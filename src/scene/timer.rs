use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame rate by sleeping out the rest of each frame
pub struct FrameTimer {
    frame: Duration,
    frame_start: Instant,
}

impl FrameTimer {
    pub fn new(fps: u32) -> Self {
        FrameTimer {
            frame: frame_duration(fps),
            frame_start: Instant::now(),
        }
    }

    /// Sleeps until the current frame has lasted one frame duration
    pub fn tick(&mut self) {
        let wait = remaining(self.frame, self.frame_start.elapsed());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        self.frame_start = Instant::now();
    }
}

/// Length of one frame at `fps` (zero is treated as one)
pub fn frame_duration(fps: u32) -> Duration {
    Duration::new(0, 1_000_000_000u32 / fps.max(1))
}

/// Time left in the frame; zero once the frame has overrun
pub fn remaining(frame: Duration, elapsed: Duration) -> Duration {
    frame.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_at_60_fps() {
        assert_eq!(frame_duration(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_duration(1), Duration::from_secs(1));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_time_in_frame() {
        let frame = Duration::from_millis(16);
        assert_eq!(remaining(frame, Duration::from_millis(10)), Duration::from_millis(6));
        assert_eq!(remaining(frame, Duration::from_millis(16)), Duration::ZERO);
        assert_eq!(remaining(frame, Duration::from_millis(40)), Duration::ZERO);
    }
}
