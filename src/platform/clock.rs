//! Frame clock

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic time source with a frame limiter
pub trait Clock {
    /// Seconds since the clock started
    fn now(&self) -> f64;

    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);
}

/// Wall clock paced to a fixed frame rate
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    frame: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs_f64(1.0 / frames_per_second.max(1) as f64);
        Self {
            start,
            frame,
            next_frame: start + frame,
        }
    }
}

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_frame {
            thread::sleep(self.next_frame - now);
            self.next_frame += self.frame;
        } else {
            // Running behind: don't try to catch up with a burst of frames
            self.next_frame = now + self.frame;
        }
    }
}

/// Clock that advances a fixed step per frame without sleeping
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: f64,
    step: f64,
}

impl ManualClock {
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn wait_for_next_frame(&mut self) {
        self.now += self.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(0.5);
        assert_eq!(clock.now(), 0.0);
        clock.wait_for_next_frame();
        clock.wait_for_next_frame();
        assert_eq!(clock.now(), 1.0);
        clock.advance(2.0);
        assert_eq!(clock.now(), 3.0);
    }

    #[test]
    fn test_frame_clock_paces_frames() {
        let mut clock = FrameClock::new(100);
        let start = clock.now();
        for _ in 0..3 {
            clock.wait_for_next_frame();
        }
        // Three 10ms frames, allowing for coarse sleep granularity
        assert!(clock.now() - start >= 0.025);
    }

    #[test]
    fn test_frame_clock_is_monotonic() {
        let clock = FrameClock::new(60);
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
