use std::time::{Duration, Instant};

use tracing::trace;

/// Fixed-rate frame pacing
pub trait Pacer {
    /// Block until at least one frame interval has passed since the
    /// previous call
    fn wait(&mut self);
}

/// Sleeps the calling thread to hold a target tick rate.
///
/// When a tick overruns its budget the pacer returns immediately, so the loop
/// slows down instead of trying to catch up.
pub struct FramePacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Pacer for `fps` ticks per second
    pub fn with_rate(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time still to wait at `now`. Never negative.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

impl Pacer for FramePacer {
    fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        } else if let Some(last) = self.last {
            trace!(elapsed_ms = last.elapsed().as_secs_f32() * 1000.0, "tick overran frame budget");
        }
        self.last = Some(Instant::now());
    }
}
