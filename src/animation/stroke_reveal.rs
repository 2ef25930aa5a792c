use std::time::Duration;

/// Progressive bottom-to-top reveal of bar strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeReveal {
    starts_at: Duration,
    duration: Duration,
}

impl StrokeReveal {
    #[must_use]
    pub fn new(starts_at: Duration, duration: Duration) -> Self {
        Self {
            starts_at,
            duration,
        }
    }

    #[must_use]
    pub fn ends_at(self) -> Duration {
        self.starts_at + self.duration
    }

    /// Fraction of each stroke drawn at `now`, linear in time.
    #[must_use]
    pub fn progress_at(self, now: Duration) -> f64 {
        if now >= self.ends_at() || self.duration.is_zero() {
            return 1.0;
        }
        if now <= self.starts_at {
            return 0.0;
        }
        (now - self.starts_at).as_secs_f64() / self.duration.as_secs_f64()
    }

    #[must_use]
    pub fn is_running_at(self, now: Duration) -> bool {
        now < self.ends_at()
    }
}
