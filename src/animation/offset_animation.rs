use std::time::Duration;

use super::AnimationCurve;

/// Animated transition of the scroll offset between two values.
///
/// `completion` is an opaque tag handed back to the owner once the animation
/// reaches its end, so chained animations can be expressed as a flat state
/// machine instead of nested callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation<C> {
    from: f64,
    to: f64,
    starts_at: Duration,
    duration: Duration,
    curve: AnimationCurve,
    completion: C,
}

impl<C: Copy> OffsetAnimation<C> {
    #[must_use]
    pub fn new(
        from: f64,
        to: f64,
        starts_at: Duration,
        duration: Duration,
        curve: AnimationCurve,
        completion: C,
    ) -> Self {
        Self {
            from,
            to,
            starts_at,
            duration,
            curve,
            completion,
        }
    }

    #[must_use]
    pub fn origin(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn starts_at(&self) -> Duration {
        self.starts_at
    }

    #[must_use]
    pub fn ends_at(&self) -> Duration {
        self.starts_at + self.duration
    }

    #[must_use]
    pub fn completion(&self) -> C {
        self.completion
    }

    #[must_use]
    pub fn is_finished_at(&self, now: Duration) -> bool {
        now >= self.ends_at()
    }

    /// Offset at logical time `now`.
    ///
    /// Holds `from` during any start delay and `to` once finished.
    #[must_use]
    pub fn offset_at(&self, now: Duration) -> f64 {
        if now <= self.starts_at {
            return self.from;
        }
        if self.is_finished_at(now) || self.duration.is_zero() {
            return self.to;
        }
        let elapsed = (now - self.starts_at).as_secs_f64();
        let progress = self.curve.apply(elapsed / self.duration.as_secs_f64());
        self.from + (self.to - self.from) * progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_animation_holds_start_then_interpolates() {
        let animation = OffsetAnimation::new(
            100.0,
            0.0,
            Duration::from_millis(500),
            Duration::from_millis(400),
            AnimationCurve::Linear,
            (),
        );

        assert_eq!(animation.offset_at(Duration::ZERO), 100.0);
        assert_eq!(animation.offset_at(Duration::from_millis(500)), 100.0);
        assert_eq!(animation.offset_at(Duration::from_millis(700)), 50.0);
        assert_eq!(animation.offset_at(Duration::from_millis(900)), 0.0);
        assert_eq!(animation.ends_at(), Duration::from_millis(900));
        assert!(animation.is_finished_at(Duration::from_secs(1)));
    }
}
