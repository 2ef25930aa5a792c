use std::time::Duration;

use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::BarGraph;
use super::graph_core::AnimationPurpose;

impl<R: Renderer> BarGraph<R> {
    /// Logical time since the graph was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.core.runtime.now
    }

    /// Earliest pending timer, animation end or kinetic stop.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = self.core.runtime.now;
        let reset_due = self.core.runtime.selection.next_reset_due();
        let animation_due = self
            .core
            .runtime
            .animation
            .map(|animation| animation.ends_at());
        let kinetic_due = self
            .core
            .model
            .scroll
            .kinetic_time_to_stop()
            .map(|seconds| now.saturating_add(duration_ceil(seconds)));
        [reset_due, animation_due, kinetic_due]
            .into_iter()
            .flatten()
            .min()
    }

    /// `true` while anything still moves on its own: an offset animation,
    /// kinetic deceleration or the stroke reveal.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.runtime.animation.is_some()
            || self.core.model.scroll.kinetic_state().active
            || self
                .core
                .presentation
                .layers
                .is_revealing(self.core.runtime.now)
    }

    /// Advances logical time by `delta`.
    ///
    /// Timers and animation completions inside the window fire in
    /// chronological order; motion (animated offset, kinetic deceleration)
    /// is stepped up to each deadline before it fires. A frame is presented at
    /// the end when anything visible changed.
    ///
    /// Fails without touching any state when the clock would overflow.
    pub fn advance(&mut self, delta: Duration) -> GraphResult<()> {
        let Some(target) = self.core.runtime.now.checked_add(delta) else {
            return Err(GraphError::InvalidData(format!(
                "advancing the clock by {delta:?} overflows it"
            )));
        };
        if self
            .core
            .presentation
            .layers
            .is_revealing(self.core.runtime.now)
        {
            self.core.presentation.dirty = true;
        }

        loop {
            let next = self.next_deadline().filter(|due| *due <= target);
            self.step_motion_to(next.unwrap_or(target));
            if next.is_none() {
                break;
            }
            self.fire_due();
        }

        self.present_if_dirty()
    }

    fn step_motion_to(&mut self, to: Duration) {
        let now = self.core.runtime.now;
        if to < now {
            return;
        }
        self.core.runtime.now = to;
        self.step_kinetic(to - now);
        if to == now {
            return;
        }

        let Some(animation) = self.core.runtime.animation else {
            return;
        };
        let offset = self
            .core
            .model
            .layout
            .clamp_offset(animation.offset_at(to));
        if offset == self.core.model.scroll.offset() {
            return;
        }
        self.core.model.scroll.set_offset(offset);
        self.core.presentation.dirty = true;
        if self.core.runtime.demo.is_active() {
            if let Some(index) = self.core.model.layout.index_for_offset(offset) {
                self.swap_highlight(index);
            }
        }
    }

    fn step_kinetic(&mut self, delta: Duration) {
        let Some(time_to_stop) = self.core.model.scroll.kinetic_time_to_stop() else {
            return;
        };
        if delta.is_zero() && time_to_stop > 0.0 {
            return;
        }
        let Some(displacement) = self.core.model.scroll.step_kinetic(delta.as_secs_f64()) else {
            return;
        };
        let unclamped = self.core.model.scroll.offset() + displacement;
        let clamped = self.core.model.layout.clamp_offset(unclamped);
        self.core.model.scroll.set_offset(clamped);
        self.core.presentation.dirty = true;
        self.handle_scroll_update();

        if clamped != unclamped || !self.core.model.scroll.kinetic_state().active {
            self.finish_deceleration();
        }
    }

    fn fire_due(&mut self) {
        let now = self.core.runtime.now;
        while let Some(index) = self.core.runtime.selection.pop_due_reset(now) {
            self.reset_highlight(index);
        }

        let Some(animation) = self.core.runtime.animation else {
            return;
        };
        if !animation.is_finished_at(now) {
            return;
        }
        self.core.runtime.animation = None;
        let landed = self.core.model.layout.clamp_offset(animation.target());
        self.core.model.scroll.set_offset(landed);
        self.core.presentation.dirty = true;
        match animation.completion() {
            AnimationPurpose::Snap {
                index,
                trigger_demo,
            } => self.complete_snap(index, trigger_demo),
            AnimationPurpose::DemoLeg { to_index } => self.complete_demo_leg(to_index),
        }
    }
}

/// Rounds up to whole nanoseconds so the deadline never lands before `seconds`.
fn duration_ceil(seconds: f64) -> Duration {
    let nanos = (seconds.max(0.0) * 1e9).ceil();
    if !nanos.is_finite() || nanos >= u64::MAX as f64 {
        return Duration::MAX;
    }
    Duration::from_nanos(nanos as u64)
}
