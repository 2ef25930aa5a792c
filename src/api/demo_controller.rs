use tracing::debug;

use crate::animation::OffsetAnimation;
use crate::extensions::GraphEvent;
use crate::interaction::{DemoAdvance, DemoBehavior, DemoLeg, DemoPhase, DemoScript};
use crate::render::Renderer;

use super::BarGraph;
use super::graph_core::AnimationPurpose;

impl<R: Renderer> BarGraph<R> {
    #[must_use]
    pub fn demo_behavior(&self) -> DemoBehavior {
        self.core.behavior.demo
    }

    pub fn set_demo_behavior(&mut self, behavior: DemoBehavior) {
        self.core.behavior.demo = behavior;
    }

    #[must_use]
    pub fn demo_phase(&self) -> DemoPhase {
        self.core.runtime.demo.phase()
    }

    #[must_use]
    pub fn is_demo_active(&self) -> bool {
        self.core.runtime.demo.is_active()
    }

    #[must_use]
    pub fn demo_script(&self) -> Option<DemoScript> {
        self.core.runtime.demo.script()
    }

    /// Stops a running demo where it is and resets the highlighted bar.
    ///
    /// Returns `false` when no demo was running. A cancelled demo never
    /// plays again.
    pub fn cancel_demo(&mut self) -> bool {
        if !self.core.runtime.demo.cancel() {
            return false;
        }
        if matches!(
            self.core.runtime.animation.map(|animation| animation.completion()),
            Some(AnimationPurpose::DemoLeg { .. })
        ) {
            self.core.runtime.animation = None;
        }
        self.core.model.scroll.on_settle_end();
        let highlighted = self.core.runtime.selection.last_highlighted();
        self.reset_highlight(highlighted);
        debug!(highlighted, "demo cancelled");
        self.emit_event(GraphEvent::DemoCancelled);
        true
    }

    pub(super) fn start_demo(&mut self, start_index: usize) {
        let bar_count = self.core.model.series.len();
        let Some(leg) = self.core.runtime.demo.start(start_index, bar_count) else {
            return;
        };
        debug!(start_index, bar_count, "demo started");
        self.emit_event(GraphEvent::DemoStarted { start_index });
        self.start_demo_leg(leg);
    }

    fn start_demo_leg(&mut self, leg: DemoLeg) {
        let from = self.core.model.scroll.offset();
        let target = self.core.model.layout.offset_for_index(leg.to_index);
        self.core.runtime.animation = Some(OffsetAnimation::new(
            from,
            target,
            self.core.runtime.now + leg.delay,
            leg.duration,
            self.core.behavior.snap_curve,
            AnimationPurpose::DemoLeg {
                to_index: leg.to_index,
            },
        ));
        self.core.model.scroll.on_settle_start();
    }

    /// Reports the bar a leg landed on, like a real drag would, then chains
    /// the next leg or wraps up the demo.
    pub(super) fn complete_demo_leg(&mut self, to_index: usize) {
        self.report_selection(self.selection_at(to_index));
        self.swap_highlight(to_index);

        match self.core.runtime.demo.finish_leg() {
            Some(DemoAdvance::Next(leg)) => self.start_demo_leg(leg),
            Some(DemoAdvance::Completed { final_index }) => {
                self.core.model.scroll.on_settle_end();
                self.reset_highlight(final_index);
                debug!(final_index, "demo finished");
                self.emit_event(GraphEvent::DemoFinished { final_index });
            }
            None => {}
        }
    }
}
