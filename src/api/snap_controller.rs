use std::time::Duration;

use tracing::{debug, trace};

use crate::animation::OffsetAnimation;
use crate::extensions::GraphEvent;
use crate::render::Renderer;

use super::BarGraph;
use super::graph_core::AnimationPurpose;

/// Duration of the snap animation onto the nearest bar center.
pub const SNAP_DURATION: Duration = Duration::from_millis(200);

impl<R: Renderer> BarGraph<R> {
    /// Snaps to the bar under the anchor.
    ///
    /// Notifies the observer with that bar, then animates the offset onto the
    /// bar center over [`SNAP_DURATION`]. Once it lands the bar's highlight is
    /// reset and, with `trigger_demo`, the one-shot demo scroll starts if it
    /// never played before.
    ///
    /// Without data this only reports `(0, 0)`. While the demo plays the
    /// snap only reports: the demo already ends on a bar center.
    pub fn snap(&mut self, trigger_demo: bool) {
        let selection = self.selection_at_offset();
        self.report_selection(selection);
        let Some(selection) = selection else {
            trace!("snap without bars");
            return;
        };
        if self.core.runtime.demo.is_active() {
            trace!(index = selection.index, "snap deferred to running demo");
            return;
        }

        self.interrupt_animation();
        let from = self.core.model.scroll.offset();
        let target = self.core.model.layout.offset_for_index(selection.index);
        self.core.runtime.animation = Some(OffsetAnimation::new(
            from,
            target,
            self.core.runtime.now,
            SNAP_DURATION,
            self.core.behavior.snap_curve,
            AnimationPurpose::Snap {
                index: selection.index,
                trigger_demo,
            },
        ));
        self.core.model.scroll.on_settle_start();
        debug!(
            index = selection.index,
            from, target, trigger_demo, "snap started"
        );
        self.emit_event(GraphEvent::SnapStarted {
            index: selection.index,
            target_offset: target,
        });
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.core.runtime.animation.is_some()
    }

    pub(super) fn complete_snap(&mut self, index: usize, trigger_demo: bool) {
        self.core.model.scroll.on_settle_end();
        self.reset_highlight(index);
        debug!(index, "snap settled");
        self.emit_event(GraphEvent::SnapSettled { index });
        if trigger_demo {
            self.start_demo(index);
        }
    }

    /// Drops the in-flight offset animation, leaving the offset where it is.
    ///
    /// An interrupted snap still resets its bar's highlight but never starts
    /// the demo; an interrupted demo leg cancels the demo.
    pub(super) fn interrupt_animation(&mut self) {
        let Some(animation) = self.core.runtime.animation.take() else {
            return;
        };
        match animation.completion() {
            AnimationPurpose::Snap { index, .. } => {
                trace!(index, "snap interrupted");
                self.core.model.scroll.on_settle_end();
                self.reset_highlight(index);
            }
            AnimationPurpose::DemoLeg { .. } => {
                self.cancel_demo();
            }
        }
    }
}
