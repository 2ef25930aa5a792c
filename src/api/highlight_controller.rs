use smallvec::SmallVec;
use tracing::trace;

use crate::extensions::GraphEvent;
use crate::interaction::HighlightResetPolicy;
use crate::render::{BarStroke, Renderer};

use super::BarGraph;

impl<R: Renderer> BarGraph<R> {
    #[must_use]
    pub fn highlight_reset_policy(&self) -> HighlightResetPolicy {
        self.core.runtime.selection.reset_policy()
    }

    pub fn set_highlight_reset_policy(&mut self, policy: HighlightResetPolicy) {
        self.core.runtime.selection.set_reset_policy(policy);
    }

    /// Bars currently drawn with the highlight stroke.
    #[must_use]
    pub fn highlighted_bars(&self) -> SmallVec<[usize; 4]> {
        self.core.presentation.layers.highlighted()
    }

    /// Bar indices with a highlight reset still scheduled, in schedule order.
    #[must_use]
    pub fn pending_highlight_resets(&self) -> Vec<usize> {
        self.core.runtime.selection.pending_reset_targets()
    }

    /// Highlights `index` immediately and schedules the reset of the bar
    /// that held the highlight before. No-op until layers are built.
    pub(super) fn swap_highlight(&mut self, index: usize) {
        if self.core.presentation.layers.is_empty() {
            return;
        }
        let now = self.core.runtime.now;
        let Some(swap) = self.core.runtime.selection.swap_highlight(index, now) else {
            return;
        };
        trace!(
            previous = swap.previous,
            current = swap.current,
            "highlight moved"
        );
        if self
            .core
            .presentation
            .layers
            .set_stroke(swap.current, BarStroke::Highlighted)
        {
            self.core.presentation.dirty = true;
        }
        self.emit_event(GraphEvent::HighlightChanged {
            previous: swap.previous,
            current: swap.current,
        });
    }

    pub(super) fn reset_highlight(&mut self, index: usize) {
        if index >= self.core.presentation.layers.len() {
            return;
        }
        if self
            .core
            .presentation
            .layers
            .set_stroke(index, BarStroke::Normal)
        {
            self.core.presentation.dirty = true;
        }
        self.emit_event(GraphEvent::HighlightReset { index });
    }
}
