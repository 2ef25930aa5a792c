use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::extensions::GraphEvent;
use crate::interaction::{
    BarSelection, DemoInterruptPolicy, KineticScrollConfig, KineticScrollState, ScrollPhase,
};
use crate::render::Renderer;

use super::BarGraph;
use super::validation::{validate_kinetic_scroll_config, validate_scroll_offset};

impl<R: Renderer> BarGraph<R> {
    #[must_use]
    pub fn scroll_phase(&self) -> ScrollPhase {
        self.core.model.scroll.phase()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.core.model.scroll.offset()
    }

    /// Bar currently under the viewport anchor, `None` without data.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.core
            .model
            .layout
            .index_for_offset(self.core.model.scroll.offset())
    }

    #[must_use]
    pub fn kinetic_scroll_config(&self) -> KineticScrollConfig {
        self.core.model.scroll.kinetic_config()
    }

    pub fn set_kinetic_scroll_config(&mut self, config: KineticScrollConfig) -> GraphResult<()> {
        let config = validate_kinetic_scroll_config(config)?;
        self.core.model.scroll.set_kinetic_config(config);
        Ok(())
    }

    #[must_use]
    pub fn kinetic_scroll_state(&self) -> KineticScrollState {
        self.core.model.scroll.kinetic_state()
    }

    /// Starts a user drag.
    ///
    /// An in-flight snap is interrupted where it is and its highlight reset
    /// runs right away. A running demo is cancelled only under
    /// [`DemoInterruptPolicy::CancelOnDrag`].
    pub fn begin_drag(&mut self) {
        if self.core.runtime.demo.is_active() {
            if self.core.behavior.demo.interrupt == DemoInterruptPolicy::CancelOnDrag {
                self.cancel_demo();
            }
        } else {
            self.interrupt_animation();
        }
        self.core.model.scroll.on_drag_start();
        self.emit_event(GraphEvent::DragStarted);
    }

    /// Host-driven scroll position update.
    ///
    /// The offset is clamped into `[0, content_width]`. The observer is
    /// notified on every call; while dragging (or while the demo plays) the
    /// highlight follows the bar under the anchor.
    pub fn scroll_to(&mut self, offset: f64) -> GraphResult<()> {
        let offset = validate_scroll_offset(offset)?;
        let clamped = self.core.model.layout.clamp_offset(offset);
        self.core.model.scroll.set_offset(clamped);
        self.core.presentation.dirty = true;
        self.handle_scroll_update();
        self.present_if_dirty()
    }

    /// Moves the offset by `delta` pixels, see [`BarGraph::scroll_to`].
    pub fn scroll_by(&mut self, delta: f64) -> GraphResult<()> {
        if !delta.is_finite() {
            return Err(GraphError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }
        self.scroll_to(self.core.model.scroll.offset() + delta)
    }

    /// Ends a user drag. Without momentum the graph snaps immediately,
    /// otherwise it waits for [`BarGraph::end_deceleration`].
    pub fn end_drag(&mut self, will_decelerate: bool) -> GraphResult<()> {
        if !self.core.model.scroll.is_dragging() {
            trace!(phase = ?self.scroll_phase(), "drag end without matching drag start");
        }
        self.emit_event(GraphEvent::DragEnded { will_decelerate });
        if self.core.model.scroll.on_drag_end(will_decelerate) {
            self.snap(false);
        }
        self.present_if_dirty()
    }

    /// Host-reported end of momentum scrolling.
    pub fn end_deceleration(&mut self) -> GraphResult<()> {
        self.finish_deceleration();
        self.present_if_dirty()
    }

    /// Ends a drag and lets the built-in kinetic model carry the offset.
    ///
    /// `velocity_px_per_sec` is the rate of change of the offset. The graph
    /// snaps once the velocity decays below the configured threshold or the
    /// offset hits a content edge.
    pub fn end_drag_with_velocity(&mut self, velocity_px_per_sec: f64) -> GraphResult<()> {
        if !velocity_px_per_sec.is_finite() {
            return Err(GraphError::InvalidData(
                "kinetic scroll velocity must be finite".to_owned(),
            ));
        }
        let will_decelerate = velocity_px_per_sec != 0.0;
        self.emit_event(GraphEvent::DragEnded { will_decelerate });
        if will_decelerate {
            self.core.model.scroll.start_kinetic(velocity_px_per_sec);
        } else {
            self.core.model.scroll.on_drag_end(false);
            self.snap(false);
        }
        self.present_if_dirty()
    }

    pub(super) fn finish_deceleration(&mut self) {
        self.core.model.scroll.on_deceleration_end();
        self.emit_event(GraphEvent::DecelerationEnded);
        self.snap(false);
    }

    /// Reports the bar under the anchor and, while dragging or during the
    /// demo, moves the highlight to it.
    pub(super) fn handle_scroll_update(&mut self) {
        let selection = self.selection_at_offset();
        self.report_selection(selection);
        let Some(selection) = selection else {
            return;
        };
        if self.core.model.scroll.is_dragging() || self.core.runtime.demo.is_active() {
            self.swap_highlight(selection.index);
        }
    }

    pub(super) fn selection_at_offset(&self) -> Option<BarSelection> {
        let index = self.selected_index()?;
        self.selection_at(index)
    }

    pub(super) fn selection_at(&self, index: usize) -> Option<BarSelection> {
        let value = self.core.model.series.get(index)?;
        Some(BarSelection::new(value, index))
    }

    pub(super) fn report_selection(&mut self, selection: Option<BarSelection>) {
        let reported = self.core.runtime.selection.observe(selection);
        self.emit_event(GraphEvent::BarSelected {
            value: reported.value,
            index: reported.index,
        });
    }
}
