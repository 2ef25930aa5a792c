use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::animation::StrokeReveal;
use crate::core::{Viewport, project_bar_frames};
use crate::error::GraphResult;
use crate::extensions::GraphEvent;
use crate::interaction::BarSelectionObserver;
use crate::render::{BarLayers, Renderer};

use super::graph_core::GraphCore;

/// Duration of the bottom-to-top stroke reveal used by `render(true)`.
pub const BAR_REVEAL_DURATION: Duration = Duration::from_millis(500);

/// Main facade consumed by host applications.
///
/// `BarGraph` owns the data series, layout, scroll state, selection/highlight
/// machinery, the demo sequencer and the renderer. Hosts forward input events
/// (`begin_drag`, `scroll_to`, `end_drag`, ...) and drive time with
/// [`BarGraph::advance`].
pub struct BarGraph<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: GraphCore,
}

impl<R: Renderer> BarGraph<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Attaches a selection observer without taking ownership of it.
    ///
    /// Once the host drops its last `Rc`, notifications silently stop.
    pub fn set_selection_observer<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: BarSelectionObserver + 'static,
    {
        self.core.runtime.selection.set_observer(observer);
    }

    pub fn clear_selection_observer(&mut self) {
        self.core.runtime.selection.clear_observer();
    }

    #[must_use]
    pub fn has_selection_observer(&self) -> bool {
        self.core.runtime.selection.has_observer()
    }

    /// Rebuilds every bar layer from the current data and snaps to the
    /// nearest bar.
    ///
    /// With `animated`, strokes are revealed bottom to top over
    /// [`BAR_REVEAL_DURATION`] as time advances. The snap asks for the demo
    /// scroll when the configured demo behavior is enabled.
    pub fn render(&mut self, animated: bool) -> GraphResult<()> {
        let reveal =
            animated.then(|| StrokeReveal::new(self.core.runtime.now, BAR_REVEAL_DURATION));
        self.rebuild_layers(reveal);
        debug!(
            bar_count = self.core.presentation.layers.len(),
            animated, "rebuilt bar layers"
        );

        let trigger_demo = self.core.behavior.demo.enabled;
        self.snap(trigger_demo);
        self.present()
    }

    /// Pushes the current state to the renderer.
    pub fn present(&mut self) -> GraphResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.core.presentation.dirty = false;
        self.emit_event(GraphEvent::Rendered {
            bar_count: frame.bars.len(),
        });
        Ok(())
    }

    pub(super) fn present_if_dirty(&mut self) -> GraphResult<()> {
        if self.core.presentation.dirty {
            return self.present();
        }
        Ok(())
    }

    pub(super) fn rebuild_layers(&mut self, reveal: Option<StrokeReveal>) {
        let content_height = f64::from(self.core.model.viewport.height);
        let frames = project_bar_frames(
            &self.core.model.series,
            self.core.model.layout,
            content_height,
        );
        self.core.presentation.layers.rebuild(frames, reveal);
        self.core.presentation.dirty = true;
    }

    #[must_use]
    pub fn bar_layers(&self) -> &BarLayers {
        &self.core.presentation.layers
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
