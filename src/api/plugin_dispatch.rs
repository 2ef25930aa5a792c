use crate::extensions::{GraphEvent, PluginContext};
use crate::render::Renderer;

use super::BarGraph;

impl<R: Renderer> BarGraph<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.core.model.viewport,
            bar_count: self.core.model.series.len(),
            bar_width: self.core.model.layout.bar_width,
            scroll_offset: self.core.model.scroll.offset(),
            scroll_phase: self.core.model.scroll.phase(),
            demo_phase: self.core.runtime.demo.phase(),
            highlighted_index: self.core.runtime.selection.last_highlighted(),
        }
    }

    pub(super) fn emit_event(&mut self, event: GraphEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.core.runtime.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
