use crate::render::{BarPrimitive, BarStroke, RenderFrame, Renderer};

use super::BarGraph;

impl<R: Renderer> BarGraph<R> {
    /// Materializes the current state into screen-space draw commands.
    ///
    /// Bar `x` positions are shifted so that the scroll offset sits under the
    /// viewport anchor. Highlight strokes resolve to the current highlight
    /// color, everything else to the bar color.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let model = &self.core.model;
        let presentation = &self.core.presentation;
        let appearance = presentation.appearance;
        let scroll_offset = model.scroll.offset();
        let origin_x = model.viewport.anchor_x() - scroll_offset;
        let reveal = presentation.layers.reveal_progress(self.core.runtime.now);

        let mut frame = RenderFrame::new(model.viewport, appearance.background_color)
            .with_scroll_offset(scroll_offset);
        frame.bars = presentation
            .layers
            .iter()
            .map(|layer| BarPrimitive {
                index: layer.frame.index,
                x_center: origin_x + layer.frame.x_center(),
                y_top: layer.frame.y_top,
                y_bottom: layer.frame.y_bottom(),
                width: layer.frame.width,
                color: match layer.stroke {
                    BarStroke::Normal => appearance.bar_color,
                    BarStroke::Highlighted => appearance.highlight_color,
                },
                reveal,
            })
            .collect();
        frame
    }
}
