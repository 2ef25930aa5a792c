use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{BarLayout, DataSeries};
use crate::error::GraphResult;
use crate::extensions::GraphEvent;
use crate::render::Renderer;

use super::BarGraph;
use super::validation::validate_bar_width;

impl<R: Renderer> BarGraph<R> {
    /// Replaces the data series wholesale and re-lays out the content.
    ///
    /// Bar layers are not rebuilt until the next [`BarGraph::render`].
    pub fn set_data(&mut self, values: Vec<f64>) -> GraphResult<()> {
        let series = DataSeries::new(values)?;
        self.replace_series(series);
        Ok(())
    }

    /// Same as [`BarGraph::set_data`] for decimal inputs.
    pub fn set_data_decimal(&mut self, values: &[Decimal]) -> GraphResult<()> {
        let series = DataSeries::from_decimals(values)?;
        self.replace_series(series);
        Ok(())
    }

    fn replace_series(&mut self, series: DataSeries) {
        debug!(
            bar_count = series.len(),
            max_value = series.max_value(),
            "set bar data"
        );
        let bar_count = series.len();
        self.core.model.series = series;
        self.core.runtime.selection.rebase(bar_count);
        self.relayout();
        self.emit_event(GraphEvent::DataUpdated { bar_count });
    }

    /// Changes the bar width, recomputes the content width for the existing
    /// data and redraws already built bars.
    pub fn set_bar_width(&mut self, bar_width_px: u32) -> GraphResult<()> {
        let bar_width = validate_bar_width(bar_width_px)?;
        debug!(bar_width, "set bar width");
        self.core.model.layout.bar_width = bar_width;
        self.relayout();
        if !self.core.presentation.layers.is_empty() {
            self.rebuild_layers(None);
            self.present()?;
        }
        Ok(())
    }

    /// Recomputes the layout and scrolls to the right end of the content,
    /// where the most recent bar sits.
    fn relayout(&mut self) {
        self.interrupt_animation();
        let layout = BarLayout::new(
            self.core.model.layout.bar_width,
            self.core.model.series.len(),
        );
        self.core.model.layout = layout;
        self.core.model.scroll.set_offset(layout.content_width());
        self.core.presentation.dirty = true;
        self.emit_event(GraphEvent::LayoutChanged {
            bar_width: layout.bar_width,
            content_width: layout.content_width(),
        });
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.core.model.series.values()
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.core.model.series.len()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.core.model.series.max_value()
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.core.model.layout.bar_width
    }

    #[must_use]
    pub fn layout(&self) -> BarLayout {
        self.core.model.layout
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.core.model.layout.content_width()
    }
}
