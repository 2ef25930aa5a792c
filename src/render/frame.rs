use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::render::{BarPrimitive, Color};

/// Backend-agnostic scene for one graph draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub scroll_offset: f64,
    pub bars: Vec<BarPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            scroll_offset: 0.0,
            bars: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.scroll_offset.is_finite() {
            return Err(GraphError::InvalidData(
                "scroll offset must be finite".to_owned(),
            ));
        }
        self.background.validate()?;
        for bar in &self.bars {
            bar.validate()?;
        }
        Ok(())
    }

    /// Bars intersecting the horizontal extent of the viewport.
    pub fn visible_bars(&self) -> impl Iterator<Item = &BarPrimitive> {
        let width = f64::from(self.viewport.width);
        self.bars
            .iter()
            .filter(move |bar| bar.x_right() >= 0.0 && bar.x_left() <= width)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
