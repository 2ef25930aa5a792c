use crate::error::GraphResult;
use crate::render::{Color, Renderer};

use super::{BarAppearance, BarGraph};

impl<R: Renderer> BarGraph<R> {
    #[must_use]
    pub fn appearance(&self) -> BarAppearance {
        self.core.presentation.appearance
    }

    pub fn set_bar_color(&mut self, color: Color) -> GraphResult<()> {
        color.validate()?;
        self.core.presentation.appearance.bar_color = color;
        Ok(())
    }

    pub fn set_highlight_color(&mut self, color: Color) -> GraphResult<()> {
        color.validate()?;
        self.core.presentation.appearance.highlight_color = color;
        Ok(())
    }

    pub fn set_background_color(&mut self, color: Color) -> GraphResult<()> {
        color.validate()?;
        self.core.presentation.appearance.background_color = color;
        Ok(())
    }
}
