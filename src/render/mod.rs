mod bar_layers;
mod frame;
mod null_renderer;
mod primitives;

pub use bar_layers::{BarLayer, BarLayers, BarStroke};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{BarPrimitive, Color};

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`: bar positions are
/// already in screen space, highlight colors are resolved and the stroke
/// reveal is expressed as a fraction. Drawing code never sees scroll or
/// selection state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoBarRenderer, CairoContextRenderer, CairoRenderStats};
