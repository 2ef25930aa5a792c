use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap};
use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::render::{BarPrimitive, Color, RenderFrame, Renderer};

/// Counters from the most recent Cairo pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub bars_stroked: usize,
    /// Bars entirely outside the viewport.
    pub bars_culled: usize,
    /// Bars skipped because nothing of them is revealed yet.
    pub bars_hidden: usize,
}

/// Drawing into a Cairo context owned by someone else, typically the context
/// handed to a GTK `DrawingArea` draw function.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()>;
}

/// Strokes bar frames with Cairo.
///
/// `Renderer::render` paints into an owned ARGB image surface, which can be
/// exported with [`CairoBarRenderer::write_png`] for headless checks.
#[derive(Debug)]
pub struct CairoBarRenderer {
    image: ImageSurface,
    stats: CairoRenderStats,
}

impl CairoBarRenderer {
    pub fn new(width: i32, height: i32) -> GraphResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GraphError::InvalidViewport {
                width: width.max(0).unsigned_abs(),
                height: height.max(0).unsigned_abs(),
            });
        }
        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| cairo_error("create image surface", err))?;
        Ok(Self {
            image,
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    /// Writes the last offscreen frame as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            GraphError::InvalidData(format!("cannot create `{}`: {err}", path.display()))
        })?;
        self.image.write_to_png(&mut file).map_err(|err| {
            GraphError::InvalidData(format!("cannot encode `{}`: {err}", path.display()))
        })
    }

    fn draw(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;

        set_source(context, frame.background);
        context
            .paint()
            .map_err(|err| cairo_error("paint background", err))?;

        // Butt caps keep the stroke exactly between y_bottom and the revealed top.
        context.set_line_cap(LineCap::Butt);
        let visible = frame.visible_bars().count();
        let mut stats = CairoRenderStats {
            bars_culled: frame.bars.len() - visible,
            ..CairoRenderStats::default()
        };
        for bar in frame.visible_bars() {
            if stroke_bar(context, *bar)? {
                stats.bars_stroked += 1;
            } else {
                stats.bars_hidden += 1;
            }
        }

        trace!(
            stroked = stats.bars_stroked,
            culled = stats.bars_culled,
            hidden = stats.bars_hidden,
            "cairo bar pass"
        );
        self.stats = stats;
        Ok(())
    }
}

impl Renderer for CairoBarRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let context =
            Context::new(&self.image).map_err(|err| cairo_error("create image context", err))?;
        self.draw(&context, frame)
    }
}

impl CairoContextRenderer for CairoBarRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()> {
        self.draw(context, frame)
    }
}

/// Returns `false` when the bar has no revealed part to draw.
fn stroke_bar(context: &Context, bar: BarPrimitive) -> GraphResult<bool> {
    if bar.reveal <= 0.0 {
        return Ok(false);
    }
    set_source(context, bar.color);
    context.set_line_width(bar.width);
    context.move_to(bar.x_center, bar.y_bottom);
    context.line_to(bar.x_center, bar.revealed_y_top());
    context
        .stroke()
        .map_err(|err| cairo_error("stroke bar", err))?;
    Ok(true)
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn cairo_error(action: &str, err: cairo::Error) -> GraphError {
    GraphError::InvalidData(format!("cairo failed to {action}: {err}"))
}
