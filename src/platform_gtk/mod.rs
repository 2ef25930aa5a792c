//! GTK4 embedding: a `DrawingArea` showing a `BarGraph`, a drag gesture
//! feeding scroll events and a frame tick driving the graph clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::BarGraph;
use crate::render::{CairoContextRenderer, Renderer};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct GtkBarGraphAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    graph: Rc<RefCell<BarGraph<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R> GtkBarGraphAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(graph: BarGraph<R>) -> Self {
        let viewport = graph.viewport();
        let graph = Rc::new(RefCell::new(graph));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        install_draw_func(&drawing_area, &graph);
        install_drag_gesture(&drawing_area, &graph);
        install_frame_tick(&drawing_area, &graph);

        Self {
            graph,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle for host code that feeds data or changes appearance.
    #[must_use]
    pub fn graph(&self) -> Rc<RefCell<BarGraph<R>>> {
        Rc::clone(&self.graph)
    }
}

fn install_draw_func<R>(area: &gtk::DrawingArea, graph: &Rc<RefCell<BarGraph<R>>>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let graph = Rc::clone(graph);
    area.set_draw_func(move |_, context, _, _| {
        let mut graph = graph.borrow_mut();
        let frame = graph.build_render_frame();
        if let Err(err) = graph
            .renderer_mut()
            .render_on_cairo_context(context, &frame)
        {
            warn!(error = %err, "failed to draw bar graph frame");
        }
    });
}

fn install_drag_gesture<R>(area: &gtk::DrawingArea, graph: &Rc<RefCell<BarGraph<R>>>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let drag = gtk::GestureDrag::new();
    let drag_origin = Rc::new(Cell::new(0.0_f64));

    {
        let graph = Rc::clone(graph);
        let drag_origin = Rc::clone(&drag_origin);
        drag.connect_drag_begin(move |_, _, _| {
            let mut graph = graph.borrow_mut();
            graph.begin_drag();
            drag_origin.set(graph.scroll_offset());
        });
    }
    {
        let graph = Rc::clone(graph);
        let area = area.clone();
        drag.connect_drag_update(move |_, dx, _| {
            // Dragging the content right reveals earlier bars.
            if let Err(err) = graph.borrow_mut().scroll_to(drag_origin.get() - dx) {
                warn!(error = %err, "drag update rejected");
            }
            area.queue_draw();
        });
    }
    {
        let graph = Rc::clone(graph);
        let area = area.clone();
        drag.connect_drag_end(move |_, _, _| {
            if let Err(err) = graph.borrow_mut().end_drag(false) {
                warn!(error = %err, "drag end rejected");
            }
            area.queue_draw();
        });
    }

    area.add_controller(drag);
}

fn install_frame_tick<R>(area: &gtk::DrawingArea, graph: &Rc<RefCell<BarGraph<R>>>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let graph = Rc::clone(graph);
    let area = area.clone();
    let last_tick = Cell::new(Instant::now());
    glib::timeout_add_local(FRAME_INTERVAL, move || {
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick.replace(now));
        let mut graph = graph.borrow_mut();
        if graph.is_animating() || graph.next_deadline().is_some() {
            if let Err(err) = graph.advance(elapsed) {
                warn!(error = %err, "graph tick failed");
            }
            area.queue_draw();
        }
        glib::ControlFlow::Continue
    });
}
