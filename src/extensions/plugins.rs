use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{DemoPhase, ScrollPhase};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub bar_count: usize,
    pub bar_width: f64,
    pub scroll_offset: f64,
    pub scroll_phase: ScrollPhase,
    pub demo_phase: DemoPhase,
    pub highlighted_index: usize,
}

/// Event stream exposed to plugins, delivered in the order things happen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GraphEvent {
    DataUpdated { bar_count: usize },
    LayoutChanged { bar_width: f64, content_width: f64 },
    BarSelected { value: f64, index: usize },
    HighlightChanged { previous: usize, current: usize },
    HighlightReset { index: usize },
    DragStarted,
    DragEnded { will_decelerate: bool },
    DecelerationEnded,
    SnapStarted { index: usize, target_offset: f64 },
    SnapSettled { index: usize },
    DemoStarted { start_index: usize },
    DemoFinished { final_index: usize },
    DemoCancelled,
    Rendered { bar_count: usize },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read graph context without mutating graph
/// internals.
pub trait GraphPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GraphEvent, context: PluginContext);
}
