use serde::{Deserialize, Serialize};

use crate::core::{BarFrame, BarLayout, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{DemoPhase, ScrollPhase};
use crate::render::Renderer;

use super::{BarAppearance, BarGraph};

pub const GRAPH_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub viewport: Viewport,
    pub values: Vec<f64>,
    pub max_value: f64,
    pub layout: BarLayout,
    pub content_width: f64,
    pub scroll_offset: f64,
    pub scroll_phase: ScrollPhase,
    pub selected_index: Option<usize>,
    pub highlighted_bars: Vec<usize>,
    pub pending_highlight_resets: Vec<usize>,
    pub demo_phase: DemoPhase,
    pub appearance: BarAppearance,
    pub bar_frames: Vec<BarFrame>,
    pub now_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GraphSnapshot,
}

impl GraphSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = GraphSnapshotJsonContractV1 {
            schema_version: GRAPH_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GraphSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GraphSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GRAPH_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GraphError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> BarGraph<R> {
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        let layers = &self.core.presentation.layers;
        GraphSnapshot {
            viewport: self.core.model.viewport,
            values: self.core.model.series.values().to_vec(),
            max_value: self.core.model.series.max_value(),
            layout: self.core.model.layout,
            content_width: self.core.model.layout.content_width(),
            scroll_offset: self.core.model.scroll.offset(),
            scroll_phase: self.core.model.scroll.phase(),
            selected_index: self.selected_index(),
            highlighted_bars: layers.highlighted().to_vec(),
            pending_highlight_resets: self.core.runtime.selection.pending_reset_targets(),
            demo_phase: self.core.runtime.demo.phase(),
            appearance: self.core.presentation.appearance,
            bar_frames: layers.frames(),
            now_ms: u64::try_from(self.core.runtime.now.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
