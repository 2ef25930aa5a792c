use std::time::Duration;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{BarLayout, DataSeries};
use crate::error::GraphResult;
use crate::interaction::{DemoSequencer, ScrollState, SelectionState};
use crate::render::{BarLayers, Renderer};

use super::graph_core::{
    GraphBehaviorState, GraphCore, GraphModel, GraphPresentationState, GraphRuntimeState,
};
use super::validation::validate_config;
use super::{BarGraph, BarGraphConfig};

impl<R: Renderer> BarGraph<R> {
    pub fn new(renderer: R, config: BarGraphConfig) -> GraphResult<Self> {
        let config = validate_config(config)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            bar_width = config.bar_width_px,
            demo = config.demo.enabled,
            "create bar graph"
        );

        let model = GraphModel {
            viewport: config.viewport,
            series: DataSeries::default(),
            layout: BarLayout::new(f64::from(config.bar_width_px), 0),
            scroll: ScrollState::with_kinetic_config(config.kinetic_scroll),
        };

        Ok(Self {
            renderer,
            core: GraphCore {
                model,
                behavior: GraphBehaviorState {
                    demo: config.demo,
                    snap_curve: config.snap_curve,
                },
                presentation: GraphPresentationState {
                    appearance: config.appearance,
                    layers: BarLayers::default(),
                    dirty: true,
                },
                runtime: GraphRuntimeState {
                    now: Duration::ZERO,
                    selection: SelectionState::new(config.highlight_reset_policy),
                    demo: DemoSequencer::default(),
                    animation: None,
                    plugins: IndexMap::new(),
                },
            },
        })
    }
}
