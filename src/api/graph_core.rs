use std::time::Duration;

use indexmap::IndexMap;

use crate::animation::{AnimationCurve, OffsetAnimation};
use crate::core::{BarLayout, DataSeries, Viewport};
use crate::extensions::GraphPlugin;
use crate::interaction::{DemoBehavior, DemoSequencer, ScrollState, SelectionState};
use crate::render::BarLayers;

use super::BarAppearance;

/// What to do once the in-flight offset animation lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AnimationPurpose {
    Snap { index: usize, trigger_demo: bool },
    DemoLeg { to_index: usize },
}

/// Data, layout and scroll position.
pub(super) struct GraphModel {
    pub(super) viewport: Viewport,
    pub(super) series: DataSeries,
    pub(super) layout: BarLayout,
    pub(super) scroll: ScrollState,
}

pub(super) struct GraphBehaviorState {
    pub(super) demo: DemoBehavior,
    pub(super) snap_curve: AnimationCurve,
}

pub(super) struct GraphPresentationState {
    pub(super) appearance: BarAppearance,
    pub(super) layers: BarLayers,
    pub(super) dirty: bool,
}

/// Clock, timers, animations and observers.
pub(super) struct GraphRuntimeState {
    pub(super) now: Duration,
    pub(super) selection: SelectionState,
    pub(super) demo: DemoSequencer,
    pub(super) animation: Option<OffsetAnimation<AnimationPurpose>>,
    pub(super) plugins: IndexMap<String, Box<dyn GraphPlugin>>,
}

/// Internal graph state used by the public facade (`BarGraph`).
pub(super) struct GraphCore {
    pub(super) model: GraphModel,
    pub(super) behavior: GraphBehaviorState,
    pub(super) presentation: GraphPresentationState,
    pub(super) runtime: GraphRuntimeState,
}
