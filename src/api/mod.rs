//! Public graph facade.
//!
//! `BarGraph` is split across controller files by concern (data, scroll,
//! snap, demo, timeline, ...), all operating on the shared `GraphCore`.

mod appearance_controller;
mod data_controller;
mod demo_controller;
mod frame_builder;
mod graph;
mod graph_config;
mod graph_core;
mod graph_init;
mod highlight_controller;
mod plugin_dispatch;
mod plugin_registry;
mod scroll_controller;
mod snap_controller;
mod snapshot;
mod timeline_controller;
mod validation;

pub use graph::{BAR_REVEAL_DURATION, BarGraph};
pub use graph_config::{BarAppearance, BarGraphConfig};
pub use snap_controller::SNAP_DURATION;
pub use snapshot::{GRAPH_SNAPSHOT_JSON_SCHEMA_V1, GraphSnapshot, GraphSnapshotJsonContractV1};
