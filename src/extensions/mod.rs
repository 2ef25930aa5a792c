//! Optional hooks layered on top of the graph.

pub mod plugins;

pub use plugins::{GraphEvent, GraphPlugin, PluginContext};
