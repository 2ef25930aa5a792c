//! scroll-bar-graph: a horizontally scrollable bar-graph control.
//!
//! The crate keeps every bit of control logic (offset/index mapping,
//! snapping, highlight debounce, the one-shot demo scroll) in plain Rust
//! driven by a logical clock, and hands drawing to a `Renderer` backend
//! through backend-agnostic frames.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarGraph, BarGraphConfig};
pub use error::{GraphError, GraphResult};
