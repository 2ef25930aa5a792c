//! Deterministic timing primitives.
//!
//! Nothing here reads a wall clock. The graph owns a logical `now` that only
//! moves when the host calls `BarGraph::advance`, which keeps timers and
//! animation chains reproducible in tests.

mod curve;
mod offset_animation;
mod stroke_reveal;
mod timer_queue;

pub use curve::AnimationCurve;
pub use offset_animation::OffsetAnimation;
pub use stroke_reveal::StrokeReveal;
pub use timer_queue::TimerQueue;
