mod demo;
mod selection;

pub use demo::{
    DEMO_LEG_DURATION, DEMO_MIN_BARS, DEMO_START_DELAY, DemoAdvance, DemoBehavior,
    DemoInterruptPolicy, DemoLeg, DemoPhase, DemoScript, DemoSequencer,
};
pub use selection::{
    BarSelection, BarSelectionObserver, HIGHLIGHT_RESET_DELAY, HighlightResetPolicy,
    HighlightSwap, SelectionState,
};

use serde::{Deserialize, Serialize};

/// Logical phase of the scroll controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// A user drag is in progress.
    Dragging,
    /// The drag ended with momentum; waiting for the deceleration to finish.
    Decelerating,
    /// A programmatic offset animation (snap or demo leg) is in flight.
    Settling,
}

/// Steps ending within a nanosecond of the stop time count as reaching it,
/// so a step up to a nanosecond-rounded deadline always ends the motion.
const KINETIC_STOP_TOLERANCE_SECS: f64 = 1e-9;

/// Tuning for built-in kinetic deceleration after a flick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticScrollConfig {
    /// Multiplicative velocity decay per second.
    pub decay_per_second: f64,
    /// Deceleration stops when `abs(velocity)` drops below this threshold (px/s).
    pub stop_velocity_abs: f64,
}

impl Default for KineticScrollConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.135,
            stop_velocity_abs: 10.0,
        }
    }
}

/// Public kinetic scroll runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KineticScrollState {
    pub active: bool,
    pub velocity_px_per_sec: f64,
}

/// Scroll offset plus the phase machine driving it.
///
/// The offset is in content space and always kept inside
/// `[0, content_width]` by the owner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    phase: ScrollPhase,
    offset: f64,
    kinetic_config: KineticScrollConfig,
    kinetic: KineticScrollState,
}

impl ScrollState {
    #[must_use]
    pub fn with_kinetic_config(kinetic_config: KineticScrollConfig) -> Self {
        Self {
            kinetic_config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(self) -> ScrollPhase {
        self.phase
    }

    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.phase == ScrollPhase::Dragging
    }

    #[must_use]
    pub fn kinetic_config(self) -> KineticScrollConfig {
        self.kinetic_config
    }

    pub fn set_kinetic_config(&mut self, config: KineticScrollConfig) {
        self.kinetic_config = config;
    }

    #[must_use]
    pub fn kinetic_state(self) -> KineticScrollState {
        self.kinetic
    }

    pub fn on_drag_start(&mut self) {
        self.stop_kinetic();
        self.phase = ScrollPhase::Dragging;
    }

    /// Leaves the dragging phase.
    ///
    /// Returns `true` when the caller must snap right away, `false` when a
    /// deceleration end event is still expected.
    pub fn on_drag_end(&mut self, will_decelerate: bool) -> bool {
        if will_decelerate {
            self.phase = ScrollPhase::Decelerating;
            false
        } else {
            self.phase = ScrollPhase::Idle;
            true
        }
    }

    pub fn on_deceleration_end(&mut self) {
        self.stop_kinetic();
        self.phase = ScrollPhase::Idle;
    }

    pub fn on_settle_start(&mut self) {
        self.phase = ScrollPhase::Settling;
    }

    pub fn on_settle_end(&mut self) {
        if self.phase == ScrollPhase::Settling {
            self.phase = ScrollPhase::Idle;
        }
    }

    pub fn start_kinetic(&mut self, velocity_px_per_sec: f64) {
        self.phase = ScrollPhase::Decelerating;
        self.kinetic.active = true;
        self.kinetic.velocity_px_per_sec = velocity_px_per_sec;
    }

    pub fn stop_kinetic(&mut self) {
        self.kinetic.active = false;
        self.kinetic.velocity_px_per_sec = 0.0;
    }

    /// Seconds until the decaying velocity drops below the stop threshold.
    ///
    /// Returns `None` when no kinetic deceleration is active.
    #[must_use]
    pub fn kinetic_time_to_stop(self) -> Option<f64> {
        if !self.kinetic.active {
            return None;
        }
        let speed = self.kinetic.velocity_px_per_sec.abs();
        let stop = self.kinetic_config.stop_velocity_abs;
        if speed <= stop {
            return Some(0.0);
        }
        Some((stop / speed).ln() / self.kinetic_config.decay_per_second.ln())
    }

    /// Advances kinetic deceleration and returns the offset displacement to apply.
    ///
    /// Velocity decays as `v * decay^t`; the displacement is its exact
    /// integral, so splitting a span into several steps moves the offset by
    /// the same distance as one step. A step reaching the stop time is
    /// shortened to it and ends the deceleration.
    ///
    /// Returns `None` when no kinetic deceleration is active.
    pub fn step_kinetic(&mut self, delta_seconds: f64) -> Option<f64> {
        let time_to_stop = self.kinetic_time_to_stop()?;
        let elapsed = delta_seconds.max(0.0).min(time_to_stop);
        let rate = self.kinetic_config.decay_per_second.ln();
        let velocity = self.kinetic.velocity_px_per_sec;
        let displacement = velocity * (rate * elapsed).exp_m1() / rate;

        if delta_seconds + KINETIC_STOP_TOLERANCE_SECS >= time_to_stop {
            self.stop_kinetic();
        } else {
            self.kinetic.velocity_px_per_sec = velocity * (rate * elapsed).exp();
        }

        Some(displacement)
    }
}
