use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The demo only plays for series longer than three bars.
pub const DEMO_MIN_BARS: usize = 4;

/// Pause between the triggering snap and the first demo leg.
pub const DEMO_START_DELAY: Duration = Duration::from_millis(500);

pub const DEMO_LEG_DURATION: Duration = Duration::from_millis(400);

/// Precedence between a running demo and a user drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DemoInterruptPolicy {
    /// The demo keeps playing; user input is reported but the demo owns the
    /// offset until its last leg lands.
    #[default]
    RunToCompletion,
    /// A drag start cancels the demo.
    CancelOnDrag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoBehavior {
    /// Whether `render` asks the initial snap to trigger the demo.
    pub enabled: bool,
    #[serde(default)]
    pub interrupt: DemoInterruptPolicy,
}

impl Default for DemoBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            interrupt: DemoInterruptPolicy::RunToCompletion,
        }
    }
}

/// Bar indices visited by the demo: `start → a → b → a → start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScript {
    stops: [usize; 5],
}

impl DemoScript {
    /// Builds the script around `start`.
    ///
    /// The demo walks two bars to the left and back. When `start` is too close
    /// to the left edge it walks to the right instead. Returns `None` for
    /// series of three bars or fewer.
    #[must_use]
    pub fn around(start: usize, bar_count: usize) -> Option<Self> {
        if bar_count < DEMO_MIN_BARS || start >= bar_count {
            return None;
        }
        let (near, far) = if start >= 2 {
            (start - 1, start - 2)
        } else {
            (start + 1, start + 2)
        };
        Some(Self {
            stops: [start, near, far, near, start],
        })
    }

    #[must_use]
    pub fn stops(&self) -> [usize; 5] {
        self.stops
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.stops[0]
    }

    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.stops.len() - 1
    }

    fn leg(&self, leg: usize) -> DemoLeg {
        DemoLeg {
            leg,
            from_index: self.stops[leg],
            to_index: self.stops[leg + 1],
            delay: if leg == 0 {
                DEMO_START_DELAY
            } else {
                Duration::ZERO
            },
            duration: DEMO_LEG_DURATION,
        }
    }
}

/// One animated transition of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoLeg {
    pub leg: usize,
    pub from_index: usize,
    pub to_index: usize,
    pub delay: Duration,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DemoPhase {
    /// Never played; the one-shot latch is still armed.
    #[default]
    Ready,
    Running {
        leg: usize,
    },
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAdvance {
    Next(DemoLeg),
    Completed { final_index: usize },
}

/// Step-state machine for the one-shot demo scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSequencer {
    phase: DemoPhase,
    script: Option<DemoScript>,
}

impl DemoSequencer {
    #[must_use]
    pub fn phase(&self) -> DemoPhase {
        self.phase
    }

    #[must_use]
    pub fn script(&self) -> Option<DemoScript> {
        self.script
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, DemoPhase::Running { .. })
    }

    /// `true` once the demo has started, whether or not it completed.
    #[must_use]
    pub fn has_played(&self) -> bool {
        self.phase != DemoPhase::Ready
    }

    /// Arms the demo around `start_index` and returns its first leg.
    ///
    /// Returns `None` without consuming the latch when the series is too
    /// short, and always `None` once the demo has played. The latch closes
    /// here, when the first leg is handed out.
    pub fn start(&mut self, start_index: usize, bar_count: usize) -> Option<DemoLeg> {
        if self.has_played() {
            return None;
        }
        let Some(script) = DemoScript::around(start_index, bar_count) else {
            debug!(bar_count, "demo declined: series too short");
            return None;
        };
        self.script = Some(script);
        self.phase = DemoPhase::Running { leg: 0 };
        Some(script.leg(0))
    }

    /// Marks the running leg complete and returns what comes next.
    pub fn finish_leg(&mut self) -> Option<DemoAdvance> {
        let DemoPhase::Running { leg } = self.phase else {
            return None;
        };
        let script = self.script?;
        let next = leg + 1;
        if next < script.leg_count() {
            self.phase = DemoPhase::Running { leg: next };
            return Some(DemoAdvance::Next(script.leg(next)));
        }
        self.phase = DemoPhase::Finished;
        self.script = None;
        Some(DemoAdvance::Completed {
            final_index: script.start(),
        })
    }

    /// Stops a running demo. Returns `true` when something was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.phase = DemoPhase::Cancelled;
        self.script = None;
        true
    }
}
