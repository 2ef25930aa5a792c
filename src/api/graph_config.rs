use serde::{Deserialize, Serialize};

use crate::animation::AnimationCurve;
use crate::core::{DEFAULT_BAR_WIDTH_PX, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{DemoBehavior, HighlightResetPolicy, KineticScrollConfig};
use crate::render::Color;

/// Colors used when building frames. Changes take effect on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarAppearance {
    pub bar_color: Color,
    pub highlight_color: Color,
    pub background_color: Color,
}

impl Default for BarAppearance {
    fn default() -> Self {
        Self {
            bar_color: Color::WHITE,
            highlight_color: Color::LIGHT_GRAY,
            background_color: Color::WHITE,
        }
    }
}

/// Public graph bootstrap configuration.
///
/// Serializable so host applications can persist/load graph setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGraphConfig {
    pub viewport: Viewport,
    #[serde(default = "default_bar_width_px")]
    pub bar_width_px: u32,
    #[serde(default)]
    pub appearance: BarAppearance,
    #[serde(default)]
    pub demo: DemoBehavior,
    #[serde(default)]
    pub highlight_reset_policy: HighlightResetPolicy,
    #[serde(default)]
    pub kinetic_scroll: KineticScrollConfig,
    #[serde(default)]
    pub snap_curve: AnimationCurve,
}

impl BarGraphConfig {
    /// Creates a config with the stock bar width, colors and demo enabled.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bar_width_px: default_bar_width_px(),
            appearance: BarAppearance::default(),
            demo: DemoBehavior::default(),
            highlight_reset_policy: HighlightResetPolicy::default(),
            kinetic_scroll: KineticScrollConfig::default(),
            snap_curve: AnimationCurve::default(),
        }
    }

    #[must_use]
    pub fn with_bar_width_px(mut self, bar_width_px: u32) -> Self {
        self.bar_width_px = bar_width_px;
        self
    }

    #[must_use]
    pub fn with_appearance(mut self, appearance: BarAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub fn with_demo(mut self, demo: DemoBehavior) -> Self {
        self.demo = demo;
        self
    }

    /// Shorthand for disabling the demo scroll entirely.
    #[must_use]
    pub fn without_demo(mut self) -> Self {
        self.demo.enabled = false;
        self
    }

    #[must_use]
    pub fn with_highlight_reset_policy(mut self, policy: HighlightResetPolicy) -> Self {
        self.highlight_reset_policy = policy;
        self
    }

    #[must_use]
    pub fn with_kinetic_scroll(mut self, config: KineticScrollConfig) -> Self {
        self.kinetic_scroll = config;
        self
    }

    #[must_use]
    pub fn with_snap_curve(mut self, curve: AnimationCurve) -> Self {
        self.snap_curve = curve;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_bar_width_px() -> u32 {
    DEFAULT_BAR_WIDTH_PX
}
