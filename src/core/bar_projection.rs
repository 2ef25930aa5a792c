use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, DataSeries};

/// Headroom kept above the tallest bar.
pub const BAR_TOP_BUFFER_PX: f64 = 10.0;

/// Every bar, including zero-valued ones, is at least this tall.
pub const MIN_BAR_HEIGHT_PX: f64 = 2.0;

/// Bar geometry in content space (x grows right from the first bar, y grows
/// down from the top of the graph).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFrame {
    pub index: usize,
    pub x_left: f64,
    pub width: f64,
    pub y_top: f64,
    pub height: f64,
}

impl BarFrame {
    /// Horizontal center of the vertical stroke drawn for this bar.
    #[must_use]
    pub fn x_center(self) -> f64 {
        self.x_left + self.width / 2.0
    }

    #[must_use]
    pub fn y_bottom(self) -> f64 {
        self.y_top + self.height
    }
}

/// Normalizes `series` against its max value into bars standing on the
/// bottom edge of a `content_height` tall area.
#[must_use]
pub fn project_bar_frames(
    series: &DataSeries,
    layout: BarLayout,
    content_height: f64,
) -> Vec<BarFrame> {
    let tallest = (content_height - BAR_TOP_BUFFER_PX).max(0.0);
    let max_value = series.max_value();

    series
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = if max_value > 0.0 {
                value / max_value * tallest + MIN_BAR_HEIGHT_PX
            } else {
                MIN_BAR_HEIGHT_PX
            };
            BarFrame {
                index,
                x_left: layout.bar_left(index),
                width: layout.bar_width,
                y_top: content_height - height,
                height,
            }
        })
        .collect()
}
