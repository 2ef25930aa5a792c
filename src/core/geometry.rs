//! Mapping between bar index, scroll offset and content geometry.
//!
//! Every bar occupies `bar_width + BAR_SPACING_PX` horizontal pixels. Offsets
//! are measured in content space: offset `0` puts the left edge of bar `0`
//! under the viewport anchor, offset `content_width` puts the right end of the
//! last slot there.

use serde::{Deserialize, Serialize};

/// Fixed gap after every bar.
pub const BAR_SPACING_PX: f64 = 1.0;

/// Default bar width used by a freshly created graph.
pub const DEFAULT_BAR_WIDTH_PX: u32 = 10;

/// Width of one bar slot (bar plus trailing gap).
#[must_use]
pub fn bar_pitch(bar_width: f64) -> f64 {
    bar_width + BAR_SPACING_PX
}

/// Resolves the bar under `offset`.
///
/// The slot is `floor(offset / pitch)` clamped into `[0, count - 1]`, so any
/// finite or infinite offset lands on a valid bar. `NaN` resolves to bar `0`.
/// Returns `None` when there are no bars.
#[must_use]
pub fn index_for_offset(offset: f64, bar_width: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = (count - 1) as f64;
    let slot = (offset / bar_pitch(bar_width)).floor();
    if slot.is_nan() {
        return Some(0);
    }
    Some(slot.clamp(0.0, last) as usize)
}

/// Offset that centers the viewport anchor on bar `index`.
///
/// This is where a snap lands. It maps back to the same index through
/// [`index_for_offset`], but not to whatever offset the user released at.
#[must_use]
pub fn offset_for_index(index: usize, bar_width: f64) -> f64 {
    index as f64 * bar_pitch(bar_width) + bar_width / 2.0
}

/// Total scrollable width spanned by `count` bars including spacing.
#[must_use]
pub fn content_width(count: usize, bar_width: f64) -> f64 {
    let count = count as f64;
    count * bar_width + count * BAR_SPACING_PX
}

/// Bar width and count bundled together.
///
/// Recomputed whenever the data or the width changes; all offset/index math of
/// the graph goes through this value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub bar_width: f64,
    pub bar_count: usize,
}

impl BarLayout {
    #[must_use]
    pub fn new(bar_width: f64, bar_count: usize) -> Self {
        Self {
            bar_width,
            bar_count,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bar_count == 0
    }

    #[must_use]
    pub fn pitch(self) -> f64 {
        bar_pitch(self.bar_width)
    }

    #[must_use]
    pub fn content_width(self) -> f64 {
        content_width(self.bar_count, self.bar_width)
    }

    #[must_use]
    pub fn index_for_offset(self, offset: f64) -> Option<usize> {
        index_for_offset(offset, self.bar_width, self.bar_count)
    }

    #[must_use]
    pub fn offset_for_index(self, index: usize) -> f64 {
        debug_assert!(
            index < self.bar_count,
            "bar index {index} out of range for {} bars",
            self.bar_count
        );
        offset_for_index(index, self.bar_width)
    }

    /// Left edge of bar `index` in content space.
    #[must_use]
    pub fn bar_left(self, index: usize) -> f64 {
        index as f64 * self.pitch()
    }

    /// Clamps an offset into `[0, content_width]`.
    #[must_use]
    pub fn clamp_offset(self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.content_width())
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        Self::new(f64::from(DEFAULT_BAR_WIDTH_PX), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_between_slots_floors_to_left_bar() {
        assert_eq!(index_for_offset(10.99, 10.0, 3), Some(0));
        assert_eq!(index_for_offset(11.0, 10.0, 3), Some(1));
    }

    #[test]
    fn out_of_range_offsets_clamp() {
        assert_eq!(index_for_offset(-50.0, 10.0, 4), Some(0));
        assert_eq!(index_for_offset(1e9, 10.0, 4), Some(3));
        assert_eq!(index_for_offset(f64::INFINITY, 10.0, 4), Some(3));
        assert_eq!(index_for_offset(f64::NAN, 10.0, 4), Some(0));
    }

    #[test]
    fn empty_layout_has_no_selection() {
        let layout = BarLayout::new(10.0, 0);
        assert!(layout.is_empty());
        assert_eq!(layout.index_for_offset(0.0), None);
        assert_eq!(layout.content_width(), 0.0);
        assert_eq!(layout.clamp_offset(42.0), 0.0);
    }
}
