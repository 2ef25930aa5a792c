use serde::{Deserialize, Serialize};

/// Pixel size of the visible graph area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Horizontal screen position where the scroll offset is anchored.
    ///
    /// Content is laid out starting at the middle of the viewport so the first
    /// and last bars can both be scrolled under the center line.
    #[must_use]
    pub fn anchor_x(self) -> f64 {
        f64::from(self.width) / 2.0
    }
}
