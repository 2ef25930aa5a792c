use std::time::Duration;

use smallvec::SmallVec;
use tracing::trace;

use crate::animation::StrokeReveal;
use crate::core::BarFrame;

/// Stroke state of one bar layer. Colors are resolved from the current
/// appearance when a frame is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStroke {
    #[default]
    Normal,
    Highlighted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayer {
    pub frame: BarFrame,
    pub stroke: BarStroke,
}

/// Owned, index-addressable collection of bar layers.
///
/// Rebuilt wholesale on every render; nothing outside the graph holds on to
/// individual layers.
#[derive(Debug, Clone, Default)]
pub struct BarLayers {
    layers: Vec<BarLayer>,
    reveal: Option<StrokeReveal>,
}

impl BarLayers {
    pub fn rebuild(&mut self, frames: Vec<BarFrame>, reveal: Option<StrokeReveal>) {
        self.layers = frames
            .into_iter()
            .map(|frame| BarLayer {
                frame,
                stroke: BarStroke::Normal,
            })
            .collect();
        self.reveal = reveal;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BarLayer> {
        self.layers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BarLayer> {
        self.layers.iter()
    }

    #[must_use]
    pub fn frames(&self) -> Vec<BarFrame> {
        self.layers.iter().map(|layer| layer.frame).collect()
    }

    /// Indices of layers currently drawn with the highlight stroke.
    #[must_use]
    pub fn highlighted(&self) -> SmallVec<[usize; 4]> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.stroke == BarStroke::Highlighted)
            .map(|(index, _)| index)
            .collect()
    }

    /// Swaps the stroke of one layer. Returns `true` when the stroke changed.
    ///
    /// Indices past the end are ignored: a reset timer may outlive the layer
    /// set it was scheduled against.
    pub fn set_stroke(&mut self, index: usize, stroke: BarStroke) -> bool {
        let Some(layer) = self.layers.get_mut(index) else {
            trace!(index, len = self.layers.len(), "ignoring stroke swap for missing bar layer");
            return false;
        };
        if layer.stroke == stroke {
            return false;
        }
        layer.stroke = stroke;
        true
    }

    #[must_use]
    pub fn reveal_progress(&self, now: Duration) -> f64 {
        self.reveal.map_or(1.0, |reveal| reveal.progress_at(now))
    }

    #[must_use]
    pub fn is_revealing(&self, now: Duration) -> bool {
        self.reveal.is_some_and(|reveal| reveal.is_running_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(index: usize) -> BarFrame {
        BarFrame {
            index,
            x_left: index as f64 * 11.0,
            width: 10.0,
            y_top: 0.0,
            height: 10.0,
        }
    }

    #[test]
    fn stroke_swaps_report_changes_and_skip_missing_layers() {
        let mut layers = BarLayers::default();
        layers.rebuild(vec![frame(0), frame(1)], None);

        assert!(layers.set_stroke(1, BarStroke::Highlighted));
        assert!(!layers.set_stroke(1, BarStroke::Highlighted));
        assert!(!layers.set_stroke(5, BarStroke::Highlighted));
        assert_eq!(layers.highlighted().as_slice(), &[1]);

        layers.rebuild(vec![frame(0)], None);
        assert!(layers.highlighted().is_empty());
    }

    #[test]
    fn reveal_progress_runs_from_zero_to_one() {
        let mut layers = BarLayers::default();
        layers.rebuild(
            vec![frame(0)],
            Some(StrokeReveal::new(Duration::ZERO, Duration::from_millis(500))),
        );
        assert_eq!(layers.reveal_progress(Duration::ZERO), 0.0);
        assert_eq!(layers.reveal_progress(Duration::from_millis(250)), 0.5);
        assert!(layers.is_revealing(Duration::from_millis(499)));
        assert_eq!(layers.reveal_progress(Duration::from_millis(500)), 1.0);
        assert!(!layers.is_revealing(Duration::from_millis(500)));
    }
}
