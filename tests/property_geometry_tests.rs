use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use scroll_bar_graph::core::{BarLayout, Viewport, index_for_offset, offset_for_index};
use scroll_bar_graph::interaction::BarSelectionObserver;
use scroll_bar_graph::render::NullRenderer;
use scroll_bar_graph::{BarGraph, BarGraphConfig};

#[derive(Default)]
struct CountingObserver {
    calls: usize,
    max_index: usize,
}

impl BarSelectionObserver for CountingObserver {
    fn on_bar_selected(&mut self, _value: f64, index: usize) {
        self.calls += 1;
        self.max_index = self.max_index.max(index);
    }
}

proptest! {
    #[test]
    fn index_for_offset_stays_in_range(
        offset in -1_000_000.0f64..1_000_000.0,
        bar_width in 1.0f64..100.0,
        count in 1usize..500
    ) {
        let index = index_for_offset(offset, bar_width, count).expect("non-empty");
        prop_assert!(index < count);
    }

    #[test]
    fn snap_offset_round_trips_to_same_index(
        bar_width in 1u32..64,
        count in 1usize..400,
        pick in 0.0f64..1.0
    ) {
        let bar_width = f64::from(bar_width);
        let index = ((count - 1) as f64 * pick).floor() as usize;
        let offset = offset_for_index(index, bar_width);
        prop_assert_eq!(index_for_offset(offset, bar_width, count), Some(index));
    }

    #[test]
    fn clamped_offsets_stay_inside_content(
        offset in -10_000.0f64..10_000.0,
        bar_width in 1.0f64..50.0,
        count in 0usize..200
    ) {
        let layout = BarLayout::new(bar_width, count);
        let clamped = layout.clamp_offset(offset);
        prop_assert!(clamped >= 0.0);
        prop_assert!(clamped <= layout.content_width());
    }

    #[test]
    fn every_scroll_update_notifies_with_valid_index(
        values in prop::collection::vec(0.0f64..1_000.0, 1..40),
        offsets in prop::collection::vec(-500.0f64..1_500.0, 1..30)
    ) {
        let config = BarGraphConfig::new(Viewport::new(320, 120)).without_demo();
        let mut graph = BarGraph::new(NullRenderer::default(), config).expect("graph init");
        let count = values.len();
        graph.set_data(values).expect("valid data");

        let observer = Rc::new(RefCell::new(CountingObserver::default()));
        graph.set_selection_observer(&observer);
        graph.begin_drag();
        for offset in &offsets {
            graph.scroll_to(*offset).expect("finite offset");
            let selected = graph.selected_index().expect("non-empty");
            prop_assert!(selected < count);
        }

        let observer = observer.borrow();
        prop_assert_eq!(observer.calls, offsets.len());
        prop_assert!(observer.max_index < count);
    }
}
