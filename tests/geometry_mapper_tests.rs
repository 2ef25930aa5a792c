use scroll_bar_graph::core::{
    BAR_SPACING_PX, BarLayout, content_width, index_for_offset, offset_for_index,
};

#[test]
fn three_bar_series_maps_offsets_to_expected_bars() {
    let layout = BarLayout::new(10.0, 3);

    assert_eq!(layout.content_width(), 33.0);
    assert_eq!(index_for_offset(0.0, 10.0, 3), Some(0));
    assert_eq!(index_for_offset(21.0, 10.0, 3), Some(1));
    assert_eq!(layout.index_for_offset(33.0), Some(2));
}

#[test]
fn snap_offset_lands_on_bar_center() {
    assert_eq!(offset_for_index(0, 10.0), 5.0);
    assert_eq!(offset_for_index(3, 10.0), 38.0);
    assert_eq!(offset_for_index(2, 4.0), 12.0);
}

#[test]
fn snap_offset_round_trips_index_but_not_offset() {
    let released_at = 24.0;
    let index = index_for_offset(released_at, 10.0, 5).expect("bar under offset");
    let snapped = offset_for_index(index, 10.0);

    assert_eq!(index, 2);
    assert_eq!(snapped, 27.0);
    assert_ne!(snapped, released_at);
    assert_eq!(index_for_offset(snapped, 10.0, 5), Some(index));
}

#[test]
fn empty_series_yields_no_selection() {
    assert_eq!(index_for_offset(0.0, 10.0, 0), None);
    assert_eq!(index_for_offset(500.0, 10.0, 0), None);
    assert_eq!(content_width(0, 10.0), 0.0);
}

#[test]
fn content_width_counts_one_spacing_per_bar() {
    assert_eq!(BAR_SPACING_PX, 1.0);
    assert_eq!(content_width(4, 10.0), 44.0);
    assert_eq!(content_width(3, 20.0), 63.0);
}

#[test]
fn clamp_offset_keeps_scroll_inside_content() {
    let layout = BarLayout::new(10.0, 4);
    assert_eq!(layout.clamp_offset(-1.0), 0.0);
    assert_eq!(layout.clamp_offset(50.0), 44.0);
    assert_eq!(layout.clamp_offset(12.5), 12.5);
}
