use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use scroll_bar_graph::core::Viewport;
use scroll_bar_graph::interaction::{
    BarSelectionObserver, DemoBehavior, DemoInterruptPolicy, DemoPhase, ScrollPhase,
};
use scroll_bar_graph::render::NullRenderer;
use scroll_bar_graph::{BarGraph, BarGraphConfig};

#[derive(Default)]
struct Recorder {
    calls: Vec<(f64, usize)>,
}

impl BarSelectionObserver for Recorder {
    fn on_bar_selected(&mut self, value: f64, index: usize) {
        self.calls.push((value, index));
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn demo_graph(
    values: Vec<f64>,
    interrupt: DemoInterruptPolicy,
) -> (BarGraph<NullRenderer>, Rc<RefCell<Recorder>>) {
    let config = BarGraphConfig::new(Viewport::new(200, 110)).with_demo(DemoBehavior {
        enabled: true,
        interrupt,
    });
    let mut graph = BarGraph::new(NullRenderer::default(), config).expect("graph init");
    graph.set_data(values).expect("set data");
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    graph.set_selection_observer(&recorder);
    (graph, recorder)
}

#[test]
fn demo_walks_two_bars_left_and_back_once() {
    let (mut graph, recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::RunToCompletion,
    );

    graph.render(false).expect("render");
    assert_eq!(graph.demo_phase(), DemoPhase::Ready);

    graph.advance(ms(200)).expect("initial snap");
    assert!(graph.is_demo_active());
    assert_eq!(
        graph.demo_script().map(|script| script.stops()),
        Some([4, 3, 2, 3, 4])
    );

    // First leg waits 500 ms before moving.
    graph.advance(ms(499)).expect("start delay");
    assert_eq!(graph.scroll_offset(), 49.0);

    graph.advance(Duration::from_secs(3)).expect("play demo");
    assert_eq!(graph.demo_phase(), DemoPhase::Finished);
    assert!(!graph.is_demo_active());
    assert_eq!(graph.scroll_offset(), 49.0);
    assert_eq!(graph.scroll_phase(), ScrollPhase::Idle);
    assert!(graph.highlighted_bars().is_empty());
    assert_eq!(
        recorder.borrow().calls,
        vec![(5.0, 4), (4.0, 3), (3.0, 2), (4.0, 3), (5.0, 4)]
    );

    graph.snap(true);
    graph.advance(Duration::from_secs(2)).expect("second snap");
    assert_eq!(graph.demo_phase(), DemoPhase::Finished);
    assert_eq!(recorder.borrow().calls.len(), 6);
}

#[test]
fn demo_legs_take_four_hundred_ms_each() {
    let (mut graph, recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::RunToCompletion,
    );
    graph.render(false).expect("render");
    graph.advance(ms(200)).expect("initial snap");

    // Leg one runs from 700 ms to 1100 ms.
    graph.advance(ms(899)).expect("advance");
    assert_eq!(recorder.borrow().calls, vec![(5.0, 4)]);
    graph.advance(ms(1)).expect("advance");
    assert_eq!(recorder.borrow().calls.last(), Some(&(4.0, 3)));
    assert_eq!(graph.scroll_offset(), 38.0);

    graph.advance(ms(400)).expect("advance");
    assert_eq!(recorder.borrow().calls.last(), Some(&(3.0, 2)));
    assert_eq!(graph.scroll_offset(), 27.0);
}

#[test]
fn demo_mirrors_right_near_left_edge() {
    let (mut graph, _recorder) = demo_graph(
        vec![4.0, 3.0, 2.0, 1.0],
        DemoInterruptPolicy::RunToCompletion,
    );
    graph.scroll_to(5.0).expect("scroll to first bar");
    graph.render(false).expect("render");
    graph.advance(ms(200)).expect("initial snap");

    assert_eq!(
        graph.demo_script().map(|script| script.stops()),
        Some([0, 1, 2, 1, 0])
    );
    graph.advance(Duration::from_secs(3)).expect("play demo");
    assert_eq!(graph.scroll_offset(), 5.0);
    assert_eq!(graph.demo_phase(), DemoPhase::Finished);
}

#[test]
fn short_series_never_plays_demo() {
    let (mut graph, recorder) =
        demo_graph(vec![1.0, 2.0, 3.0], DemoInterruptPolicy::RunToCompletion);
    graph.render(false).expect("render");
    graph.advance(Duration::from_secs(3)).expect("advance");

    assert_eq!(graph.demo_phase(), DemoPhase::Ready);
    assert_eq!(recorder.borrow().calls, vec![(3.0, 2)]);
    assert_eq!(graph.scroll_offset(), 27.0);
}

#[test]
fn disabled_demo_stays_ready() {
    let config = BarGraphConfig::new(Viewport::new(200, 110)).without_demo();
    let mut graph = BarGraph::new(NullRenderer::default(), config).expect("graph init");
    graph.set_data(vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("set data");
    graph.render(false).expect("render");
    graph.advance(Duration::from_secs(3)).expect("advance");

    assert_eq!(graph.demo_phase(), DemoPhase::Ready);
    assert_eq!(graph.scroll_offset(), 49.0);
}

#[test]
fn drag_does_not_stop_demo_by_default() {
    let (mut graph, _recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::RunToCompletion,
    );
    graph.render(false).expect("render");
    graph.advance(ms(800)).expect("into first leg");

    graph.begin_drag();
    graph.scroll_to(0.0).expect("drag");
    graph.end_drag(false).expect("release");
    assert!(graph.is_demo_active());

    graph.advance(Duration::from_secs(3)).expect("finish demo");
    assert_eq!(graph.demo_phase(), DemoPhase::Finished);
    assert_eq!(graph.scroll_offset(), 49.0);
}

#[test]
fn cancel_on_drag_stops_demo_for_good() {
    let (mut graph, _recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::CancelOnDrag,
    );
    graph.render(false).expect("render");
    graph.advance(ms(800)).expect("into first leg");

    graph.begin_drag();
    assert_eq!(graph.demo_phase(), DemoPhase::Cancelled);
    assert!(!graph.is_settling());
    assert_eq!(graph.scroll_phase(), ScrollPhase::Dragging);

    graph.end_drag(false).expect("release");
    graph.advance(ms(200)).expect("snap");
    graph.snap(true);
    graph.advance(Duration::from_secs(3)).expect("advance");
    assert_eq!(graph.demo_phase(), DemoPhase::Cancelled);
    assert!(!graph.is_animating());
}

#[test]
fn cancel_demo_is_idempotent() {
    let (mut graph, _recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::RunToCompletion,
    );
    assert!(!graph.cancel_demo());

    graph.render(false).expect("render");
    graph.advance(ms(300)).expect("demo armed");
    assert!(graph.cancel_demo());
    assert!(!graph.cancel_demo());
    assert!(!graph.is_settling());
}

#[test]
fn demo_start_adds_no_callback_of_its_own() {
    let (mut graph, recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::RunToCompletion,
    );
    graph.render(false).expect("render");
    graph.advance(ms(200)).expect("initial snap");

    assert!(graph.is_demo_active());
    assert_eq!(recorder.borrow().calls, vec![(5.0, 4)]);

    graph.advance(Duration::from_secs(4)).expect("play demo");
    let indices: Vec<usize> = recorder.borrow().calls.iter().map(|call| call.1).collect();
    assert_eq!(indices, vec![4, 3, 2, 3, 4]);
}

#[test]
fn interrupted_trigger_snap_keeps_demo_armed() {
    let (mut graph, recorder) = demo_graph(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        DemoInterruptPolicy::RunToCompletion,
    );
    graph.render(false).expect("render");
    graph.advance(ms(100)).expect("half way through snap");

    graph.begin_drag();
    graph.end_drag(false).expect("release");
    graph.advance(Duration::from_secs(1)).expect("settle");
    assert_eq!(graph.demo_phase(), DemoPhase::Ready);

    graph.render(false).expect("render again");
    graph.advance(Duration::from_secs(4)).expect("play demo");
    assert_eq!(graph.demo_phase(), DemoPhase::Finished);
    assert_eq!(recorder.borrow().calls.last(), Some(&(5.0, 4)));
}
