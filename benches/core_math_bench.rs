use criterion::{Criterion, criterion_group, criterion_main};
use scroll_bar_graph::core::{BarLayout, DataSeries, Viewport, project_bar_frames};
use scroll_bar_graph::render::NullRenderer;
use scroll_bar_graph::{BarGraph, BarGraphConfig};
use std::hint::black_box;
use std::time::Duration;

fn generated_values(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.05).sin() * 40.0
        })
        .collect()
}

fn bench_offset_index_round_trip(c: &mut Criterion) {
    let layout = BarLayout::new(10.0, 10_000);

    c.bench_function("offset_index_round_trip", |b| {
        b.iter(|| {
            let index = layout
                .index_for_offset(black_box(54_321.5))
                .expect("non-empty layout");
            let _ = layout.offset_for_index(index);
        })
    });
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let series = DataSeries::new(generated_values(10_000)).expect("valid generated series");
    let layout = BarLayout::new(10.0, series.len());

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let _ = project_bar_frames(black_box(&series), black_box(layout), black_box(1080.0));
        })
    });
}

fn bench_drag_sweep_2k(c: &mut Criterion) {
    let config = BarGraphConfig::new(Viewport::new(1600, 900)).without_demo();
    let mut graph = BarGraph::new(NullRenderer::default(), config).expect("graph init");
    graph
        .set_data(generated_values(2_000))
        .expect("valid generated series");
    graph.render(false).expect("render");

    c.bench_function("drag_sweep_2k", |b| {
        b.iter(|| {
            graph.begin_drag();
            for step in 0..200 {
                graph
                    .scroll_to(black_box(f64::from(step) * 110.0))
                    .expect("finite offset");
            }
            graph.end_drag(false).expect("release");
            graph
                .advance(Duration::from_millis(300))
                .expect("settle");
        })
    });
}

fn bench_graph_snapshot_json_2k(c: &mut Criterion) {
    let config = BarGraphConfig::new(Viewport::new(1600, 900)).without_demo();
    let mut graph = BarGraph::new(NullRenderer::default(), config).expect("graph init");
    graph
        .set_data(generated_values(2_000))
        .expect("valid generated series");
    graph.render(false).expect("render");

    c.bench_function("graph_snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = graph
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_offset_index_round_trip,
    bench_bar_projection_10k,
    bench_drag_sweep_2k,
    bench_graph_snapshot_json_2k
);
criterion_main!(benches);
