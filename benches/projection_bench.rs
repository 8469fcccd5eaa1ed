use criterion::{Criterion, criterion_group, criterion_main};
use dashboard_charts::api::DashboardRenderer;
use dashboard_charts::core::{ChartSeries, Viewport};
use dashboard_charts::render::NullBackend;
use std::hint::black_box;

fn generated_series(len: usize) -> ChartSeries {
    ChartSeries::new(
        (0..len).map(|i| format!("label-{i}")),
        (0..len).map(|i| ((i * 37) % 151) as f64).collect(),
    )
}

fn bench_line_projection_1k(c: &mut Criterion) {
    let renderer = DashboardRenderer::new(NullBackend::default());
    let config = renderer.user_activity_config(&generated_series(1_000));
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("line_projection_1k", |b| {
        b.iter(|| {
            let _ = black_box(&config)
                .project(black_box(viewport))
                .expect("projection should succeed");
        })
    });
}

fn bench_bar_projection_1k(c: &mut Criterion) {
    let renderer = DashboardRenderer::new(NullBackend::default());
    let config = renderer.popular_courses_config(&generated_series(1_000));
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("bar_projection_1k", |b| {
        b.iter(|| {
            let _ = black_box(&config)
                .project(black_box(viewport))
                .expect("projection should succeed");
        })
    });
}

criterion_group!(benches, bench_line_projection_1k, bench_bar_projection_1k);
criterion_main!(benches);
