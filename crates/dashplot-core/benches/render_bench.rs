use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashplot_core::{svg, Sample, ScatterPlot, Theme};

fn build_scatter(n: usize) -> ScatterPlot {
    let data = (0..n)
        .map(|i| {
            let x = i as f64 * 0.01;
            Sample::new(x, 3.0 * x + (i as f64 * 0.37).sin() * 5.0)
        })
        .collect();
    ScatterPlot::new(data).with_labels("X", "Y").with_trend_line(true)
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::light();
    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let chart = build_scatter(n);
            b.iter(|| {
                let scene = chart.render(800, 500, &theme);
                black_box(svg::to_string(&scene));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
