use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashplot_core::{fit_linear, fit_quality, Sample};

fn noisy_line(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            Sample::new(x, 0.5 * x - 3.0 + (x * 0.7).cos())
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");
    for &n in &[1_000usize, 100_000usize] {
        let data = noisy_line(n);
        group.bench_function(format!("fit_linear_{n}"), |b| {
            b.iter(|| black_box(fit_linear(black_box(&data))))
        });
        group.bench_function(format!("fit_quality_{n}"), |b| {
            b.iter(|| black_box(fit_quality(black_box(&data))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
