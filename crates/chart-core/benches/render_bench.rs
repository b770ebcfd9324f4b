use chart_core::{Chart, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_family(curves: usize, points: usize) -> Chart {
    let mut ch = Chart::new();
    for c in 0..curves {
        let r = 0.9 + 0.05 * c as f64;
        let data = (0..points)
            .map(|i| {
                let x = 0.4 * i as f64 / (points - 1) as f64;
                (x, (1.0 - x) / (1.0 - r * x))
            })
            .collect();
        ch.add_series(Series::line(data));
    }
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &dpi in &[100.0f32, 300.0] {
        group.bench_function(format!("family_5x200_{dpi}dpi"), |b| {
            let ch = build_family(5, 200);
            let mut opts = RenderOptions::for_figure(6.4, 4.8, dpi);
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = ch.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
