use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frieze_core::{Rect, RecordingSurface};
use frieze_paint::{
    brace_curves, flatten, scallop_curves, BezierRenderer, CubicBezier, CurlyBraceOptions,
    ScallopOptions,
};

fn bench_flatten(c: &mut Criterion) {
    let small = CubicBezier::from_points([(0.0, 0.0), (10.0, 20.0), (30.0, 20.0), (40.0, 0.0)]);
    let large = CubicBezier::from_points([
        (0.0, 0.0),
        (800.0, 1200.0),
        (1600.0, -600.0),
        (2400.0, 400.0),
    ]);

    c.bench_function("flatten_small_arc", |b| {
        b.iter(|| {
            let mut count = 0usize;
            flatten(black_box(&small), |_, _| count += 1).ok();
            count
        })
    });

    c.bench_function("flatten_large_s_curve", |b| {
        b.iter(|| {
            let mut count = 0usize;
            flatten(black_box(&large), |_, _| count += 1).ok();
            count
        })
    });
}

fn bench_border_curves(c: &mut Criterion) {
    let bounds = Rect::new(0, 0, 640, 480);
    let brace = brace_curves(bounds, &CurlyBraceOptions::default());
    let scallop = scallop_curves(bounds, &ScallopOptions::default());

    c.bench_function("draw_brace_curves", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            BezierRenderer::draw_all(&mut surface, black_box(&brace)).ok();
            surface.commands().len()
        })
    });

    c.bench_function("draw_scallop_curves", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            BezierRenderer::draw_all(&mut surface, black_box(&scallop)).ok();
            surface.commands().len()
        })
    });
}

criterion_group!(benches, bench_flatten, bench_border_curves);
criterion_main!(benches);
