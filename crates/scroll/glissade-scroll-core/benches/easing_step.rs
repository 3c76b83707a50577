use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glissade_scroll_core::Easing;

fn bench_easing(c: &mut Criterion) {
    let out_expo = Easing::OutExpo;
    let bezier = Easing::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    c.bench_function("out_expo_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..1000 {
                acc += out_expo.apply(black_box(i as f32 / 1000.0));
            }
            acc
        })
    });

    c.bench_function("cubic_bezier_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..1000 {
                acc += bezier.apply(black_box(i as f32 / 1000.0));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_easing);
criterion_main!(benches);
