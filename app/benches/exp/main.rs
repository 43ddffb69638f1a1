/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use moxexp::{
    interp_expf, product_exp, product_expf, schraudolph_exp, schraudolph_expf,
    schraudolph_expf_inplace,
};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::expf", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(libm::expf(i as f32 / 100.));
            }
        })
    });

    c.bench_function("system: expf", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(f32::exp(i as f32 / 100.));
            }
        })
    });

    c.bench_function("moxexp: schraudolph 0", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(schraudolph_expf::<0>(i as f32 / 100.));
            }
        })
    });

    c.bench_function("moxexp: schraudolph 2", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(schraudolph_expf::<2>(i as f32 / 100.));
            }
        })
    });

    c.bench_function("moxexp: schraudolph 5", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(schraudolph_expf::<5>(i as f32 / 100.));
            }
        })
    });

    c.bench_function("moxexp: interp 3", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(interp_expf::<3>(i as f32 / 100.));
            }
        })
    });

    c.bench_function("moxexp: product 10", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(product_expf::<10>(i as f32 / 100.));
            }
        })
    });

    c.bench_function("moxexp: schraudolph 0 d", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(schraudolph_exp::<0>(i as f64 / 100.));
            }
        })
    });

    c.bench_function("moxexp: product 10 d", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(product_exp::<10>(i as f64 / 100.));
            }
        })
    });

    let mut rng = rand::rng();
    let template: Vec<f32> = (0..4096).map(|_| rng.random_range(-5f32..5f32)).collect();

    c.bench_function("moxexp: inplace schraudolph 2, 4096", |b| {
        b.iter_batched_ref(
            || template.clone(),
            |x| schraudolph_expf_inplace::<2>(x),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("system: expf 4096", |b| {
        b.iter_batched_ref(
            || template.clone(),
            |x| {
                for v in x.iter_mut() {
                    *v = v.exp();
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
