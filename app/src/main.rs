/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Timing harness for the array entry points: runs each variant over a
//! large buffer for a number of trials, reports mean and standard deviation
//! and appends `label mean sigma` lines to a results file.
use moxexp::{
    Schraudolph, exp_inplace_seq, interp_exp_inplace, interp_expf_inplace, product_exp_inplace,
    product_expf_inplace, schraudolph_exp_inplace, schraudolph_expf_inplace,
};
use rand::Rng;
use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

const ARRAY_SIZE: usize = 10_000_000;
const N_TRIALS: usize = 20;

fn benchmark_function<T: Copy>(
    name: &str,
    template: &[T],
    mut f: impl FnMut(&mut [T]),
    file: &mut impl Write,
) {
    let mut x = template.to_vec();
    // warmup pass, first touch is not representative
    f(&mut x);

    let mut time = 0f64;
    let mut time2 = 0f64;
    for _ in 0..N_TRIALS {
        x.copy_from_slice(template);
        let start = Instant::now();
        f(&mut x);
        let ms = start.elapsed().as_secs_f64() * 1000.;
        time += ms;
        time2 += ms * ms;
    }

    let mean = time / N_TRIALS as f64;
    let sigma = (time2 / N_TRIALS as f64 - mean * mean).max(0.).sqrt();
    println!("{name:<25}{mean:.3} ± {sigma:.3} ms");
    writeln!(file, "{name} {mean} {sigma}").unwrap();
}

fn main() {
    let path = std::env::args().nth(1).unwrap_or("results.dat".to_string());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .unwrap();

    let mut rng = rand::rng();
    let singles: Vec<f32> = (0..ARRAY_SIZE)
        .map(|_| rng.random_range(-5f32..5f32))
        .collect();
    let doubles: Vec<f64> = singles.iter().map(|x| *x as f64).collect();

    println!("Single precision:");
    benchmark_function(
        "schraudolph 0",
        &singles,
        |x| schraudolph_expf_inplace::<0>(x),
        &mut file,
    );
    benchmark_function(
        "schraudolph 2",
        &singles,
        |x| schraudolph_expf_inplace::<2>(x),
        &mut file,
    );
    benchmark_function(
        "schraudolph 5",
        &singles,
        |x| schraudolph_expf_inplace::<5>(x),
        &mut file,
    );
    benchmark_function(
        "interp 3",
        &singles,
        |x| interp_expf_inplace::<3>(x),
        &mut file,
    );
    benchmark_function(
        "product 8",
        &singles,
        |x| product_expf_inplace::<8>(x),
        &mut file,
    );
    benchmark_function(
        "product 10",
        &singles,
        |x| product_expf_inplace::<10>(x),
        &mut file,
    );
    benchmark_function(
        "product 12",
        &singles,
        |x| product_expf_inplace::<12>(x),
        &mut file,
    );
    benchmark_function(
        "seq 0",
        &singles,
        |x| exp_inplace_seq::<f32, Schraudolph<0>>(x),
        &mut file,
    );
    benchmark_function(
        "std expf",
        &singles,
        |x| {
            for v in x.iter_mut() {
                *v = v.exp();
            }
        },
        &mut file,
    );
    benchmark_function(
        "libm expf",
        &singles,
        |x| {
            for v in x.iter_mut() {
                *v = libm::expf(*v);
            }
        },
        &mut file,
    );

    println!("\nDouble precision:");
    benchmark_function(
        "schraudolph 0 d",
        &doubles,
        |x| schraudolph_exp_inplace::<0>(x),
        &mut file,
    );
    benchmark_function(
        "schraudolph 5 d",
        &doubles,
        |x| schraudolph_exp_inplace::<5>(x),
        &mut file,
    );
    benchmark_function(
        "interp 5 d",
        &doubles,
        |x| interp_exp_inplace::<5>(x),
        &mut file,
    );
    benchmark_function(
        "product 10 d",
        &doubles,
        |x| product_exp_inplace::<10>(x),
        &mut file,
    );
    benchmark_function(
        "std exp d",
        &doubles,
        |x| {
            for v in x.iter_mut() {
                *v = v.exp();
            }
        },
        &mut file,
    );
    benchmark_function(
        "libm exp d",
        &doubles,
        |x| {
            for v in x.iter_mut() {
                *v = libm::exp(*v);
            }
        },
        &mut file,
    );
}
