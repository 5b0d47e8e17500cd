use criterion::{black_box, Criterion};
use noise_histogram::loading::load_samples;
use std::fmt::Write as _;
use std::fs;

/// Deterministic ADC-like readings scattered around `center`.
pub fn generate_noise(count: usize, center: i64, spread: i64) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let offset = ((state >> 33) % (2 * spread as u64 + 1)) as i64 - spread;
            center + offset
        })
        .collect()
}

pub fn bench_load_samples(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut group = c.benchmark_group("load_samples");

    for count in [1_000, 100_000] {
        let mut contents = String::new();
        for value in generate_noise(count, 2048, 40) {
            writeln!(contents, "{}", value).unwrap();
        }

        let path = temp_dir.path().join(format!("noise-{}", count));
        fs::write(&path, contents).unwrap();

        group.bench_function(format!("{}", count), |b| {
            b.iter(|| load_samples(black_box(&path)).unwrap())
        });
    }

    group.finish();
}
