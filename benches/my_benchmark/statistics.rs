use crate::samples::generate_noise;
use criterion::{black_box, Criterion};
use noise_histogram::analysis::{histogram_bin_count, Histogram, Summary};
use noise_histogram::common::SampleSet;

pub fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for spread in [4, 40, 400] {
        let samples = SampleSet::new(generate_noise(100_000, 2048, spread)).unwrap();
        let bins = histogram_bin_count(&samples);

        group.bench_function(format!("spread_{}", spread), |b| {
            b.iter(|| Histogram::from_samples(black_box(&samples), black_box(bins)).unwrap())
        });
    }

    group.finish();
}

pub fn bench_summary(c: &mut Criterion) {
    let samples = SampleSet::new(generate_noise(100_000, 2048, 40)).unwrap();

    c.bench_function("summary", |b| {
        b.iter(|| Summary::from_samples(black_box(&samples)))
    });
}
