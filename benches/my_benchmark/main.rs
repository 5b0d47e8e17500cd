// Available modules
mod samples;
mod statistics;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use samples::bench_load_samples;
use statistics::{bench_histogram, bench_summary};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    bench_load_samples(c);
    bench_histogram(c);
    bench_summary(c);
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
