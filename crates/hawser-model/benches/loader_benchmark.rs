// Copyright (c) 2026 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Loader and writer throughput over instances shaped like the published
//! benchmark sets. Text inputs are produced by the seeded generator, so the
//! benchmark needs no data files on disk.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hawser_model::benchmark::PUBLISHED_SETS;
use hawser_model::generator::{GeneratorConfig, InstanceGenerator};
use hawser_model::instance::Instance;
use hawser_model::loading::InstanceLoader;
use hawser_model::writing::InstanceWriter;
use std::hint::black_box;

fn benchmark_inputs() -> Vec<(String, Instance<i64>, String)> {
    PUBLISHED_SETS
        .iter()
        .map(|set| {
            let cfg = GeneratorConfig::new(
                set.num_vessels,
                set.num_berths,
                1_000, // horizon
                0.4,   // lambda_per_time
                5,     // min_handling
                60,    // max_handling
                0.1,   // forbidden_probability
                400,   // deadline_slack
                0x5EED,
            )
            .expect("valid generator config");

            let instance = InstanceGenerator::new(cfg).generate();
            let text = InstanceWriter::new()
                .to_string(&instance)
                .expect("Failed to serialize instance");

            (set.prefix(), instance, text)
        })
        .collect()
}

fn loader_benchmark(c: &mut Criterion) {
    let inputs = benchmark_inputs();
    let loader = InstanceLoader::<i64>::new();

    let mut group = c.benchmark_group("loader_benchmark");
    for (label, instance, text) in &inputs {
        group.throughput(Throughput::Elements(instance.num_vessels() as u64));
        group.bench_with_input(BenchmarkId::new("load", label), text, |b, text| {
            b.iter(|| {
                let parsed = loader
                    .from_str(black_box(text))
                    .expect("benchmark instance must load");
                black_box(parsed)
            });
        });
    }
    group.finish();
}

fn writer_benchmark(c: &mut Criterion) {
    let inputs = benchmark_inputs();
    let writer = InstanceWriter::<i64>::new();

    let mut group = c.benchmark_group("writer_benchmark");
    for (label, instance, _) in &inputs {
        group.throughput(Throughput::Elements(instance.num_vessels() as u64));
        group.bench_with_input(BenchmarkId::new("write", label), instance, |b, instance| {
            b.iter(|| {
                let text = writer
                    .to_string(black_box(instance))
                    .expect("benchmark instance must serialize");
                black_box(text)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, loader_benchmark, writer_benchmark);
criterion_main!(benches);
