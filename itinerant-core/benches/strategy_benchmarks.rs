//! Criterion benchmarks comparing destination ordering strategies.
//!
//! Each `(stops, tickets)` pair names a random walk over that many
//! three-letter codes. Every strategy reconstructs the same inputs, and the
//! `parse` group measures reading the ticket text alone.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package itinerant-core
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use itinerant_core::tickets::parse_tickets;
use itinerant_core::{ItineraryReconstructor, ReconstructorConfig, Strategy};


use bench_support::{BENCHMARK_SEED, ORIGIN, generate_walk, render_ticket_file};

/// `(stops, tickets)` pairs, from a two-stop shuttle up to every code.
const INPUT_SIZES: &[(usize, usize)] = &[
    (2, 2),
    (2, 300),
    (17, 300),
    (150, 300),
    (300, 300),
    (2, 17_576),
    (132, 17_576),
    (8_788, 17_576),
    (17_576, 17_576),
];

fn input_label(stops: usize, tickets: usize) -> String {
    format!("{stops}.{tickets}")
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for &(stops, tickets) in INPUT_SIZES {
        let edges = generate_walk(stops, tickets, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(u64::try_from(tickets).unwrap_or(u64::MAX)));

        for strategy in Strategy::ALL {
            let reconstructor = ItineraryReconstructor::with_config(ReconstructorConfig {
                strategy,
                ..ReconstructorConfig::default()
            });
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), input_label(stops, tickets)),
                &edges,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |batch| reconstructor.reconstruct(ORIGIN.to_owned(), batch),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &(stops, tickets) in INPUT_SIZES {
        let text = render_ticket_file(&generate_walk(stops, tickets, BENCHMARK_SEED));
        group.throughput(Throughput::Bytes(u64::try_from(text.len()).unwrap_or(u64::MAX)));
        group.bench_with_input(
            BenchmarkId::from_parameter(input_label(stops, tickets)),
            &text,
            |b, input| b.iter(|| parse_tickets(input)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_parse);
criterion_main!(benches);
