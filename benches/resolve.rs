// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use tripline::layout::{connectors, resolve_chains, ChainLayout};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names: `layout.resolve`, `layout.connectors`
// - Case IDs are `fixtures::Case::id()` and must not be renamed.
fn checksum_layout(layout: &ChainLayout) -> u64 {
    let mut acc = layout.max_level() as u64;
    for placement in layout.placements() {
        acc = acc.wrapping_mul(131).wrapping_add(placement.level() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(placement.source().map_or(0, |s| s.index() as u64));
    }
    acc
}

fn benches_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.resolve");
    for case in fixtures::Case::all() {
        let sequence = fixtures::fixture(case);
        group.throughput(Throughput::Elements(sequence.len() as u64));
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let layout = resolve_chains(black_box(sequence.as_slice()));
                black_box(checksum_layout(black_box(&layout)))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("layout.connectors");
    for case in fixtures::Case::all() {
        let sequence = fixtures::fixture(case);
        let layout = resolve_chains(sequence.as_slice());
        group.throughput(Throughput::Elements(sequence.len() as u64));
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(connectors(black_box(sequence.as_slice()), black_box(&layout)).len()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_resolve
}
criterion_main!(benches);
