// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `bolts_state`: writes, toggles and document import.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use bolts_state::{
    ElementId, ElementRepository, MemoryDocument, Scope, State, StateStore, StateValue, Toggle,
};

/// A document with `count` elements, each carrying two state attributes.
fn populated_document(count: u32) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let root = doc.root_id();
    doc.set_attribute(&root, "data-bolts-state-theme", "dark")
        .unwrap();
    for i in 0..count {
        let el = doc.create_element("div");
        doc.set_attribute(&el, "class", "card").unwrap();
        doc.set_attribute(&el, "data-bolts-state-open", "").unwrap();
        doc.set_attribute(&el, "data-bolts-state-index", &i.to_string())
            .unwrap();
    }
    doc
}

fn bench_store(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: StateValue={} Scope<ElementId>={} StateStore<ElementId>={}",
            size_of::<StateValue>(),
            size_of::<Scope<ElementId>>(),
            size_of::<StateStore<ElementId>>(),
        );
    });

    let mut group = c.benchmark_group("state/store");

    group.bench_function("insert_global", |b| {
        b.iter_batched(
            StateStore::<ElementId>::new,
            |mut store| {
                for key in ["a", "b", "c", "d", "e", "f"] {
                    store.insert(key, StateValue::TRUE, &Scope::Global);
                }
                black_box(store)
            },
            BatchSize::SmallInput,
        )
    });

    let mut store: StateStore<ElementId> = StateStore::new();
    for key in ["detect-hover", "resizing", "theme", "menu-open"] {
        store.insert(key, StateValue::TRUE, &Scope::Global);
    }
    group.bench_function("get_global_hit", |b| {
        b.iter(|| black_box(store.get("theme", &Scope::Global)))
    });
    group.bench_function("get_global_miss", |b| {
        b.iter(|| black_box(store.get("nope", &Scope::Global)))
    });

    group.finish();
}

fn bench_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("state/mirrored");

    group.bench_function("set_global", |b| {
        let mut state = State::new(MemoryDocument::new());
        b.iter(|| {
            state.set("theme", black_box("dark"), &Scope::Global).unwrap();
        })
    });

    group.bench_function("toggle_flag", |b| {
        let mut state = State::new(MemoryDocument::new());
        b.iter(|| {
            state
                .toggle("menu-open", &Toggle::Flag, &Scope::Global)
                .unwrap();
        })
    });

    group.bench_function("toggle_cycle/3", |b| {
        let mut state = State::new(MemoryDocument::new());
        let sizes = Toggle::cycle(["s", "m", "l"]).unwrap();
        b.iter(|| {
            state.toggle("size", &sizes, &Scope::Global).unwrap();
        })
    });

    for count in [16_u32, 256] {
        group.bench_function(BenchmarkId::new("import_from_dom", count), |b| {
            b.iter_batched(
                || State::new(populated_document(count)),
                |mut state| black_box(state.import_from_dom()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_store, bench_state);
criterion_main!(benches);
