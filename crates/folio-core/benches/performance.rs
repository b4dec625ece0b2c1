// Rust guideline compliant 2026-10-18

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_core::ContentStore;
use serde_json::{json, Value};

fn build_content(count: usize) -> Value {
    let types = ["talk", "blog", "whitepaper", "article"];
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "id": format!("item-{i}"),
                    "title": format!("Item {i}"),
                    "type": types[i % types.len()],
                    "publicationDate": format!("20{:02}-{:02}-{:02}", 10 + i % 15, 1 + i % 12, 1 + i % 28),
                    "description": "Benchmark content item",
                    "externalLink": "https://example.com/item",
                })
            })
            .collect(),
    )
}

fn bench_set_content(c: &mut Criterion) {
    let content = build_content(5_000);
    c.bench_function("set_content_5000", |b| {
        b.iter(|| {
            let store = ContentStore::in_memory();
            store
                .set_content(black_box(content.clone()))
                .expect("benchmark content should validate");
        })
    });
}

fn bench_filter_switch(c: &mut Criterion) {
    let store = ContentStore::in_memory();
    store
        .set_content(build_content(5_000))
        .expect("benchmark content should validate");
    let filters = ["all", "talk", "blog", "whitepaper", "article"];
    let mut next = 0;
    c.bench_function("set_current_filter_5000", |b| {
        b.iter(|| {
            store.set_current_filter(black_box(filters[next % filters.len()]));
            next += 1;
        })
    });
}

fn bench_paginate(c: &mut Criterion) {
    let store = ContentStore::in_memory();
    store
        .set_content(build_content(5_000))
        .expect("benchmark content should validate");
    c.bench_function("paginate_5000", |b| {
        b.iter(|| {
            for page in 1..=store.total_pages() as i64 {
                store.set_current_page(page);
                black_box(store.paginated_content());
            }
        })
    });
}

criterion_group!(benches, bench_set_content, bench_filter_switch, bench_paginate);
criterion_main!(benches);
