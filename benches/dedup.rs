use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kindle_notes::dedup::deduplicate;
use kindle_notes::models::{Entry, EntryKind};

/// Generate N highlight entries where every third overlaps its predecessor,
/// mimicking passages that were re-highlighted with adjusted boundaries
fn generate_entries(num_entries: usize) -> Vec<Entry> {
    let base = NaiveDate::from_ymd_opt(2017, 8, 14).unwrap().and_hms_opt(0, 0, 0).unwrap();

    (0..num_entries)
        .map(|i| {
            let start = (i as u32 / 3) * 40 + (i as u32 % 3) * 5 + 1;
            Entry {
                content: format!("Synthetic highlight {}", i / 3),
                added: base + chrono::Duration::seconds(i as i64),
                kind: EntryKind::Highlight { start, end: start + 12 },
            }
        })
        .collect()
}

fn bench_deduplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("deduplicate");

    for size in [100, 1_000, 5_000].iter() {
        let entries = generate_entries(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| deduplicate(black_box(entries.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_deduplicate);
criterion_main!(benches);
