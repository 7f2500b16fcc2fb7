// benches/listing_table.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use turin_watch::data::{ListingTable, SortKey};
use turin_watch::store::{Dataset, Listing};

fn big_history(n: usize) -> Vec<Listing> {
    let base = Dataset::sample().history_listings;
    (0..n)
        .map(|i| {
            let mut l = base[i % base.len()].clone();
            l.title = format!("{} #{i}", l.title);
            l.price += (i % 97) as i32;
            l
        })
        .collect()
}

fn bench_filter_sort(c: &mut Criterion) {
    let listings = big_history(5_000);

    c.bench_function("table_new_5k", |b| {
        b.iter(|| ListingTable::new(black_box(&listings)))
    });

    let mut table = ListingTable::new(&listings);
    c.bench_function("filter_5k", |b| {
        b.iter(|| table.filter(black_box("crocetta")))
    });

    let mut table = ListingTable::new(&listings);
    c.bench_function("sort_location_5k", |b| {
        b.iter(|| {
            table.sort(SortKey::Price);
            table.sort(black_box(SortKey::Location));
        })
    });
}

criterion_group!(benches, bench_filter_sort);
criterion_main!(benches);
