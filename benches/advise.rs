// benches/advise.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rigcheck::{
    compare::{compare, UserHardware},
    specs::parse_str,
};

const MINIMUM: &str = "OS: Windows 10 64-bit, Processor: Intel Core i5-8400 / AMD Ryzen 5 2600, \
    Memory: 8 GB RAM, Graphics: NVIDIA GeForce GTX 1060 6GB, Storage: 70 GB available space";
const RECOMMENDED: &str = "OS: Windows 11 64-bit, Processor: AMD Ryzen 7 5800X, \
    Memory: 16 GB RAM, Graphics: NVIDIA GeForce RTX 3070, Storage: 70 GB SSD";

fn bench_advise(c: &mut Criterion) {
    c.bench_function("parse_block", |b| {
        b.iter(|| {
            let p = parse_str(black_box(MINIMUM));
            black_box(p.found().count())
        })
    });

    let min = parse_str(MINIMUM);
    let rec = parse_str(RECOMMENDED);
    let user = UserHardware::new("AMD Ryzen 5 5600", "NVIDIA GeForce RTX 3060", "16");

    c.bench_function("compare", |b| {
        b.iter(|| {
            let r = compare(black_box(&user), black_box(&min), black_box(&rec));
            black_box(r.can_run_minimum)
        })
    });

    c.bench_function("parse_and_compare", |b| {
        b.iter(|| {
            let min = parse_str(black_box(MINIMUM));
            let rec = parse_str(black_box(RECOMMENDED));
            black_box(compare(&user, &min, &rec).can_run_recommended)
        })
    });
}

criterion_group!(benches, bench_advise);
criterion_main!(benches);
