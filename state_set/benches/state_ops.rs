// benches/state_ops.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use state_set::StateSet;

fn create_set(capacity: usize) -> StateSet {
    let mut set = StateSet::new(capacity);
    for i in (0..capacity).step_by(3) {
        set.set_true(i, false);
    }
    set
}

fn bench_exclusive_set(c: &mut Criterion) {
    let sizes = vec![8, 64, 254];

    let mut group = c.benchmark_group("exclusive_set_true");
    for size in sizes {
        let mut set = create_set(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                set.set_true(black_box(size - 1), true);
                set.count()
            });
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let sizes = vec![8, 64, 254];

    let mut group = c.benchmark_group("queries");
    for size in sizes {
        let set = create_set(size);

        group.bench_with_input(BenchmarkId::new("count", size), &size, |b, _| {
            b.iter(|| black_box(set.count()));
        });
        group.bench_with_input(BenchmarkId::new("find_false", size), &size, |b, _| {
            b.iter(|| black_box(set.find(false)));
        });
        group.bench_with_input(BenchmarkId::new("all_true_indices", size), &size, |b, _| {
            b.iter(|| black_box(set.all_true_indices()));
        });
    }
    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let sizes = vec![8, 64, 254];

    let mut group = c.benchmark_group("bulk");
    for size in sizes {
        let mut set = create_set(size);
        set.save();

        group.bench_with_input(BenchmarkId::new("invert_all", size), &size, |b, _| {
            b.iter(|| set.invert_all());
        });
        group.bench_with_input(BenchmarkId::new("save_restore", size), &size, |b, _| {
            b.iter(|| {
                set.save();
                set.restore();
            });
        });
        group.bench_with_input(BenchmarkId::new("serialize", size), &size, |b, _| {
            let mut buf = vec![0u8; set.serialized_size()];
            b.iter(|| black_box(set.serialize(&mut buf)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exclusive_set, bench_queries, bench_bulk);
criterion_main!(benches);
