use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use simple_vec::SimpleVec;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("growing", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVec::new();

                for i in 0..size {
                    black_box(vec.push(i as u64).unwrap());
                }

                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVec::with_capacity(size).unwrap();

                for i in 0..size {
                    black_box(vec.push(i as u64).unwrap());
                }

                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            let mut vec = SimpleVec::new();

            // Pre-populate the vector
            for i in 0..size {
                vec.push(i as u64).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(vec.at(i).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", size),
            size,
            |b, &size| {
                let mut vec = SimpleVec::new();

                // Pre-populate the vector
                for i in 0..size {
                    vec.push(i as u64).unwrap();
                }

                b.iter(|| {
                    for value in black_box(&vec) {
                        black_box(value);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_stack_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("push_pop_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = SimpleVec::new();

                    for i in 0..size {
                        black_box(vec.push(i as u64).unwrap());
                    }

                    for _ in 0..size {
                        black_box(vec.pop());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_positional_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("insert_erase_front", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = SimpleVec::new();

                    for i in 0..size {
                        black_box(vec.insert(0, i as u64).unwrap());
                    }

                    while !vec.is_empty() {
                        black_box(vec.erase(0).unwrap());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("try_clone", size), size, |b, &size| {
            let vec = SimpleVec::<u64>::with_len(size).unwrap();

            b.iter(|| black_box(vec.try_clone().unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_stack_operations,
    bench_positional_edits,
    bench_clone
);
criterion_main!(benches);
