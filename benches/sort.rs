use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hamon::algo::{nth_element, partial_sort, radix_sort};

fn pseudo_random(count: usize, mut state: u64) -> Vec<u64> {
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn bench_radix_sort(c: &mut Criterion) {
    let data = pseudo_random(100_000, 42);
    c.bench_function("radix_sort_100k_u64", |bencher| {
        bencher.iter(|| {
            let mut copy = data.clone();
            radix_sort(black_box(&mut copy));
            black_box(copy)
        });
    });
    c.bench_function("std_sort_unstable_100k_u64", |bencher| {
        bencher.iter(|| {
            let mut copy = data.clone();
            copy.sort_unstable();
            black_box(copy)
        });
    });
}

fn bench_nth_element(c: &mut Criterion) {
    let data = pseudo_random(100_000, 99);
    c.bench_function("nth_element_median_100k", |bencher| {
        bencher.iter(|| {
            let mut copy = data.clone();
            nth_element(black_box(&mut copy), 50_000);
            black_box(copy[50_000])
        });
    });
}

fn bench_partial_sort(c: &mut Criterion) {
    let data = pseudo_random(100_000, 7);
    c.bench_function("partial_sort_top100_of_100k", |bencher| {
        bencher.iter(|| {
            let mut copy = data.clone();
            partial_sort(black_box(&mut copy), 100);
            black_box(copy[99])
        });
    });
}

criterion_group!(benches, bench_radix_sort, bench_nth_element, bench_partial_sort);
criterion_main!(benches);
