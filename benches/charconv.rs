use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hamon::charconv::{from_chars, from_chars_f64, to_chars, to_chars_f64};

/// A mix of magnitudes: integers, mid-range reals, extremes and subnormals.
const VALUES: [f64; 8] = [
    0.1,
    123.456,
    3.141592653589793,
    1e300,
    5e-324,
    2.2250738585072014e-308,
    9007199254740992.0,
    6.02214076e23,
];

fn bench_float_to_chars(c: &mut Criterion) {
    let mut buffer = [0_u8; 64];
    c.bench_function("to_chars_f64_shortest_mixed", |bencher| {
        bencher.iter(|| {
            for &value in &VALUES {
                black_box(to_chars_f64(&mut buffer, black_box(value)).unwrap());
            }
        });
    });
}

fn bench_float_from_chars(c: &mut Criterion) {
    let inputs: Vec<String> = VALUES
        .iter()
        .map(|&value| {
            let mut buffer = [0_u8; 64];
            let len = to_chars_f64(&mut buffer, value).unwrap();
            String::from_utf8(buffer[..len].to_vec()).unwrap()
        })
        .collect();

    c.bench_function("from_chars_f64_shortest_mixed", |bencher| {
        bencher.iter(|| {
            for input in &inputs {
                black_box(from_chars_f64(black_box(input.as_bytes())).unwrap());
            }
        });
    });

    // The exact big-integer fallback path.
    let long = format!("0.{}", "123456789".repeat(40));
    c.bench_function("from_chars_f64_360_digits", |bencher| {
        bencher.iter(|| black_box(from_chars_f64(black_box(long.as_bytes())).unwrap()));
    });
}

fn bench_int_conversion(c: &mut Criterion) {
    let mut buffer = [0_u8; 64];
    c.bench_function("to_chars_u64_base10", |bencher| {
        bencher.iter(|| black_box(to_chars(&mut buffer, black_box(u64::MAX), 10).unwrap()));
    });
    c.bench_function("from_chars_u64_base10", |bencher| {
        bencher.iter(|| black_box(from_chars::<u64>(black_box(b"18446744073709551615"), 10)));
    });
}

criterion_group!(benches, bench_float_to_chars, bench_float_from_chars, bench_int_conversion);
criterion_main!(benches);
