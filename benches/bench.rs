use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const NUMS: &[f64] = &[0., -69., 123406000., 0.1234, 2.718281828459045, 1.7976931348623157e308];

fn benchmark_id(x: f64) -> BenchmarkId {
    BenchmarkId::from_parameter(ryu::Buffer::new().format(x))
}

fn ryufmt_shortest(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryufmt_shortest");

    let mut buffer = ryufmt::Buffer::new();
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| buffer.format(black_box(num)).len() );
        });
    }
    g.finish();
}

fn ryufmt_fixed(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryufmt_fixed");

    let mut buf = [0u8; ryufmt::BUFFER_LEN];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryufmt::write_fixed(black_box(num), 6, &mut buf) );
        });
    }
    g.finish();
}

fn ryufmt_scientific(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryufmt_scientific");

    let mut buf = [0u8; 32];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryufmt::write_scientific(black_box(num), 6, &mut buf) );
        });
    }
    g.finish();
}

fn ryu(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryu");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryu::Buffer::new().format_finite(black_box(num)).len() );
        });
    }
    g.finish();
}

fn std(c: &mut Criterion) {
    let mut g = c.benchmark_group("std");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{}", black_box(num)) );
        });
    }
    g.finish();
}

fn std_fixed(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_fixed");

    use std::io::Write;
    let mut buf = [0u8; 400];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{:.6}", black_box(num)) );
        });
    }
    g.finish();
}

fn std_scientific(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_scientific");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{:.6e}", black_box(num)) );
        });
    }
    g.finish();
}

criterion_group!(bench, ryufmt_shortest, ryufmt_fixed, ryufmt_scientific, ryu, std, std_fixed, std_scientific);

criterion_main!(bench);
