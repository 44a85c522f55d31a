//! Scanner and matcher benchmarks.
//!
//! Both run in const context in production embeddings; the runtime numbers
//! here track the cost of the same code paths for tooling that scans
//! formats dynamically (the harness).

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tsprintf_core::canon::{ArgumentDescriptor, Pointee, Scalar};
use tsprintf_core::matcher::check;
use tsprintf_core::scanner::scan;

fn bench_scan_formats(c: &mut Criterion) {
    let formats: &[(&str, &str)] = &[
        ("plain", "no conversions at all, just text"),
        ("short", "%s:%d: %s"),
        ("mixed", "%c %s %lld %zu %f %p %n"),
        ("dense", "%d%u%x%o%c%s%p%f%e%g%n%i"),
    ];

    let mut group = c.benchmark_group("scan");
    for &(name, format) in formats {
        group.throughput(Throughput::Bytes(format.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &format, |b, &fmt| {
            b.iter(|| black_box(scan(black_box(fmt))));
        });
    }
    group.finish();
}

fn bench_check_call_site(c: &mut Criterion) {
    let stream = scan("%s:%d: warning: %s (%zu bytes)\n");
    let args = [
        ArgumentDescriptor::Pointer {
            pointee: Pointee::Scalar(Scalar::Char),
            const_pointee: true,
        },
        ArgumentDescriptor::Value(Scalar::Int),
        ArgumentDescriptor::Pointer {
            pointee: Pointee::Scalar(Scalar::Char),
            const_pointee: true,
        },
        ArgumentDescriptor::Value(Scalar::Size),
    ];

    c.bench_function("check_clean_site", |b| {
        b.iter(|| black_box(check(black_box(stream), black_box(&args))));
    });
}

fn bench_scan_and_check(c: &mut Criterion) {
    let args = [
        ArgumentDescriptor::Pointer {
            pointee: Pointee::Scalar(Scalar::Char),
            const_pointee: true,
        },
        ArgumentDescriptor::Value(Scalar::LongLong),
    ];

    c.bench_function("scan_and_check", |b| {
        b.iter(|| {
            let stream = scan(black_box("%s took %lld ns\n"));
            black_box(check(stream, black_box(&args)))
        });
    });
}

criterion_group!(
    benches,
    bench_scan_formats,
    bench_check_call_site,
    bench_scan_and_check
);
criterion_main!(benches);
