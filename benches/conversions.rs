use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stringcase::{tokenize, Case};

const INPUTS: [(&str, &str); 3] = [
    ("short", "FooBarBaz"),
    ("acronyms", "parseHTTPResponse_fromXMLServer2Client"),
    (
        "sentence",
        "The quick brown fox jumps over the lazy dog, then naps under the old oak tree",
    ),
];

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| tokenize(black_box(input)))
        });
    }
    group.finish();
}

fn bench_cases(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for case in Case::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(case), INPUTS[1].1, |b, input| {
            b.iter(|| case.apply(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_cases);
criterion_main!(benches);
