use criterion::{black_box, criterion_group, criterion_main, Criterion};
use velo_semver::{Comparator, Parser};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "0.0.0",
        "1.2.3",
        "10.20.30",
        "1.2.3-alpha.1",
        "1.2.3-rc.1.2-x",
        "1.2.3+build.no.123",
        "1.2.3-alpha.1+build.no.123",
        "18446744073709551615.0.0",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Parser::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs = [
        ("1.2.3", "1.2.4"),
        ("1.0.0-alpha", "1.0.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.0.0-9", "1.0.0-alpha"),
        ("1.2.3+build.1", "1.2.3+build.2"),
    ];
    let parsed: Vec<_> = pairs
        .iter()
        .map(|(a, b)| (Parser::parse(a).unwrap(), Parser::parse(b).unwrap()))
        .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (x, y) in &parsed {
                black_box(Comparator::compare(black_box(x), black_box(y)));
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_compare);
criterion_main!(benches);
