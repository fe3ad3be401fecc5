use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veritas::{Version, VersionRequirement, VersionSpec, Veritas};

fn bench_parse_spec(c: &mut Criterion) {
    let specifications = [
        "*",
        "1",
        "^1.2",
        "~1.2.3",
        "=1.2.3-alpha.1",
        ">=1.2.3-rc.1+build.5",
        "<2.*",
        "1.2.3-*+*",
    ];

    c.bench_function("parse_spec", |b| {
        b.iter(|| {
            for specification in specifications {
                black_box(VersionSpec::parse(black_box(specification)).ok());
            }
        })
    });
}

fn bench_parse_requirement(c: &mut Criterion) {
    let requirements = [
        ">=1.2.3, <2.0.0",
        "^1.2.3, ~1.2",
        "1.2.*, <1.2.9",
        ">1, <=3.4.5-beta",
        "1, <2, <3",
    ];

    c.bench_function("parse_requirement", |b| {
        b.iter(|| {
            for requirement in requirements {
                black_box(VersionRequirement::parse(black_box(requirement)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3, <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
    ];

    c.bench_function("veritas_satisfies", |b| {
        b.iter(|| {
            for (version, requirement) in cases {
                black_box(Veritas::satisfies(black_box(version), black_box(requirement)).ok());
            }
        })
    });
}

fn bench_check_parsed(c: &mut Criterion) {
    let versions: Vec<Version> = ["1.2.3", "1.2.3-beta", "2.4.5", "1.9999.9999", "1.9.0", "2.0.0"]
        .iter()
        .map(|v| Version::parse(v).expect("parse version"))
        .collect();

    let requirement = VersionRequirement::parse("^1.2, <1.9").expect("parse requirement");

    c.bench_function("requirement_check_parsed", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(requirement.check(black_box(version)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_spec,
    bench_parse_requirement,
    bench_satisfies,
    bench_check_parsed
);
criterion_main!(benches);
