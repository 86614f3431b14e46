//! Criterion benchmarks for URI building and serialization.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use request_uri::{AbsoluteUri, encode_query_value};

fn full_uri() -> AbsoluteUri {
    AbsoluteUri::new("host.com", Some("http"), Some(5000))
        .and_then(|uri| uri.with_path_segments(["pathpart1", "pathpart2"]))
        .and_then(|uri| {
            uri.with_query_pairs([("fieldname1", "field<>Value1"), ("FieldName2", "field<>Value2")])
        })
        .and_then(|uri| uri.with_user("username", "password"))
        .map(|uri| uri.with_fragment("frag"))
        .unwrap()
}

/// Benchmark: full builder chain from host to final string
fn bench_build_chain(c: &mut Criterion) {
    c.bench_function("build_chain", |b| {
        b.iter(|| {
            AbsoluteUri::new(black_box("host.com"), Some("http"), Some(5000))
                .unwrap()
                .with_path_segments(black_box(["pathpart1", "pathpart2"]))
                .unwrap()
                .with_query_pairs(black_box([("fieldname1", "field<>Value1")]))
                .unwrap()
                .with_fragment(black_box("frag"))
                .to_uri_string()
        });
    });
}

/// Benchmark: serialization of prebuilt URIs of varying complexity
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let minimal = AbsoluteUri::new("a.co", None, None).unwrap();
    let full = full_uri();
    let many_params = full
        .with_query_pairs((0..32).map(|i| (format!("field{i}"), format!("value <{i}> & more"))))
        .unwrap();

    for (name, uri) in [("minimal", &minimal), ("full", &full), ("many_params", &many_params)] {
        group.bench_with_input(BenchmarkId::new("uri", name), uri, |b, uri| {
            b.iter(|| black_box(uri).to_uri_string());
        });
    }

    group.finish();
}

/// Benchmark: percent-encoding of query values with varying escape density
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_query_value");

    let cases = [
        ("plain", "abcdefghijklmnopqrstuvwxyz0123456789".to_string()),
        ("reserved", "<>&=?#/ ".repeat(8)),
        ("unicode", "日本語のテキスト".repeat(4)),
    ];

    for (name, value) in &cases {
        group.throughput(Throughput::Bytes(value.len() as u64));
        group.bench_with_input(BenchmarkId::new("value", name), value, |b, value| {
            b.iter(|| encode_query_value(black_box(value)).to_string());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_chain, bench_serialize, bench_encode);
criterion_main!(benches);
