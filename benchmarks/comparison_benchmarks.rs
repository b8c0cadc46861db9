#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: qsplice vs form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qsplice::QueryComponent;

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "code=abc&state=xyz";

    group.bench_function("qsplice", |b| {
        b.iter(|| QueryComponent::parse(black_box(input)).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(input).as_bytes()).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_parse_encoded_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_encoded");
    let input =
        "redirect_uri=https%3A%2F%2Fclient.example%2Fcb&scope=openid+profile+email&state=af0ifjsldkj";

    group.bench_function("qsplice", |b| {
        b.iter(|| QueryComponent::parse(black_box(input)).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(input).as_bytes()).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_parse_long_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_long");

    let mut input = String::new();
    for i in 0..50 {
        if i > 0 {
            input.push('&');
        }
        input.push_str(&format!("param{i}=value%20{i}"));
    }

    group.bench_function("qsplice", |b| {
        b.iter(|| QueryComponent::parse(black_box(&input)).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(&input).as_bytes()).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_encode_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let mut component = QueryComponent::new();
    component.append("response_type", "code");
    component.append("client_id", "s6BhdRkqt3");
    component.append("redirect_uri", "https://client.example/cb");
    component.append("scope", "openid profile email");
    component.append("state", "af0ifjsldkj");

    group.bench_function("qsplice", |b| {
        b.iter(|| black_box(&component).encode());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            serializer
                .append_pair("response_type", "code")
                .append_pair("client_id", "s6BhdRkqt3")
                .append_pair("redirect_uri", "https://client.example/cb")
                .append_pair("scope", "openid profile email")
                .append_pair("state", "af0ifjsldkj");
            serializer.finish()
        });
    });

    group.finish();
}

fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("accessors");
    let component = QueryComponent::parse("a=1&b=2&a=3&c=4&b=5&d=6").unwrap();

    group.bench_function("get", |b| {
        b.iter(|| black_box(component.get("c")));
    });

    group.bench_function("get_all", |b| {
        b.iter(|| black_box(component.get_all("a")));
    });

    group.bench_function("names", |b| {
        b.iter(|| black_box(component.names()));
    });

    group.bench_function("to_map", |b| {
        b.iter(|| black_box(component.to_map()));
    });

    group.finish();
}

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice");

    let mut component = QueryComponent::new();
    component.append("code", "4/0AX4XfWh");
    component.append("state", "af0ifjsldkj");

    let plain = "https://client.example/cb".to_string();
    let with_query = "https://client.example/cb?old=1&stale=2#top".to_string();

    group.bench_function("install", |b| {
        b.iter(|| component.splice_into_url(black_box(&plain)));
    });

    group.bench_function("replace", |b| {
        b.iter(|| component.splice_into_url(black_box(&with_query)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_encoded_all,
    bench_parse_long_all,
    bench_encode_all,
    bench_accessors,
    bench_splice
);

criterion_main!(benches);
