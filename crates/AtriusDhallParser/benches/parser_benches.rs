use atrius_dhall_parser::{
    parse_double, parse_expression, parse_import, parse_natural, parse_text_literal,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/numbers");

    group.bench_function("natural_decimal", |b| {
        b.iter(|| parse_natural(black_box("1234567890")))
    });

    group.bench_function("natural_hex", |b| {
        b.iter(|| parse_natural(black_box("0xDEADBEEF")))
    });

    group.bench_function("natural_big", |b| {
        b.iter(|| parse_natural(black_box("123456789012345678901234567890123456789")))
    });

    group.bench_function("double_exponent", |b| {
        b.iter(|| parse_double(black_box("-123456789.123456789e-5")))
    });

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/text");

    group.bench_function("plain", |b| {
        b.iter(|| parse_text_literal(black_box(r#""Hello, world""#)))
    });

    group.bench_function("escapes", |b| {
        b.iter(|| parse_text_literal(black_box(r#""tab\tquote\"dollar\$ smile\u{1F600}""#)))
    });

    group.bench_function("interpolation", |b| {
        b.iter(|| parse_text_literal(black_box(r#""a${x}b${"c${y@1}d"}e""#)))
    });

    group.bench_function("single_quoted", |b| {
        b.iter(|| {
            parse_text_literal(black_box(
                "''\n  first line\n  second ${name} line\n  '''quoted''\n''",
            ))
        })
    });

    group.finish();
}

fn bench_imports(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/imports");
    let digest = "2ca5d2b5b8d7ab6e9bfab6b4a7e5e3fba2f8e6d2b3a1c0d9e8f7a6b5c4d3e2f1";

    group.bench_function("local", |b| {
        b.iter(|| parse_import(black_box("../dhall/\"my dir\"/package.dhall")))
    });

    let hashed = format!("./package.dhall sha256:{digest} as Text");
    group.bench_function("local_hashed", |b| {
        b.iter(|| parse_import(black_box(hashed.as_str())))
    });

    group.bench_function("remote", |b| {
        b.iter(|| {
            parse_import(black_box(
                "https://user@prelude.dhall-lang.org.:443/v20.0.0/package.dhall?x=%20",
            ))
        })
    });

    group.bench_function("remote_ipv6", |b| {
        b.iter(|| parse_import(black_box("http://[2001:db8::ffff:1.2.3.4]:80/p")))
    });

    group.bench_function("remote_with_headers", |b| {
        b.iter(|| parse_import(black_box("https://example.com./x using (env:HEADERS)")))
    });

    group.bench_function("env", |b| {
        b.iter(|| parse_import(black_box(r#"env:"with \"escapes\"""#)))
    });

    group.finish();
}

fn bench_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/expressions");

    group.bench_function("builtin", |b| {
        b.iter(|| parse_expression(black_box("Natural/show")))
    });

    group.bench_function("variable", |b| {
        b.iter(|| parse_expression(black_box("`quoted label`@3")))
    });

    group.bench_function("commented", |b| {
        b.iter(|| {
            parse_expression(black_box(
                "-- header\n{- block {- nested -} -}\n( ./config.dhall as Location ) -- tail",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_numbers,
    bench_text,
    bench_imports,
    bench_expressions
);
criterion_main!(benches);
