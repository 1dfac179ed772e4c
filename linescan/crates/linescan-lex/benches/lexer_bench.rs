//! Lexer Benchmarks
//!
//! Measures scanner throughput over typical inputs.
//! Run with: `cargo bench --package linescan-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linescan_lex::{Lexer, NO_COMMENTS};

fn lexer_token_count(source: &str, prefixes: &[&str]) -> usize {
    Lexer::new(source, prefixes).count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "x = 5 + 10; y = x * 2; z = (x + y) / 3;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assign", |b| {
        b.iter(|| lexer_token_count(black_box("x = 42;"), NO_COMMENTS))
    });

    group.bench_function("statement_line", |b| {
        b.iter(|| lexer_token_count(black_box(source), NO_COMMENTS))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        fn fibonacci(n) {
            if n < 2 {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        point = { x: 1.5, y: 2.25 };
        flags = mask & 0 | bit ^ 1;
        ok = !(a == b);
        names = ["alpha", 'beta', `gamma`];
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source), NO_COMMENTS))
    });

    let large = source.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("large_source", |b| {
        b.iter(|| lexer_token_count(black_box(&large), NO_COMMENTS))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("s = \"hello\";"), NO_COMMENTS))
    });

    group.bench_function("long_string", |b| {
        let source = "s = \"This is a longer string that contains some text for benchmarking purposes.\";";
        b.iter(|| lexer_token_count(black_box(source), NO_COMMENTS))
    });

    group.bench_function("raw_multiline", |b| {
        let source = format!("doc = `{}`;", "line of raw text\n".repeat(50));
        b.iter(|| lexer_token_count(black_box(&source), NO_COMMENTS))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    let source = "// heading\nx = 1;\n    # note\ny = 2;\n".repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("comment_skipping", |b| {
        b.iter(|| lexer_token_count(black_box(&source), &["//", "#"]))
    });

    group.bench_function("comments_disabled", |b| {
        b.iter(|| lexer_token_count(black_box(&source), NO_COMMENTS))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("x = 123456;"), NO_COMMENTS))
    });

    group.bench_function("fractional", |b| {
        b.iter(|| lexer_token_count(black_box("x = 3.14159 + .5;"), NO_COMMENTS))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_comments,
    bench_lexer_numbers
);
criterion_main!(benches);
