//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package mat-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mat_lex::{LexOptions, Lexer};
use mat_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let options = LexOptions::default().with_skip_whitespace(true);
    let lexer = Lexer::new(source, &handler, options);
    lexer.count()
}

fn bench_lexer_mat(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_mat");

    let source = "f(x) = 3x^2 + 2x - 1/(x+1) * (y_1 <= 4.5e-3)";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_sum", |b| {
        b.iter(|| lexer_token_count(black_box("x+2")))
    });

    group.bench_function("polynomial", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_latex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_latex");

    let source = r"\lim_{n \to \infty} \frac{\sqrt{n^2 + 1}}{n} + \sin(\pi x) \cos(x) \le \log{e} \neq \ln{2}";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("escape_words", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("quadratic", |b| {
        b.iter(|| lexer_token_count(black_box(r"x = \frac{-b + \sqrt{b^2 - 4ac}}{2a}")))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("123456")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("3.14159")))
    });

    group.bench_function("exponent", |b| {
        b.iter(|| lexer_token_count(black_box("6.02214076e23")))
    });

    group.finish();
}

fn bench_lexer_long_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_long_buffer");

    let source = r"\sin(x)^2 + \cos(x)^2 = 1 ".repeat(1_000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("identities", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_mat,
    bench_lexer_latex,
    bench_lexer_numbers,
    bench_lexer_long_buffer
);
criterion_main!(benches);
