//! Lexer Benchmarks
//!
//! Measures lexer throughput on typical Worm sources.
//! Run with: `cargo bench --package worm-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use worm_lex::{scan, scan_with_config, KeywordSet, Lexer, LexerConfig};
use worm_util::Handler;

const PROGRAM: &str = r#"
'''
Retry a request until it succeeds.
'''
max_attempts:int = 1_000_000;
backoff:float = 0.25e-1;

def fetch_with_retry(url: str) -> str {
    attempt = 0;
    while attempt < max_attempts {
        response = client?.get(url) ?? None;   # may be missing
        if response != None {
            return response.body;
        }
        attempt += 1;
        backoff **= 2;
        delay = backoff // 3 % 7;
    }
    return 'gave up after retries';
}
"#;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source, &mut handler);
    lexer.count()
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("core_keywords", |b| {
        b.iter(|| lexer_token_count(black_box(PROGRAM)))
    });

    let config = LexerConfig::default()
        .with_keywords(KeywordSet::Extended)
        .with_comments(true);
    group.bench_function("extended_with_comments", |b| {
        b.iter(|| scan_with_config(black_box(PROGRAM), &config).map(|r| r.tokens.len()))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");
    let source = PROGRAM.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("scan", |b| b.iter(|| scan(black_box(&source)).tokens.len()));

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("grouped_integers", |b| {
        b.iter(|| lexer_token_count(black_box("1_000 2_000_000 3_000_000_000 4_5_6")))
    });

    group.bench_function("floats", |b| {
        b.iter(|| lexer_token_count(black_box("3.14159 99.999_999 6.022e23 1E-9")))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box(r#""tab\there \"quoted\" line\n end""#)))
    });

    group.finish();
}

fn bench_lexer_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_errors");

    group.bench_function("recovery", |b| {
        b.iter(|| scan(black_box("x = 1__0; y = \"open\n@ $ ? z = 2_")).diagnostics.len())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_program,
    bench_lexer_large,
    bench_lexer_literals,
    bench_lexer_errors
);
criterion_main!(benches);
