use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use apiextractor::{normalize_signature, parse};

fn bench_simple_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("no_arguments", |b| {
        b.iter(|| parse(black_box("func()"), black_box("void")))
    });

    group.bench_function("flat_arguments", |b| {
        b.iter(|| {
            parse(
                black_box("func(int, const char*, double = 1.0)"),
                black_box("int"),
            )
        })
    });

    group.finish();
}

fn bench_template_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_templates");

    group.bench_function("nested_template", |b| {
        b.iter(|| {
            parse(
                black_box("func(const Abc<int&, C<char*>*>**, Map<K, V<int>>&)"),
                black_box("const Abc<int&, C<char*>*>**"),
            )
        })
    });

    group.bench_function("ugly_spacing", |b| {
        b.iter(|| {
            parse(
                black_box(
                    "  _fu__nc_ (  type1, const type2, const Abc<int& , C<char*> * > * *, const type3* const ) const ",
                ),
                black_box("void"),
            )
        })
    });

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("directive_key", |b| {
        b.iter(|| normalize_signature(black_box("func( int , float = 4.6 , const B& )")))
    });

    group.bench_function("varargs", |b| {
        b.iter(|| normalize_signature(black_box("func(int, char, ...)")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_simple_signatures,
    bench_template_signatures,
    bench_normalization
);
criterion_main!(benches);
