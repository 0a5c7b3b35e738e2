use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use valtree::{from_str, to_string, Node};

/// Builds `sections` top-level nodes, each with `fields` children carrying a nested leaf.
fn sample_tree(sections: usize, fields: usize) -> Node {
    let mut root = Node::empty();
    for s in 0..sections {
        for f in 0..fields {
            root.add_tree(&format!("section{s}.field{f}"), format!("{}", s * fields + f));
            root.add_tree(&format!("section{s}.field{f}.unit"), "mm");
        }
    }
    root
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&sample_tree(*size, 10));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 50, 100, 500].iter() {
        let tree = sample_tree(*size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let tree = sample_tree(100, 10);

    c.bench_function("query_hit", |b| {
        b.iter(|| tree.query(black_box("section99.field9.unit")))
    });

    c.bench_function("query_miss", |b| {
        b.iter(|| tree.query(black_box("section99.missing.unit")))
    });
}

fn benchmark_add_tree(c: &mut Criterion) {
    c.bench_function("add_tree_existing_path", |b| {
        let mut tree = sample_tree(10, 10);
        b.iter(|| {
            tree.add_tree(black_box("section9.field9.unit"), "cm");
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_query,
    benchmark_add_tree
);
criterion_main!(benches);
