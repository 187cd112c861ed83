use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rd_cst_parser::parse_source;

const SMALL: &str = "let x = 1;";

const MEDIUM: &str = r#"
let a = 1, b = 2, c = 3;
let total = a + b * (c - 1) / 2;
let obj = { getTotal() { return total; }, label };
obj.getTotal()[0].toFixed();
"#;

fn bench_small(c: &mut Criterion) {
    c.bench_function("parse small declaration", |b| {
        b.iter(|| parse_source(black_box(SMALL), None).unwrap())
    });
}

fn bench_medium(c: &mut Criterion) {
    c.bench_function("parse medium module", |b| {
        b.iter(|| parse_source(black_box(MEDIUM), None).unwrap())
    });
}

fn bench_fault_tolerance(c: &mut Criterion) {
    let source = "let ; let ; let ; let x = 1;";
    c.bench_function("parse with recovery", |b| {
        b.iter(|| parse_source(black_box(source), None).unwrap())
    });
}

criterion_group!(benches, bench_small, bench_medium, bench_fault_tolerance);
criterion_main!(benches);
