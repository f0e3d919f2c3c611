//! Benchmarks for the OBJ bounding box scan

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;

use obj_stat::{accumulate, accumulate_reader};

/// Builds an OBJ document with a grid of vertices followed by faces
fn create_test_file(side: usize) -> String {
    let mut text = String::from("# generated grid\n");
    for i in 0..side {
        for j in 0..side {
            let x = i as f64 * 0.25 - 10.0;
            let z = j as f64 * 0.25 - 10.0;
            let y = (x * 0.1).sin() * (z * 0.1).cos();
            text.push_str(&format!("v {x:.6} {y:.6} {z:.6}\n"));
        }
    }
    for i in 1..side {
        text.push_str(&format!("f {} {} {}\n", i, i + 1, i + side));
    }
    text
}

fn bench_accumulate(c: &mut Criterion) {
    let text = create_test_file(256);

    c.bench_function("accumulate_lines_65k", |b| {
        b.iter(|| accumulate(black_box(text.lines())))
    });

    c.bench_function("accumulate_reader_65k", |b| {
        b.iter(|| accumulate_reader(Cursor::new(black_box(text.as_bytes()))))
    });
}

criterion_group!(benches, bench_accumulate);
criterion_main!(benches);
