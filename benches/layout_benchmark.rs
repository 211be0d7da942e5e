//! Benchmarks for typeflow pagination performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks paginate synthetic story documents of varying size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use typeflow::{paginate, CharCountMeasurer, Document, PageGeometry, Section};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(section_count: usize) -> Document {
    let mut doc = Document::new("داستان خواب شما");

    for i in 0..section_count {
        let mut body = String::new();
        for p in 0..8 {
            if p > 0 {
                body.push_str("\n\n");
            }
            for w in 0..60 {
                if w > 0 {
                    body.push(' ');
                }
                body.push_str("واژه");
            }
        }
        doc.add_section(Section::new(format!("فصل {}", i + 1), body));
    }

    doc
}

fn bench_paginate_small(c: &mut Criterion) {
    let doc = create_test_document(4);
    let geometry = PageGeometry::a4();
    let measurer = CharCountMeasurer::new();

    c.bench_function("paginate_4_sections", |b| {
        b.iter(|| paginate(black_box(&doc), &geometry, &measurer).unwrap())
    });
}

fn bench_paginate_large(c: &mut Criterion) {
    let doc = create_test_document(64);
    let geometry = PageGeometry::a4();
    let measurer = CharCountMeasurer::new();

    c.bench_function("paginate_64_sections", |b| {
        b.iter(|| paginate(black_box(&doc), &geometry, &measurer).unwrap())
    });
}

fn bench_line_breaking(c: &mut Criterion) {
    let geometry = PageGeometry::a4();
    let measurer = CharCountMeasurer::new();
    let paragraph = vec!["واژه"; 2000].join(" ");
    let style = geometry.style(typeflow::StyleKind::Body);

    c.bench_function("break_lines_2000_tokens", |b| {
        b.iter(|| {
            typeflow::break_lines(
                black_box(&paragraph),
                geometry.printable_width(),
                style,
                &measurer,
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_paginate_small,
    bench_paginate_large,
    bench_line_breaking
);
criterion_main!(benches);
