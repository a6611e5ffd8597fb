//! Benchmarks for frame packing and the text format parser.

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ledplay::{Frame, FrameStore, encode};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    // 4x2 and 4x3 hit the wired layouts, the rest the generic fallback.
    for (width, height) in [(4, 2), (4, 3), (4, 4), (8, 4)] {
        let cells = (0..width * height).map(|i| i % 3 != 0).collect();
        let frame = Frame::from_cells(width, height, cells);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &frame,
            |b, frame| {
                b.iter(|| encode(black_box(frame)));
            },
        );
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for frames in [16, 256] {
        let mut text = String::new();
        for i in 0..frames {
            for y in 0..3 {
                for x in 0..4 {
                    text.push(if (x + y + i) % 2 == 0 { 'x' } else { '.' });
                }
                text.push('\n');
            }
            text.push('\n');
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_frames", frames)),
            &text,
            |b, text| {
                b.iter(|| FrameStore::read_from(Cursor::new(black_box(text.as_bytes())), 4, 3));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_parse);
criterion_main!(benches);
