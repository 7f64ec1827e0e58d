// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pixwerk-filter crate. Runs the full filter
// chain and the watermark blend on a small synthetic gradient image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use pixwerk_core::{FilterKind, WatermarkBounds};
use pixwerk_filter::{ImageProcessor, PixelBuffer};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// 256x256 gradient so every filter sees a spread of channel values,
/// including the ties posterize leaves alone.
fn gradient() -> PixelBuffer {
    let img = RgbImage::from_fn(256, 256, |x, y| {
        Rgb([x as u8, y as u8, ((x + y) / 2) as u8])
    });
    PixelBuffer::from_rgb(img)
}

fn bench_filter_chain(c: &mut Criterion) {
    let source = gradient();

    c.bench_function("filter_chain (256x256)", |b| {
        b.iter(|| {
            let mut processor = ImageProcessor::from_buffer("bench", black_box(source.clone()));
            for kind in FilterKind::all() {
                black_box(processor.apply(*kind));
            }
        });
    });
}

fn bench_watermark(c: &mut Criterion) {
    let base = gradient();
    let overlay = PixelBuffer::filled(128, 128, [200, 30, 30]);

    c.bench_function("watermark (256x256 over 128x128)", |b| {
        b.iter(|| {
            let out = pixwerk_filter::filter::watermark(
                black_box(&base),
                black_box(&overlay),
                WatermarkBounds::AreaBranch,
            );
            black_box(out)
        });
    });
}

criterion_group!(benches, bench_filter_chain, bench_watermark);
criterion_main!(benches);
