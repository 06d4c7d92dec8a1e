// Run with: cargo bench --bench fill_buffer

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use st7789_framebuffer::compute_buffer_len;
use st7789_framebuffer::framebuffer::DmaFrameBuffer;
use std::hint::black_box;
use std::time::Duration;

const COLS: usize = 240;
const ROWS: usize = 320;
const BYTES: usize = compute_buffer_len(COLS, ROWS);

type FullFrameBuffer = DmaFrameBuffer<COLS, ROWS, BYTES>;

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .confidence_level(0.95)
        .significance_level(0.05)
}

fn fill_buffer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_buffer");
    group.throughput(Throughput::Bytes(BYTES as u64));

    let mut fb = FullFrameBuffer::new();

    group.bench_function("fill", |b| {
        b.iter(|| fb.fill(black_box(Rgb565::new(12, 34, 5))));
    });

    group.bench_function("set_pixel", |b| {
        b.iter(|| {
            for y in 0..ROWS as i32 {
                for x in 0..COLS as i32 {
                    fb.set_pixel(Point::new(x, y), black_box(Rgb565::RED));
                }
            }
        });
    });

    group.bench_function("styled_rectangle", |b| {
        let rect = Rectangle::new(Point::new(20, 20), Size::new(200, 280));
        b.iter(|| {
            rect.into_styled(PrimitiveStyle::with_fill(black_box(Rgb565::GREEN)))
                .draw(&mut fb)
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(name = benches; config = configure_criterion(); targets = fill_buffer_benchmark);
criterion_main!(benches);
