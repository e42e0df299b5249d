//! Benchmarks for the per-sample kernels and whole-frame compositing.
//! Run with: cargo bench --package medianstack --features bench

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};

use crate::common::{ColorFormat, Result};
use crate::compositor::Compositor;
use crate::frame::{Frame, FrameDesc};
use crate::ops::order_statistic::{MAX_DEPTH, Selector};
use crate::source::{FrameSource, MemoryClip};

/// Register compositor benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    kernel_benchmarks(c);
    frame_benchmarks(c);
}

fn kernel_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_statistic");

    // Pseudo-random stack contents; the kernels are data dependent
    let values: Vec<u8> = (0..MAX_DEPTH as u32)
        .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
        .collect();

    for depth in [3, 5, 7, 9, 11, 25] {
        let radius = (depth - 1) / 2;
        let median = Selector::new(depth, radius, radius);
        let blend = Selector::new(depth, 1, 1);

        group.bench_function(BenchmarkId::new("median", depth), |b| {
            let mut stack = values[..depth].to_vec();
            b.iter(|| {
                stack.copy_from_slice(&values[..depth]);
                black_box(median.select(black_box(&mut stack)))
            })
        });

        group.bench_function(BenchmarkId::new("blend", depth), |b| {
            let mut stack = values[..depth].to_vec();
            b.iter(|| {
                stack.copy_from_slice(&values[..depth]);
                black_box(blend.select(black_box(&mut stack)))
            })
        });
    }

    group.finish();
}

fn frame_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_frame");
    group.sample_size(20);

    for format in [ColorFormat::Yv12, ColorFormat::Yuy2, ColorFormat::Rgb32, ColorFormat::Rgb64] {
        let desc = FrameDesc::new(720, 576, format);
        let compositor = (0..5u8)
            .map(|seed| {
                noise_clip(desc, seed).map(|clip| Arc::new(clip) as Arc<dyn FrameSource>)
            })
            .collect::<Result<Vec<_>>>()
            .and_then(|clips| Compositor::median(clips, true));
        let compositor = match compositor {
            Ok(compositor) => compositor,
            Err(err) => {
                eprintln!("Could not build compositor for {desc}: {err}, skipping");
                continue;
            }
        };

        group.bench_function(BenchmarkId::new("median5", format), |b| {
            b.iter(|| black_box(compositor.render(black_box(0))))
        });
    }

    group.finish();
}

fn noise_clip(desc: FrameDesc, seed: u8) -> Result<MemoryClip> {
    let mut frame = Frame::new_black(desc)?;
    let mut state = 0x9E37_79B9u32 ^ seed as u32;

    for plane in 0..desc.plane_count() {
        for byte in frame.plane_mut(plane).bytes_mut() {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *byte = state as u8;
        }
    }

    Ok(MemoryClip::still(frame))
}
