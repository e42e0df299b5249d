//! Example: Recover a clean clip from several damaged captures
//!
//! Builds a moving synthetic test pattern, then simulates five captures of it with sensor
//! noise and tape dropouts. One capture starts a frame late and another a frame early.
//! Each compositing mode is run over the captures and its mean absolute error against
//! the clean pattern is logged.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example denoise_synthetic
//! RUST_LOG=medianstack=debug cargo run --example denoise_synthetic
//! ```

use std::sync::Arc;
use std::time::Instant;

use medianstack::{
    ColorFormat, Compositor, Frame, FrameDesc, FrameSource, MemoryClip, SyncConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const FRAMES: usize = 24;
const CAPTURES: usize = 5;

fn main() -> anyhow::Result<()> {
    common::log_setup::setup_logging("denoise_synthetic", "info", "logs")?;

    let desc = FrameDesc::new(WIDTH, HEIGHT, ColorFormat::Yv12);
    let clean: Vec<Frame> = (0..FRAMES)
        .map(|n| clean_frame(desc, n))
        .collect::<medianstack::Result<_>>()?;

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let shifts: [i64; CAPTURES] = [0, 1, 0, -1, 0];
    let captures: Vec<Arc<dyn FrameSource>> = shifts
        .iter()
        .map(|&shift| {
            capture(&clean, shift, &mut rng).map(|clip| Arc::new(clip) as Arc<dyn FrameSource>)
        })
        .collect::<medianstack::Result<_>>()?;

    tracing::info!("Built {} captures of {} frames, {}", CAPTURES, FRAMES, desc);
    report("single capture", &clean, captures[0].as_ref())?;

    let median = Compositor::median(captures.clone(), true)?;
    report("median", &clean, &median)?;

    let blend = Compositor::median_blend(captures.clone(), 1, 1, true)?;
    report("median blend 1/1", &clean, &blend)?;

    let temporal = Compositor::temporal_median(Arc::clone(&captures[0]), 2, true)?;
    report("temporal median r=2", &clean, &temporal)?;

    let synchronized = Compositor::median(captures, true)?.synchronized(SyncConfig::new(2))?;
    report("synchronized median", &clean, &synchronized)?;

    let (_, frame_report) = synchronized.render_with_report(FRAMES as i64 / 2)?;
    for line in frame_report.to_string().lines() {
        tracing::info!("{}", line);
    }

    Ok(())
}

/// Diagonal gradient moving two pixels per frame, with flat chroma.
fn clean_frame(desc: FrameDesc, n: usize) -> medianstack::Result<Frame> {
    let mut frame = Frame::new_black(desc)?;

    let luma = frame.plane_mut(0);
    for y in 0..luma.height() {
        for (x, sample) in luma.row_mut(y).iter_mut().enumerate() {
            *sample = ((x + y + 2 * n) % 220 + 16) as u8;
        }
    }
    for plane in 1..desc.plane_count() {
        frame.plane_mut(plane).bytes_mut().fill(128);
    }

    Ok(frame)
}

/// Copies `clean` shifted by `shift` frames, adding noise and horizontal dropout streaks.
fn capture(clean: &[Frame], shift: i64, rng: &mut StdRng) -> medianstack::Result<MemoryClip> {
    let frames = (0..clean.len() as i64)
        .map(|n| {
            let source = (n - shift).clamp(0, clean.len() as i64 - 1) as usize;
            let mut frame = clean[source].clone();

            let luma = frame.plane_mut(0);
            for y in 0..luma.height() {
                let dropout = rng.random_range(0..100) < 2;
                for sample in luma.row_mut(y).iter_mut() {
                    *sample = if dropout {
                        255
                    } else {
                        sample.saturating_add_signed(rng.random_range(-6..=6))
                    };
                }
            }
            frame
        })
        .collect();

    MemoryClip::new(frames)
}

fn report(name: &str, clean: &[Frame], source: &dyn FrameSource) -> medianstack::Result<()> {
    let start = Instant::now();
    let mut total_error = 0u64;
    let mut total_samples = 0u64;

    for (n, expected) in clean.iter().enumerate() {
        let actual = source.frame(n as i64)?;
        let expected = expected.plane(0).packed_bytes();
        let actual = actual.plane(0).packed_bytes();

        total_error += expected
            .iter()
            .zip(&actual)
            .map(|(a, b)| a.abs_diff(*b) as u64)
            .sum::<u64>();
        total_samples += expected.len() as u64;
    }

    tracing::info!(
        "{:<22} mean abs error {:.3} ({:.1?})",
        name,
        total_error as f64 / total_samples as f64,
        start.elapsed()
    );
    Ok(())
}
