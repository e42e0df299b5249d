//! Sparse frame comparison used to line up clips that drift in time.

use std::sync::Arc;

use crate::common::{Error, Result};
use crate::frame::Frame;
use crate::source::FrameSource;

/// Plane scored by the comparison: luma for planar formats, the whole packed plane otherwise.
const SCORED_PLANE: usize = 0;

/// Winning temporal offset of a clip against the reference, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SyncMatch {
    pub offset: i32,
    pub score: f64,
}

/// Scores how alike two frames are, `100.0` meaning identical samples.
///
/// Compares bytes of plane 0 at evenly spaced logical positions. `samples` is the number of
/// positions the score is normalized by; `0` or anything above the plane size compares
/// every byte. Because the spacing is rounded down, more than `samples` positions may be
/// visited and very different frames can score below zero.
pub fn compare_frames(a: &Frame, b: &Frame, samples: usize) -> Result<f64> {
    let plane_a = a.plane(SCORED_PLANE);
    let plane_b = b.plane(SCORED_PLANE);

    if plane_a.row_bytes() != plane_b.row_bytes() || plane_a.height() != plane_b.height() {
        return Err(Error::FrameMismatch {
            expected: *a.desc(),
            actual: *b.desc(),
        });
    }

    let total = plane_a.logical_len();
    let points = if samples == 0 || samples > total {
        total
    } else {
        samples
    };
    let step = total / points;

    let sum: u64 = (0..total)
        .step_by(step)
        .map(|index| plane_a.logical_byte(index).abs_diff(plane_b.logical_byte(index)) as u64)
        .sum();

    Ok(100.0 - (100.0 * sum as f64) / (255.0 * points as f64))
}

/// Finds the frame of `clip` near index `n` that best matches `reference`.
///
/// Offsets are tried from `-radius` up to `radius`; a later offset only wins with a strictly
/// higher score, and nothing wins unless it scores above zero, in which case offset 0 is
/// used.
pub fn best_offset(
    reference: &Frame,
    clip: &dyn FrameSource,
    n: i64,
    radius: u32,
    samples: usize,
) -> Result<(SyncMatch, Arc<Frame>)> {
    let radius = radius as i32;
    let mut best = SyncMatch::default();
    let mut best_frame = None;

    for offset in -radius..=radius {
        let candidate = clip.frame(n + offset as i64)?;
        let score = compare_frames(reference, &candidate, samples)?;

        if score > best.score {
            best = SyncMatch { offset, score };
            best_frame = Some(candidate);
        }
    }

    let frame = match best_frame {
        Some(frame) => frame,
        None => clip.frame(n)?,
    };

    Ok((best, frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ColorFormat;
    use crate::common::test_utils::{constant_frame, frame_from_fn};
    use crate::frame::FrameDesc;
    use crate::source::MemoryClip;

    fn desc() -> FrameDesc {
        FrameDesc::new(16, 8, ColorFormat::Yv12)
    }

    /// Clip whose frame `i` has a luma pattern unique to `i`.
    fn pattern_clip(len: u8) -> MemoryClip {
        let frames: Vec<Frame> = (0..len)
            .map(|i| {
                frame_from_fn(desc(), 8, move |_, x, y| {
                    (x as u8 * 7 + y as u8 * 3).wrapping_add(i * 20)
                })
            })
            .collect();
        MemoryClip::new(frames).unwrap()
    }

    #[test]
    fn test_identical_frames_score_100() {
        let a = constant_frame(desc(), 77);
        let b = frame_from_fn(desc(), 32, |_, _, _| 77);
        assert_eq!(compare_frames(&a, &b, 4096).unwrap(), 100.0);
        assert_eq!(compare_frames(&a, &b, 0).unwrap(), 100.0);
        assert_eq!(compare_frames(&a, &b, 5).unwrap(), 100.0);
    }

    #[test]
    fn test_opposite_frames_score_zero() {
        let a = constant_frame(desc(), 0);
        let b = constant_frame(desc(), 255);
        assert_eq!(compare_frames(&a, &b, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_score_can_go_negative() {
        // 128 luma bytes, 3 points: step 42 visits 0, 42, 84, 126
        let a = constant_frame(desc(), 0);
        let b = constant_frame(desc(), 255);
        let score = compare_frames(&a, &b, 3).unwrap();
        assert!((score - (100.0 - 100.0 * 4.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_only_luma_is_scored() {
        let a = frame_from_fn(desc(), 4, |plane, _, _| if plane == 0 { 10 } else { 0 });
        let b = frame_from_fn(desc(), 4, |plane, _, _| if plane == 0 { 10 } else { 255 });
        assert_eq!(compare_frames(&a, &b, 0).unwrap(), 100.0);
    }

    #[test]
    fn test_half_difference() {
        let a = constant_frame(desc(), 0);
        let b = frame_from_fn(desc(), 4, |_, x, _| if x % 2 == 0 { 0 } else { 255 });
        assert_eq!(compare_frames(&a, &b, 0).unwrap(), 50.0);
    }

    #[test]
    fn test_geometry_mismatch_is_rejected() {
        let a = constant_frame(desc(), 0);
        let b = constant_frame(FrameDesc::new(8, 8, ColorFormat::Yv12), 0);
        assert!(matches!(
            compare_frames(&a, &b, 0),
            Err(Error::FrameMismatch { .. })
        ));
    }

    #[test]
    fn test_identical_offsets_pick_most_negative() {
        let frames: Vec<Frame> = (0..20).map(|_| constant_frame(desc(), 50)).collect();
        let clip = MemoryClip::new(frames).unwrap();
        let reference = constant_frame(desc(), 50);

        let (found, _) = best_offset(&reference, &clip, 10, 3, 4096).unwrap();
        assert_eq!(found, SyncMatch { offset: -3, score: 100.0 });
    }

    #[test]
    fn test_finds_shifted_frame() {
        let clip = pattern_clip(12);
        let reference = clip.frame(7).unwrap();

        let (found, frame) = best_offset(&reference, &clip, 5, 4, 0).unwrap();
        assert_eq!(found.offset, 2);
        assert_eq!(found.score, 100.0);
        assert!(Arc::ptr_eq(&frame, &reference));
    }

    #[test]
    fn test_nothing_above_zero_keeps_offset_zero() {
        let reference = constant_frame(desc(), 0);
        let white = MemoryClip::still(constant_frame(desc(), 255));

        let (found, frame) = best_offset(&reference, &white, 2, 2, 0).unwrap();
        assert_eq!(found, SyncMatch::default());
        assert_eq!(frame.plane(0).row(0)[0], 255);
    }

    #[test]
    fn test_slightly_positive_score_wins() {
        let reference = constant_frame(desc(), 0);
        let frames: Vec<Frame> = (0..5).map(|i| constant_frame(desc(), 255 - i)).collect();
        let clip = MemoryClip::new(frames).unwrap();

        let (found, frame) = best_offset(&reference, &clip, 2, 2, 0).unwrap();
        assert_eq!(found.offset, 2);
        assert!(found.score > 0.0);
        assert_eq!(frame.plane(0).row(0)[0], 251);
    }
}
