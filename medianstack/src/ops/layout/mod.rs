//! Maps the order-statistic kernel over every sample of a frame, following the frame's
//! channel packing.


use arrayvec::ArrayVec;
use rayon::prelude::*;

use crate::common::{ColorFormat, Error, Result};
use crate::frame::{Frame, Plane};
use crate::ops::order_statistic::{MAX_DEPTH, Sample, Selector};

const LUMA_PLANE: usize = 0;

/// How a channel is treated by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// Luma or color: always composited.
    Primary,
    /// Chroma or alpha: composited only when chroma processing is on, otherwise copied
    /// from the first source.
    Secondary,
}

use Role::{Primary, Secondary};

const PLANAR_LUMA: &[Role] = &[Primary];
const PLANAR_CHROMA: &[Role] = &[Secondary];
const YUY2: &[Role] = &[Primary, Secondary];
const BGR: &[Role] = &[Primary, Primary, Primary];
const BGRA: &[Role] = &[Primary, Primary, Primary, Secondary];

/// Writes every sample of `dst` from the matching samples of `sources`.
///
/// `sources` must hold exactly `selector.depth()` frames, all with `dst`'s format and size.
/// Strides may differ between any of the buffers. Padding bytes of `dst` are left as they
/// were.
pub fn composite(
    selector: &Selector,
    process_chroma: bool,
    sources: &[&Frame],
    dst: &mut Frame,
) -> Result<()> {
    if sources.len() != selector.depth() {
        return Err(Error::StackDepth {
            expected: selector.depth(),
            actual: sources.len(),
        });
    }
    let desc = *dst.desc();
    if let Some(source) = sources.iter().find(|source| *source.desc() != desc) {
        return Err(Error::FrameMismatch {
            expected: desc,
            actual: *source.desc(),
        });
    }

    match desc.color_format {
        ColorFormat::Yv12 | ColorFormat::Yv16 | ColorFormat::Yv24 | ColorFormat::Y8 => {
            for plane in 0..desc.plane_count() {
                let roles = if plane == LUMA_PLANE {
                    PLANAR_LUMA
                } else {
                    PLANAR_CHROMA
                };
                composite_plane::<u8>(selector, process_chroma, sources, dst, plane, roles);
            }
        }
        ColorFormat::Yuy2 => {
            composite_plane::<u8>(selector, process_chroma, sources, dst, 0, YUY2);
        }
        ColorFormat::Rgb24 => {
            composite_plane::<u8>(selector, process_chroma, sources, dst, 0, BGR);
        }
        ColorFormat::Rgb32 => {
            composite_plane::<u8>(selector, process_chroma, sources, dst, 0, BGRA);
        }
        ColorFormat::Rgb64 => {
            composite_plane::<u16>(selector, process_chroma, sources, dst, 0, BGRA);
        }
    }

    Ok(())
}

fn composite_plane<T: Sample>(
    selector: &Selector,
    process_chroma: bool,
    sources: &[&Frame],
    dst: &mut Frame,
    plane: usize,
    roles: &[Role],
) {
    // A secondary channel with chroma processing off copies the first source.
    let copy_first: ArrayVec<bool, 4> = roles
        .iter()
        .map(|role| *role == Secondary && !process_chroma)
        .collect();

    let src_planes: ArrayVec<&Plane, MAX_DEPTH> =
        sources.iter().map(|frame| frame.plane(plane)).collect();

    let out = dst.plane_mut(plane);
    let stride = out.stride();
    let pixel_bytes = roles.len() * T::BYTES;
    let width = out.row_bytes() / pixel_bytes;

    out.bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, out_row)| {
            let src_rows: ArrayVec<&[u8], MAX_DEPTH> =
                src_planes.iter().map(|plane| plane.row(y)).collect();
            let mut stack = ArrayVec::<T, MAX_DEPTH>::new();

            for x in 0..width {
                let pixel = x * pixel_bytes;

                for (channel, &copy) in copy_first.iter().enumerate() {
                    let offset = pixel + channel * T::BYTES;

                    let value = if copy {
                        T::read_le(&src_rows[0][offset..])
                    } else {
                        stack.clear();
                        stack.extend(src_rows.iter().map(|row| T::read_le(&row[offset..])));
                        selector.select(&mut stack)
                    };

                    value.write_le(&mut out_row[offset..]);
                }
            }
        });
}
