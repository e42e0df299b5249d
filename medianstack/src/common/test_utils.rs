use crate::frame::{DEFAULT_ALIGNMENT, Frame, FrameDesc};

/// Value written into stride padding so that tests notice when padding is read.
pub const PADDING_MARKER: u8 = 0xEE;

/// Frame whose every sample byte is `value`.
pub fn constant_frame(desc: FrameDesc, value: u8) -> Frame {
    frame_from_fn(desc, DEFAULT_ALIGNMENT, |_, _, _| value)
}

/// Builds a frame whose byte at column `x`, row `y` of `plane` is `f(plane, x, y)`.
/// Stride padding is filled with [`PADDING_MARKER`].
pub fn frame_from_fn(
    desc: FrameDesc,
    alignment: usize,
    f: impl Fn(usize, usize, usize) -> u8,
) -> Frame {
    let mut frame = Frame::new_with_alignment(desc, alignment).unwrap();

    for plane_index in 0..desc.plane_count() {
        let plane = frame.plane_mut(plane_index);
        plane.bytes_mut().fill(PADDING_MARKER);
        for y in 0..plane.height() {
            for (x, byte) in plane.row_mut(y).iter_mut().enumerate() {
                *byte = f(plane_index, x, y);
            }
        }
    }

    frame
}

/// Builds an RGB64 frame from 16-bit channel values `f(x, y, channel)`.
pub fn rgb64_frame(
    width: u32,
    height: u32,
    alignment: usize,
    f: impl Fn(usize, usize, usize) -> u16,
) -> Frame {
    let desc = FrameDesc::new(width, height, crate::common::ColorFormat::Rgb64);
    frame_from_fn(desc, alignment, |_, byte, y| {
        let value = f(byte / 8, y, (byte % 8) / 2);
        value.to_le_bytes()[byte % 2]
    })
}

/// Reads the 16-bit little-endian channel `channel` of pixel (`x`, `y`) of an RGB64 frame.
pub fn rgb64_sample(frame: &Frame, x: usize, y: usize, channel: usize) -> u16 {
    let row = frame.plane(0).row(y);
    let offset = x * 8 + channel * 2;
    u16::from_le_bytes([row[offset], row[offset + 1]])
}
