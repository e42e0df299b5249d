use super::*;
use crate::common::ALL_FORMATS;
use crate::common::test_utils::{PADDING_MARKER, frame_from_fn};

#[test]
fn test_new_black_allocates_every_plane() {
    for format in ALL_FORMATS {
        let desc = FrameDesc::new(6, 4, *format);
        let frame = Frame::new_black(desc).unwrap();

        assert_eq!(frame.planes().len(), format.plane_count(), "{format}");
        for (index, plane) in frame.planes().iter().enumerate() {
            let (row_bytes, height) = desc.plane_geometry(index);
            assert_eq!(plane.row_bytes(), row_bytes);
            assert_eq!(plane.height(), height);
            assert!(plane.stride() >= row_bytes);
            assert!(plane.stride().is_multiple_of(DEFAULT_ALIGNMENT));
            assert!(plane.bytes().iter().all(|&b| b == 0));
        }
    }
}

#[test]
fn test_new_black_rejects_bad_dimensions() {
    let desc = FrameDesc::new(5, 4, ColorFormat::Yv12);
    assert!(matches!(
        Frame::new_black(desc),
        Err(Error::InvalidDimensions { .. })
    ));
}

#[test]
fn test_alignment_must_be_power_of_two() {
    let desc = FrameDesc::new(4, 4, ColorFormat::Y8);
    assert!(Frame::new_with_alignment(desc, 3).is_err());
    assert_eq!(
        Frame::new_with_alignment(desc, 32).unwrap().plane(0).stride(),
        32
    );
}

#[test]
fn test_rows_exclude_padding() {
    let desc = FrameDesc::new(3, 2, ColorFormat::Rgb24);
    let frame = frame_from_fn(desc, 16, |_, x, y| (x + 10 * y) as u8);
    let plane = frame.plane(0);

    assert_eq!(plane.stride(), 16);
    assert_eq!(plane.row(1).len(), 9);
    assert_eq!(plane.row(1)[0], 10);
    assert_eq!(plane.bytes()[9], PADDING_MARKER);
    assert_eq!(plane.rows().count(), 2);
}

#[test]
fn test_logical_byte_skips_padding() {
    let desc = FrameDesc::new(3, 2, ColorFormat::Y8);
    let frame = frame_from_fn(desc, 8, |_, x, y| (x + 3 * y) as u8);
    let plane = frame.plane(0);

    assert_eq!(plane.logical_len(), 6);
    let logical: Vec<u8> = (0..6).map(|i| plane.logical_byte(i)).collect();
    assert_eq!(logical, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(plane.packed_bytes(), logical);
}

#[test]
fn test_from_planes_checks_geometry() {
    let desc = FrameDesc::new(4, 2, ColorFormat::Yv12);
    let luma = Plane::new_black(4, 2, 4).unwrap();
    let chroma = Plane::new_black(2, 1, 8).unwrap();

    let frame = Frame::from_planes(desc, vec![luma.clone(), chroma.clone(), chroma.clone()]);
    assert!(frame.is_ok());

    assert!(Frame::from_planes(desc, vec![luma.clone(), chroma.clone()]).is_err());
    assert!(Frame::from_planes(desc, vec![luma.clone(), luma.clone(), chroma]).is_err());
}

#[test]
fn test_plane_validation() {
    assert!(Plane::new_black(0, 2, 4).is_err());
    assert!(Plane::new_black(4, 2, 3).is_err());
    assert!(Plane::new_with_data(4, 2, 4, vec![0; 7]).is_err());
    assert!(Plane::from_packed(2, 2, 4, &[1, 2, 3]).is_err());

    let plane = Plane::from_packed(2, 2, 4, &[1, 2, 3, 4]).unwrap();
    assert_eq!(plane.bytes(), &[1, 2, 0, 0, 3, 4, 0, 0]);
}

#[test]
fn test_desc_display() {
    let desc = FrameDesc::new(640, 480, ColorFormat::Yv12);
    assert_eq!(desc.to_string(), "640x480 YV12");
}
