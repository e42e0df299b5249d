/// Rounds `n` up to a multiple of `alignment` (a power of two).
pub(crate) fn align_stride(n: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    (n + alignment - 1) & !(alignment - 1)
}

/// Adds stride padding to tightly packed rows.
pub(crate) fn add_stride_padding(
    src: &[u8],
    row_bytes: usize,
    height: usize,
    stride: usize,
) -> Vec<u8> {
    if row_bytes == stride {
        return src.to_vec();
    }

    let mut padded = vec![0; stride * height];
    for y in 0..height {
        padded[y * stride..y * stride + row_bytes]
            .copy_from_slice(&src[y * row_bytes..y * row_bytes + row_bytes]);
    }
    padded
}

/// Strips stride padding, returning tightly packed rows.
pub(crate) fn strip_stride_padding(
    src: &[u8],
    row_bytes: usize,
    height: usize,
    stride: usize,
) -> Vec<u8> {
    if row_bytes == stride {
        return src.to_vec();
    }

    let mut packed = Vec::with_capacity(row_bytes * height);
    for y in 0..height {
        packed.extend_from_slice(&src[y * stride..y * stride + row_bytes]);
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_stride() {
        assert_eq!(align_stride(0, 4), 0);
        assert_eq!(align_stride(1, 4), 4);
        assert_eq!(align_stride(4, 4), 4);
        assert_eq!(align_stride(13, 16), 16);
        assert_eq!(align_stride(7, 1), 7);
    }

    #[test]
    fn test_padding_round_trip() {
        let packed: Vec<u8> = (0..6).collect();
        let padded = add_stride_padding(&packed, 3, 2, 5);
        assert_eq!(padded, vec![0, 1, 2, 0, 0, 3, 4, 5, 0, 0]);
        assert_eq!(strip_stride_padding(&padded, 3, 2, 5), packed);
    }
}
