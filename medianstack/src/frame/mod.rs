mod stride;

#[cfg(test)]
mod tests;

use crate::common::{ColorFormat, Error, Result};

use stride::{add_stride_padding, align_stride, strip_stride_padding};

/// Row alignment used by [`Frame::new_black`].
pub const DEFAULT_ALIGNMENT: usize = 4;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct FrameDesc {
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
}

impl FrameDesc {
    pub fn new(width: u32, height: u32, color_format: ColorFormat) -> Self {
        Self {
            width,
            height,
            color_format,
        }
    }

    /// Checks that the size is non-zero and compatible with the format's chroma subsampling.
    pub fn validate(&self) -> Result<()> {
        self.color_format
            .validate_dimensions(self.width, self.height)
    }

    pub fn plane_count(&self) -> usize {
        self.color_format.plane_count()
    }

    /// Row length in bytes and row count of `plane`.
    pub fn plane_geometry(&self, plane: usize) -> (usize, usize) {
        self.color_format
            .plane_geometry(self.width, self.height, plane)
    }
}

impl std::fmt::Display for FrameDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.color_format)
    }
}

/// One plane of pixel data. Rows start every `stride` bytes; only the first `row_bytes`
/// bytes of a row carry samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    row_bytes: usize,
    height: usize,
    stride: usize,
    bytes: Vec<u8>,
}

impl Plane {
    pub fn new_black(row_bytes: usize, height: usize, stride: usize) -> Result<Plane> {
        Plane::new_with_data(row_bytes, height, stride, vec![0; stride * height])
    }

    pub fn new_with_data(
        row_bytes: usize,
        height: usize,
        stride: usize,
        bytes: Vec<u8>,
    ) -> Result<Plane> {
        if row_bytes == 0 || height == 0 {
            return Err(Error::InvalidPlane(format!(
                "empty plane {}x{}",
                row_bytes, height
            )));
        }
        if stride < row_bytes {
            return Err(Error::InvalidPlane(format!(
                "stride {} is smaller than row size {}",
                stride, row_bytes
            )));
        }
        if bytes.len() != stride * height {
            return Err(Error::InvalidPlane(format!(
                "bytes length {} does not match expected size {}",
                bytes.len(),
                stride * height
            )));
        }

        Ok(Plane {
            row_bytes,
            height,
            stride,
            bytes,
        })
    }

    /// Builds a plane from tightly packed rows, padding each row out to `stride`.
    pub fn from_packed(
        row_bytes: usize,
        height: usize,
        stride: usize,
        packed: &[u8],
    ) -> Result<Plane> {
        if packed.len() != row_bytes * height {
            return Err(Error::InvalidPlane(format!(
                "packed length {} does not match {}x{}",
                packed.len(),
                row_bytes,
                height
            )));
        }
        if stride < row_bytes {
            return Err(Error::InvalidPlane(format!(
                "stride {} is smaller than row size {}",
                stride, row_bytes
            )));
        }

        let bytes = add_stride_padding(packed, row_bytes, height, stride);
        Plane::new_with_data(row_bytes, height, stride, bytes)
    }

    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw bytes including stride padding.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Samples of row `y`, without padding.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.bytes[start..start + self.row_bytes]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.bytes[start..start + self.row_bytes]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.height).map(|y| self.row(y))
    }

    /// Byte at logical position `index`, counting row by row and skipping padding.
    #[inline]
    pub fn logical_byte(&self, index: usize) -> u8 {
        self.bytes[(index / self.row_bytes) * self.stride + index % self.row_bytes]
    }

    /// Number of sample bytes, excluding padding.
    pub fn logical_len(&self) -> usize {
        self.row_bytes * self.height
    }

    /// Returns the rows tightly packed.
    pub fn packed_bytes(&self) -> Vec<u8> {
        strip_stride_padding(&self.bytes, self.row_bytes, self.height, self.stride)
    }

    fn same_geometry(&self, row_bytes: usize, height: usize) -> bool {
        self.row_bytes == row_bytes && self.height == height
    }
}

#[derive(Clone, Debug)]
pub struct Frame {
    desc: FrameDesc,
    planes: Vec<Plane>,
}

impl Frame {
    /// Allocates a zeroed frame with 4-byte aligned rows.
    pub fn new_black(desc: FrameDesc) -> Result<Frame> {
        Frame::new_with_alignment(desc, DEFAULT_ALIGNMENT)
    }

    /// Allocates a zeroed frame whose row strides are multiples of `alignment`.
    pub fn new_with_alignment(desc: FrameDesc, alignment: usize) -> Result<Frame> {
        desc.validate()?;
        if !alignment.is_power_of_two() {
            return Err(Error::InvalidPlane(format!(
                "alignment {} is not a power of two",
                alignment
            )));
        }

        let planes = (0..desc.plane_count())
            .map(|plane| {
                let (row_bytes, height) = desc.plane_geometry(plane);
                Plane::new_black(row_bytes, height, align_stride(row_bytes, alignment))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Frame { desc, planes })
    }

    /// Wraps existing planes, checking them against the descriptor.
    pub fn from_planes(desc: FrameDesc, planes: Vec<Plane>) -> Result<Frame> {
        desc.validate()?;

        if planes.len() != desc.plane_count() {
            return Err(Error::InvalidPlane(format!(
                "{} needs {} planes, got {}",
                desc.color_format,
                desc.plane_count(),
                planes.len()
            )));
        }

        for (index, plane) in planes.iter().enumerate() {
            let (row_bytes, height) = desc.plane_geometry(index);
            if !plane.same_geometry(row_bytes, height) {
                return Err(Error::InvalidPlane(format!(
                    "plane {} of {} is {}x{}, expected {}x{}",
                    index,
                    desc,
                    plane.row_bytes(),
                    plane.height(),
                    row_bytes,
                    height
                )));
            }
        }

        Ok(Frame { desc, planes })
    }

    pub fn desc(&self) -> &FrameDesc {
        &self.desc
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    pub fn plane_mut(&mut self, index: usize) -> &mut Plane {
        &mut self.planes[index]
    }

    /// All planes concatenated without stride padding.
    pub fn packed_bytes(&self) -> Vec<u8> {
        self.planes.iter().flat_map(|p| p.packed_bytes()).collect()
    }
}
