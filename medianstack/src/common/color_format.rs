use strum_macros::{Display, EnumString};

use crate::common::error::{Error, Result};

/// Pixel layouts a frame can carry.
///
/// Planar formats store luma and the two chroma planes separately; the packed formats keep
/// every channel of a pixel adjacent in a single plane.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ColorFormat {
    /// Planar YUV 4:2:0.
    Yv12,
    /// Planar YUV 4:2:2.
    Yv16,
    /// Planar YUV 4:4:4.
    Yv24,
    /// Luma plane only.
    Y8,
    /// Packed YUV 4:2:2, bytes ordered Y0 U Y1 V.
    Yuy2,
    /// Packed BGR, 8 bits per channel.
    Rgb24,
    /// Packed BGRA, 8 bits per channel.
    Rgb32,
    /// Packed BGRA, 16-bit little-endian channels.
    Rgb64,
}

impl ColorFormat {
    /// Parses a host format name such as `"YV12"` or `"rgb32"`.
    pub fn from_name(name: &str) -> Result<ColorFormat> {
        name.trim()
            .parse()
            .map_err(|_| Error::UnsupportedFormat(name.to_string()))
    }

    pub fn is_planar(&self) -> bool {
        matches!(
            self,
            ColorFormat::Yv12 | ColorFormat::Yv16 | ColorFormat::Yv24 | ColorFormat::Y8
        )
    }

    pub fn plane_count(&self) -> usize {
        match self {
            ColorFormat::Yv12 | ColorFormat::Yv16 | ColorFormat::Yv24 => 3,
            _ => 1,
        }
    }

    /// Bytes occupied by one pixel in the first plane.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            ColorFormat::Yv12 | ColorFormat::Yv16 | ColorFormat::Yv24 | ColorFormat::Y8 => 1,
            ColorFormat::Yuy2 => 2,
            ColorFormat::Rgb24 => 3,
            ColorFormat::Rgb32 => 4,
            ColorFormat::Rgb64 => 8,
        }
    }

    /// Log2 of the horizontal and vertical chroma subsampling factors.
    pub fn subsampling(&self) -> (u32, u32) {
        match self {
            ColorFormat::Yv12 => (1, 1),
            ColorFormat::Yv16 | ColorFormat::Yuy2 => (1, 0),
            _ => (0, 0),
        }
    }

    /// Row length in bytes and row count of `plane` for a frame of the given size.
    pub fn plane_geometry(&self, width: u32, height: u32, plane: usize) -> (usize, usize) {
        let (width, height) = (width as usize, height as usize);
        if plane == 0 {
            return (width * self.bytes_per_pixel(), height);
        }

        let (shift_x, shift_y) = self.subsampling();
        (width >> shift_x, height >> shift_y)
    }

    pub fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        let (shift_x, shift_y) = self.subsampling();
        let fits = width > 0
            && height > 0
            && width.is_multiple_of(1 << shift_x)
            && height.is_multiple_of(1 << shift_y);

        if !fits {
            return Err(Error::InvalidDimensions {
                color_format: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Every supported color format.
pub const ALL_FORMATS: &[ColorFormat] = &[
    //
    ColorFormat::Yv12,
    ColorFormat::Yv16,
    ColorFormat::Yv24,
    ColorFormat::Y8,
    //
    ColorFormat::Yuy2,
    ColorFormat::Rgb24,
    ColorFormat::Rgb32,
    ColorFormat::Rgb64,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for format in ALL_FORMATS {
            let name = format.to_string();
            assert_eq!(ColorFormat::from_name(&name).unwrap(), *format);
        }
        assert_eq!(ColorFormat::Yv12.to_string(), "YV12");
        assert_eq!(ColorFormat::Rgb64.to_string(), "RGB64");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ColorFormat::from_name("yuy2").unwrap(), ColorFormat::Yuy2);
        assert_eq!(ColorFormat::from_name(" Rgb32 ").unwrap(), ColorFormat::Rgb32);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = ColorFormat::from_name("NV12").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref name) if name == "NV12"));
    }

    #[test]
    fn test_plane_geometry() {
        assert_eq!(ColorFormat::Yv12.plane_geometry(8, 6, 0), (8, 6));
        assert_eq!(ColorFormat::Yv12.plane_geometry(8, 6, 1), (4, 3));
        assert_eq!(ColorFormat::Yv16.plane_geometry(8, 6, 2), (4, 6));
        assert_eq!(ColorFormat::Yv24.plane_geometry(8, 6, 1), (8, 6));
        assert_eq!(ColorFormat::Yuy2.plane_geometry(8, 6, 0), (16, 6));
        assert_eq!(ColorFormat::Rgb64.plane_geometry(3, 2, 0), (24, 2));
    }

    #[test]
    fn test_subsampled_dimensions_must_divide() {
        assert!(ColorFormat::Yv12.validate_dimensions(8, 6).is_ok());
        assert!(ColorFormat::Yv12.validate_dimensions(7, 6).is_err());
        assert!(ColorFormat::Yv12.validate_dimensions(8, 5).is_err());
        assert!(ColorFormat::Yv16.validate_dimensions(8, 5).is_ok());
        assert!(ColorFormat::Yuy2.validate_dimensions(3, 2).is_err());
        assert!(ColorFormat::Rgb24.validate_dimensions(3, 1).is_ok());
        assert!(ColorFormat::Rgb24.validate_dimensions(0, 1).is_err());
    }

    #[test]
    fn test_plane_counts() {
        for format in ALL_FORMATS {
            let expected = match format {
                ColorFormat::Yv12 | ColorFormat::Yv16 | ColorFormat::Yv24 => 3,
                _ => 1,
            };
            assert_eq!(format.plane_count(), expected, "{format}");
        }
    }
}
