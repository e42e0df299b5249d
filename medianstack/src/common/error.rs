//! Error types for compositor construction and frame rendering.

use thiserror::Error;

use crate::common::color_format::ColorFormat;
use crate::frame::FrameDesc;

/// Errors that can occur while configuring or running a compositor.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Need an odd number of clips between {min} and {max}, got {count}")]
    MedianClipCount {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Need {min}-{max} clips, got {count}")]
    ClipCount {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid values supplied for low ({low}) and/or high ({high}) limits with {depth} clips")]
    InvalidLimits {
        low: usize,
        high: usize,
        depth: usize,
    },

    #[error("Radius needs to be between 1 and {max}, got {radius}")]
    TemporalRadius { radius: u32, max: u32 },

    #[error("Sync radius needs to be between 1 and {max}, got {radius}")]
    SyncRadius { radius: u32, max: u32 },

    #[error("Sync search requires separate clips, not a temporal median")]
    SyncWithTemporal,

    #[error("Format of all clips must match: clip {index} is {actual}, expected {expected}")]
    FormatMismatch {
        index: usize,
        expected: ColorFormat,
        actual: ColorFormat,
    },

    #[error(
        "Dimensions of all clips must match: clip {index} is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Unsupported color format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid dimensions {width}x{height} for {color_format}")]
    InvalidDimensions {
        color_format: ColorFormat,
        width: u32,
        height: u32,
    },

    #[error("Invalid plane layout: {0}")]
    InvalidPlane(String),

    #[error("Frame {actual} does not match expected {expected}")]
    FrameMismatch { expected: FrameDesc, actual: FrameDesc },

    #[error("Expected {expected} source frames, got {actual}")]
    StackDepth { expected: usize, actual: usize },

    #[error("Clip contains no frames")]
    EmptyClip,

    #[error("Failed to fetch frame {index}: {source}")]
    FrameFetch {
        index: i64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
