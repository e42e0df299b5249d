//! Validated compositor parameters.

use crate::common::{Error, Result};
use crate::ops::order_statistic::{MAX_DEPTH, Selector};

/// Fewest clips a spatial compositor accepts.
pub const MIN_CLIPS: usize = 3;
/// Largest temporal radius; `2 * 12 + 1` frames fill the whole stack.
pub const MAX_TEMPORAL_RADIUS: u32 = 12;
pub const MAX_SYNC_RADIUS: u32 = 10;
/// Sample positions compared per frame pair unless configured otherwise.
pub const DEFAULT_SYNC_SAMPLES: usize = 4096;

/// Which sorted positions of each pixel stack make it into the output.
///
/// The `low` smallest and `high` largest values are dropped and the remaining `blend`
/// values are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositorConfig {
    low: usize,
    high: usize,
    depth: usize,
    blend: usize,
    process_chroma: bool,
}

impl CompositorConfig {
    /// Plain median of an odd number of values.
    pub fn median(depth: usize, process_chroma: bool) -> Result<Self> {
        if depth.is_multiple_of(2) || !(MIN_CLIPS..=MAX_DEPTH).contains(&depth) {
            return Err(Error::MedianClipCount {
                count: depth,
                min: MIN_CLIPS,
                max: MAX_DEPTH,
            });
        }

        let radius = (depth - 1) / 2;
        Ok(Self::from_limits(depth, radius, radius, process_chroma))
    }

    /// Mean of the values left after dropping `low` smallest and `high` largest.
    pub fn blend(depth: usize, low: usize, high: usize, process_chroma: bool) -> Result<Self> {
        if !(MIN_CLIPS..=MAX_DEPTH).contains(&depth) {
            return Err(Error::ClipCount {
                count: depth,
                min: MIN_CLIPS,
                max: MAX_DEPTH,
            });
        }
        if low >= depth || high >= depth || low + high >= depth {
            return Err(Error::InvalidLimits { low, high, depth });
        }

        Ok(Self::from_limits(depth, low, high, process_chroma))
    }

    /// Median over `radius` frames either side of the current one.
    pub fn temporal(radius: u32, process_chroma: bool) -> Result<Self> {
        if !(1..=MAX_TEMPORAL_RADIUS).contains(&radius) {
            return Err(Error::TemporalRadius {
                radius,
                max: MAX_TEMPORAL_RADIUS,
            });
        }

        let radius = radius as usize;
        Ok(Self::from_limits(
            2 * radius + 1,
            radius,
            radius,
            process_chroma,
        ))
    }

    fn from_limits(depth: usize, low: usize, high: usize, process_chroma: bool) -> Self {
        Self {
            low,
            high,
            depth,
            blend: depth - low - high,
            process_chroma,
        }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn blend_size(&self) -> usize {
        self.blend
    }

    /// Whether chroma planes and alpha are composited rather than copied from clip 0.
    pub fn process_chroma(&self) -> bool {
        self.process_chroma
    }

    /// True when a selection network computes the result instead of a sort.
    pub fn is_fast_eligible(&self) -> bool {
        self.blend == 1 && self.low == self.high && matches!(self.depth, 3 | 5 | 7 | 9)
    }

    pub fn selector(&self) -> Selector {
        Selector::new(self.depth, self.low, self.high)
    }
}

/// Temporal alignment search for synchronized clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncConfig {
    /// Largest offset, in frames, tried in either direction.
    pub radius: u32,
    /// Positions compared per frame pair; `0` compares every luma byte.
    pub samples: usize,
}

impl SyncConfig {
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            samples: DEFAULT_SYNC_SAMPLES,
        }
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SYNC_RADIUS).contains(&self.radius) {
            return Err(Error::SyncRadius {
                radius: self.radius,
                max: MAX_SYNC_RADIUS,
            });
        }
        Ok(())
    }
}
