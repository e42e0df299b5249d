//! Order-statistic compositing of several clips, or of neighboring frames of one clip.
//!
//! A [`Compositor`] owns its clips and an immutable [`CompositorConfig`]. Each call to
//! [`Compositor::render`] assembles a fresh stack of source frames and computes every
//! output sample from it; nothing is carried over between output frames.

mod config;
mod report;


use std::sync::Arc;

pub use config::{
    CompositorConfig, DEFAULT_SYNC_SAMPLES, MAX_SYNC_RADIUS, MAX_TEMPORAL_RADIUS, MIN_CLIPS,
    SyncConfig,
};
pub use report::FrameReport;

use crate::assembler::Acquisition;
use crate::common::{Error, Result};
use crate::frame::{Frame, FrameDesc};
use crate::ops::layout::composite;
use crate::ops::order_statistic::Selector;
use crate::source::FrameSource;

#[derive(Debug)]
pub struct Compositor {
    config: CompositorConfig,
    selector: Selector,
    acquisition: Acquisition,
    desc: FrameDesc,
}

impl Compositor {
    /// Per-pixel median across an odd number of clips.
    pub fn median(clips: Vec<Arc<dyn FrameSource>>, process_chroma: bool) -> Result<Self> {
        let config = CompositorConfig::median(clips.len(), process_chroma)?;
        Self::spatial(clips, config)
    }

    /// Per-pixel mean of what is left after dropping the `low` smallest and `high` largest
    /// values across clips.
    pub fn median_blend(
        clips: Vec<Arc<dyn FrameSource>>,
        low: usize,
        high: usize,
        process_chroma: bool,
    ) -> Result<Self> {
        let config = CompositorConfig::blend(clips.len(), low, high, process_chroma)?;
        Self::spatial(clips, config)
    }

    /// Per-pixel median over `radius` frames either side of each frame of `clip`.
    pub fn temporal_median(
        clip: Arc<dyn FrameSource>,
        radius: u32,
        process_chroma: bool,
    ) -> Result<Self> {
        let config = CompositorConfig::temporal(radius, process_chroma)?;
        let desc = clip.desc();
        desc.validate()?;

        Ok(Self::build(
            config,
            Acquisition::Temporal { clip, radius },
            desc,
        ))
    }

    /// Aligns clips 1.. to clip 0 before every frame by searching `sync.radius` frames
    /// either side for the best match.
    pub fn synchronized(self, sync: SyncConfig) -> Result<Self> {
        sync.validate()?;

        let clips = match self.acquisition {
            Acquisition::Fixed { clips } | Acquisition::Synchronized { clips, .. } => clips,
            Acquisition::Temporal { .. } => return Err(Error::SyncWithTemporal),
        };

        Ok(Self::build(
            self.config,
            Acquisition::Synchronized { clips, sync },
            self.desc,
        ))
    }

    fn spatial(clips: Vec<Arc<dyn FrameSource>>, config: CompositorConfig) -> Result<Self> {
        let desc = validate_clips(&clips)?;
        Ok(Self::build(config, Acquisition::Fixed { clips }, desc))
    }

    fn build(config: CompositorConfig, acquisition: Acquisition, desc: FrameDesc) -> Self {
        let selector = config.selector();
        let sync = acquisition.sync();

        tracing::debug!(
            "Compositor {}: depth={}, low={}, high={}, blend={}, fast={}, chroma={}, sync_radius={:?}, sync_samples={:?}",
            desc,
            config.depth(),
            config.low(),
            config.high(),
            config.blend_size(),
            selector.is_fast(),
            config.process_chroma(),
            sync.map(|sync| sync.radius),
            sync.map(|sync| sync.samples)
        );

        Self {
            config,
            selector,
            acquisition,
            desc,
        }
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    pub fn acquisition(&self) -> &Acquisition {
        &self.acquisition
    }

    /// Computes output frame `n`.
    pub fn render(&self, n: i64) -> Result<Frame> {
        self.render_with_report(n).map(|(frame, _)| frame)
    }

    /// Computes output frame `n` along with what went into it.
    pub fn render_with_report(&self, n: i64) -> Result<(Frame, FrameReport)> {
        let stack = self.acquisition.assemble(n)?;

        let mut output = Frame::new_black(self.desc)?;
        composite(
            &self.selector,
            self.config.process_chroma(),
            &stack.as_refs(),
            &mut output,
        )?;

        let report = FrameReport {
            frame: n,
            depth: stack.frames.len(),
            sync_radius: self.acquisition.sync().map(|sync| sync.radius),
            matches: stack.matches,
        };
        tracing::debug!("{}", report);

        Ok((output, report))
    }
}

impl FrameSource for Compositor {
    fn desc(&self) -> FrameDesc {
        self.desc
    }

    fn frame(&self, index: i64) -> Result<Arc<Frame>> {
        self.render(index).map(Arc::new)
    }
}

/// Checks that every clip has the format and size of clip 0, and returns that descriptor.
fn validate_clips(clips: &[Arc<dyn FrameSource>]) -> Result<FrameDesc> {
    let expected = clips[0].desc();
    expected.validate()?;

    for (index, clip) in clips.iter().enumerate().skip(1) {
        let actual = clip.desc();

        if actual.color_format != expected.color_format {
            return Err(Error::FormatMismatch {
                index,
                expected: expected.color_format,
                actual: actual.color_format,
            });
        }
        if actual.width != expected.width || actual.height != expected.height {
            return Err(Error::DimensionMismatch {
                index,
                expected_width: expected.width,
                expected_height: expected.height,
                actual_width: actual.width,
                actual_height: actual.height,
            });
        }
    }

    Ok(expected)
}
