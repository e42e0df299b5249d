//! Gathers the source frames that feed one output frame.

use std::sync::Arc;

use rayon::prelude::*;

use crate::common::Result;
use crate::compositor::SyncConfig;
use crate::frame::Frame;
use crate::ops::similarity::{SyncMatch, best_offset};
use crate::source::FrameSource;

/// Where the frames of a pixel stack come from.
#[derive(Clone)]
pub enum Acquisition {
    /// Frames `n - radius ..= n + radius` of a single clip.
    Temporal {
        clip: Arc<dyn FrameSource>,
        radius: u32,
    },
    /// Frame `n` of every clip.
    Fixed { clips: Vec<Arc<dyn FrameSource>> },
    /// Frame `n` of clip 0, plus the frame of every other clip that best matches it
    /// within the sync radius.
    Synchronized {
        clips: Vec<Arc<dyn FrameSource>>,
        sync: SyncConfig,
    },
}

/// Frames for one output index, in stack order.
#[derive(Debug, Clone, Default)]
pub struct FrameStack {
    pub frames: Vec<Arc<Frame>>,
    /// Alignment of clips 1.. against clip 0; empty unless synchronized.
    pub matches: Vec<SyncMatch>,
}

impl FrameStack {
    pub fn as_refs(&self) -> Vec<&Frame> {
        self.frames.iter().map(|frame| frame.as_ref()).collect()
    }
}

impl Acquisition {
    /// Number of frames in every stack.
    pub fn depth(&self) -> usize {
        match self {
            Acquisition::Temporal { radius, .. } => 2 * *radius as usize + 1,
            Acquisition::Fixed { clips } | Acquisition::Synchronized { clips, .. } => {
                clips.len()
            }
        }
    }

    pub fn sync(&self) -> Option<&SyncConfig> {
        match self {
            Acquisition::Synchronized { sync, .. } => Some(sync),
            _ => None,
        }
    }

    /// Clip whose descriptor the output takes.
    pub fn reference(&self) -> &Arc<dyn FrameSource> {
        match self {
            Acquisition::Temporal { clip, .. } => clip,
            Acquisition::Fixed { clips } | Acquisition::Synchronized { clips, .. } => &clips[0],
        }
    }

    /// Fetches the stack for output frame `n`. Indices are passed to the clips as is.
    pub fn assemble(&self, n: i64) -> Result<FrameStack> {
        match self {
            Acquisition::Temporal { clip, radius } => {
                let radius = *radius as i64;
                let frames = (n - radius..=n + radius)
                    .map(|index| clip.frame(index))
                    .collect::<Result<Vec<_>>>()?;

                Ok(FrameStack {
                    frames,
                    matches: Vec::new(),
                })
            }
            Acquisition::Fixed { clips } => {
                let frames = clips
                    .iter()
                    .map(|clip| clip.frame(n))
                    .collect::<Result<Vec<_>>>()?;

                Ok(FrameStack {
                    frames,
                    matches: Vec::new(),
                })
            }
            Acquisition::Synchronized { clips, sync } => {
                let reference = clips[0].frame(n)?;

                let aligned = clips[1..]
                    .par_iter()
                    .map(|clip| {
                        best_offset(&reference, clip.as_ref(), n, sync.radius, sync.samples)
                    })
                    .collect::<Result<Vec<_>>>()?;

                let mut frames = Vec::with_capacity(clips.len());
                let mut matches = Vec::with_capacity(aligned.len());
                frames.push(reference);
                for (found, frame) in aligned {
                    matches.push(found);
                    frames.push(frame);
                }

                Ok(FrameStack { frames, matches })
            }
        }
    }
}

impl std::fmt::Debug for Acquisition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Acquisition::Temporal { radius, .. } => {
                f.debug_struct("Temporal").field("radius", radius).finish()
            }
            Acquisition::Fixed { clips } => f
                .debug_struct("Fixed")
                .field("clips", &clips.len())
                .finish(),
            Acquisition::Synchronized { clips, sync } => f
                .debug_struct("Synchronized")
                .field("clips", &clips.len())
                .field("sync", sync)
                .finish(),
        }
    }
}
