//! Frame providers the compositor pulls source frames from.

use std::sync::Arc;

use crate::common::{Error, Result};
use crate::frame::{Frame, FrameDesc};

/// A clip that can hand out frames by index.
///
/// Every frame returned must match [`FrameSource::desc`]. Indices outside the clip are
/// passed through untouched; whether they are clamped, repeated or rejected is up to the
/// implementation.
pub trait FrameSource: Send + Sync {
    fn desc(&self) -> FrameDesc;

    fn frame(&self, index: i64) -> Result<Arc<Frame>>;
}

/// In-memory clip. Out-of-range indices are clamped to the first or last frame.
#[derive(Clone, Debug)]
pub struct MemoryClip {
    desc: FrameDesc,
    frames: Vec<Arc<Frame>>,
}

impl MemoryClip {
    pub fn new(frames: Vec<Frame>) -> Result<MemoryClip> {
        MemoryClip::from_shared(frames.into_iter().map(Arc::new).collect())
    }

    pub fn from_shared(frames: Vec<Arc<Frame>>) -> Result<MemoryClip> {
        let desc = *frames.first().ok_or(Error::EmptyClip)?.desc();

        if let Some(frame) = frames.iter().find(|frame| *frame.desc() != desc) {
            return Err(Error::FrameMismatch {
                expected: desc,
                actual: *frame.desc(),
            });
        }

        Ok(MemoryClip { desc, frames })
    }

    /// A clip that shows the same frame at every index.
    pub fn still(frame: Frame) -> MemoryClip {
        MemoryClip {
            desc: *frame.desc(),
            frames: vec![Arc::new(frame)],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSource for MemoryClip {
    fn desc(&self) -> FrameDesc {
        self.desc
    }

    fn frame(&self, index: i64) -> Result<Arc<Frame>> {
        let last = self.frames.len() as i64 - 1;
        let index = index.clamp(0, last) as usize;
        Ok(Arc::clone(&self.frames[index]))
    }
}
