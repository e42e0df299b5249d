// Color formats
pub use crate::common::{ALL_FORMATS, ColorFormat};

// Error handling
pub use crate::common::{Error, Result};

// Frames and sources
pub use crate::frame::{DEFAULT_ALIGNMENT, Frame, FrameDesc, Plane};
pub use crate::source::{FrameSource, MemoryClip};

// Compositing
pub use crate::assembler::{Acquisition, FrameStack};
pub use crate::compositor::{
    Compositor, CompositorConfig, DEFAULT_SYNC_SAMPLES, FrameReport, MAX_SYNC_RADIUS,
    MAX_TEMPORAL_RADIUS, MIN_CLIPS, SyncConfig,
};

// Operations
pub use crate::ops::{MAX_DEPTH, Network, Sample, Selector, SyncMatch, composite};
