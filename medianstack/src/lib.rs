//! Medianstack - order-statistic compositing of video frames.
//!
//! Every output sample is a median or trimmed mean of the same sample taken from several
//! source frames. The sources are either separate captures of the same material (to
//! suppress dropouts, noise and tape glitches that differ between captures) or the
//! neighboring frames of a single clip.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use medianstack::{Compositor, FrameSource, MemoryClip, SyncConfig};
//!
//! let clips: Vec<Arc<dyn FrameSource>> = vec![capture_a, capture_b, capture_c];
//! let compositor = Compositor::median(clips, true)?.synchronized(SyncConfig::new(3))?;
//!
//! let (frame, report) = compositor.render_with_report(120)?;
//! println!("{report}");
//! ```

pub mod assembler;
pub(crate) mod common;
pub mod compositor;
pub mod frame;
pub mod ops;
pub mod source;

#[cfg(feature = "bench")]
pub mod bench;

pub mod prelude;

pub use prelude::*;
