pub mod layout;
pub mod order_statistic;
pub mod similarity;

pub use layout::composite;
pub use order_statistic::{MAX_DEPTH, Network, Sample, Selector, window_mean};
pub use similarity::{SyncMatch, best_offset, compare_frames};
