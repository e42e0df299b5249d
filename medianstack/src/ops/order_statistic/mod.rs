//! Per-pixel order statistics: median selection and trimmed window means.
//!
//! The kernel is resolved once into a [`Selector`] from the stack depth and the number of
//! discarded low/high values, so the per-sample hot path is a single `match`.

mod network;


pub use network::Network;

/// Largest number of sources that can contribute to one output sample.
pub const MAX_DEPTH: usize = 25;

/// A channel value the compositor can sort and average.
pub trait Sample: Copy + Ord + Default + Send + Sync + std::fmt::Debug + 'static {
    /// Size of one sample in a frame buffer.
    const BYTES: usize;

    fn read_le(bytes: &[u8]) -> Self;

    fn write_le(self, out: &mut [u8]);

    /// Widens into the window accumulator. `MAX_DEPTH` samples of any width fit in `u32`.
    fn widen(self) -> u32;

    /// Narrows a window mean back into a sample.
    fn narrow(value: u32) -> Self;
}

impl Sample for u8 {
    const BYTES: usize = 1;

    #[inline(always)]
    fn read_le(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        out[0] = self;
    }

    #[inline(always)]
    fn widen(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn narrow(value: u32) -> Self {
        value as u8
    }
}

impl Sample for u16 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn read_le(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.to_le_bytes());
    }

    #[inline(always)]
    fn widen(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn narrow(value: u32) -> Self {
        value as u16
    }
}

/// Order-statistic kernel for a fixed stack depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Single median through a fixed selection network.
    Network(Network),
    /// Sort (unless every value is kept), then average positions `[low, low + blend)`.
    Window {
        depth: usize,
        low: usize,
        blend: usize,
    },
}

impl Selector {
    /// Resolves the kernel for `depth` values with the `low` smallest and `high` largest
    /// discarded. A network is used only for a single centered value at depth 3, 5, 7 or 9.
    ///
    /// # Panics
    ///
    /// If `depth` is outside `1..=MAX_DEPTH` or `low + high >= depth`. Use
    /// [`CompositorConfig`](crate::compositor::CompositorConfig) for validated limits.
    pub fn new(depth: usize, low: usize, high: usize) -> Selector {
        assert!(
            (1..=MAX_DEPTH).contains(&depth),
            "depth must be in 1..={MAX_DEPTH}"
        );
        assert!(low + high < depth, "low + high must leave at least one value");

        let blend = depth - low - high;
        match Network::for_depth(depth) {
            Some(network) if blend == 1 && low == high => Selector::Network(network),
            _ => Selector::Window { depth, low, blend },
        }
    }

    /// Returns true if a selection network is used instead of a sort.
    pub fn is_fast(&self) -> bool {
        matches!(self, Selector::Network(_))
    }

    pub fn depth(&self) -> usize {
        match self {
            Selector::Network(network) => network.depth(),
            Selector::Window { depth, .. } => *depth,
        }
    }

    /// Computes the output sample for one stack of `depth()` values.
    ///
    /// The window path may reorder `values`; the network path leaves them untouched.
    ///
    /// # Panics
    ///
    /// If `values` holds fewer than `depth()` items.
    #[inline]
    pub fn select<T: Sample>(&self, values: &mut [T]) -> T {
        debug_assert_eq!(values.len(), self.depth());

        match *self {
            Selector::Network(network) => network.median(values),
            Selector::Window { depth, low, blend } => window_mean(values, depth, low, blend),
        }
    }
}

/// Truncated mean of sorted positions `[low, low + blend)`.
///
/// Sorting is skipped when the window covers the whole stack.
///
/// # Panics
///
/// If `values` holds fewer than `depth` items, `blend` is zero, or `low + blend > depth`.
#[inline]
pub fn window_mean<T: Sample>(values: &mut [T], depth: usize, low: usize, blend: usize) -> T {
    let values = &mut values[..depth];
    if blend != depth {
        values.sort_unstable();
    }

    if blend == 1 {
        return values[low];
    }

    let sum: u32 = values[low..low + blend].iter().map(|v| v.widen()).sum();
    T::narrow(sum / blend as u32)
}
