//! Median selection networks for the stack depths that have a known minimal network.
//!
//! Each network copies its input into a local array and runs a fixed sequence of
//! compare-exchange steps until the middle element is in place. The caller's buffer is
//! never touched.

use super::Sample;

/// A fixed selection network, keyed by the stack depth it handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Median3,
    Median5,
    Median7,
    Median9,
}

impl Network {
    /// Returns the network for `depth`, or `None` when no network exists for it.
    pub fn for_depth(depth: usize) -> Option<Network> {
        match depth {
            3 => Some(Network::Median3),
            5 => Some(Network::Median5),
            7 => Some(Network::Median7),
            9 => Some(Network::Median9),
            _ => None,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Network::Median3 => 3,
            Network::Median5 => 5,
            Network::Median7 => 7,
            Network::Median9 => 9,
        }
    }

    /// Median of the first `depth()` values.
    #[inline]
    pub fn median<T: Sample>(&self, values: &[T]) -> T {
        match self {
            Network::Median3 => median3(values),
            Network::Median5 => median5(values),
            Network::Median7 => median7(values),
            Network::Median9 => median9(values),
        }
    }
}

#[inline(always)]
fn sort2<T: Sample>(v: &mut [T], a: usize, b: usize) {
    if v[a] > v[b] {
        v.swap(a, b);
    }
}

/// Median of 3 elements (3 exchanges).
#[inline]
pub(crate) fn median3<T: Sample>(values: &[T]) -> T {
    let mut v = [values[0], values[1], values[2]];
    sort2(&mut v, 0, 1);
    sort2(&mut v, 1, 2);
    sort2(&mut v, 0, 1);
    v[1]
}

/// Median of 5 elements (7 exchanges).
#[inline]
pub(crate) fn median5<T: Sample>(values: &[T]) -> T {
    let mut v = [values[0], values[1], values[2], values[3], values[4]];
    sort2(&mut v, 0, 1);
    sort2(&mut v, 3, 4);
    sort2(&mut v, 0, 3);
    sort2(&mut v, 1, 4);
    sort2(&mut v, 1, 2);
    sort2(&mut v, 2, 3);
    sort2(&mut v, 1, 2);
    v[2]
}

/// Median of 7 elements (13 exchanges).
#[inline]
pub(crate) fn median7<T: Sample>(values: &[T]) -> T {
    let mut v = [
        values[0], values[1], values[2], values[3], values[4], values[5], values[6],
    ];
    sort2(&mut v, 0, 5);
    sort2(&mut v, 0, 3);
    sort2(&mut v, 1, 6);
    sort2(&mut v, 2, 4);
    sort2(&mut v, 0, 1);
    sort2(&mut v, 3, 5);
    sort2(&mut v, 2, 6);
    sort2(&mut v, 2, 3);
    sort2(&mut v, 3, 6);
    sort2(&mut v, 4, 5);
    sort2(&mut v, 1, 4);
    sort2(&mut v, 1, 3);
    sort2(&mut v, 3, 4);
    v[3]
}

/// Median of 9 elements (19 exchanges).
#[inline]
pub(crate) fn median9<T: Sample>(values: &[T]) -> T {
    let mut v = [
        values[0], values[1], values[2], values[3], values[4], values[5], values[6], values[7],
        values[8],
    ];

    // Sort the three columns
    sort2(&mut v, 1, 2);
    sort2(&mut v, 4, 5);
    sort2(&mut v, 7, 8);
    sort2(&mut v, 0, 1);
    sort2(&mut v, 3, 4);
    sort2(&mut v, 6, 7);
    sort2(&mut v, 1, 2);
    sort2(&mut v, 4, 5);
    sort2(&mut v, 7, 8);

    // Max of mins, median of medians, min of maxes
    sort2(&mut v, 0, 3);
    sort2(&mut v, 5, 8);
    sort2(&mut v, 4, 7);
    sort2(&mut v, 3, 6);
    sort2(&mut v, 1, 4);
    sort2(&mut v, 2, 5);
    sort2(&mut v, 4, 7);
    sort2(&mut v, 4, 2);
    sort2(&mut v, 6, 4);
    sort2(&mut v, 4, 2);
    v[4]
}
