//! Containment search over start-sorted ranges.
//!
//! The search is a binary search on range starts. Each probe first checks
//! whether the probed block already contains the address; when the loop
//! runs out, the insertion point tells which single block can still hold
//! it: the one right before it.
//!
//! Correct answers require that the ranges are sorted ascending by start
//! and do not overlap. Neither condition is checked while searching.
//! [`SortedRanges`] establishes the ordering by construction and can
//! report overlaps with [`SortedRanges::has_overlaps`].

use std::ops::Deref;

use crate::family::{AddressFamily, V4, V6};
use crate::range::Range;

/// Find the range containing `addr`.
///
/// `ranges` must be sorted ascending by [`Range::start`] and must not
/// contain overlapping blocks, otherwise the result is unspecified.
/// An empty slice never matches.
pub fn find<F: AddressFamily>(ranges: &[Range<F>], addr: F::Addr) -> Option<&Range<F>> {
    let len = ranges.len();
    if len == 0 {
        return None;
    }
    if len == 1 {
        return ranges.first().filter(|r| r.contains(addr));
    }

    let key = F::to_int(addr);

    let mut low = 0usize;
    let mut high = len - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        let range = &ranges[mid];
        if range.contains(addr) {
            return Some(range);
        }

        if range.start() < key {
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    // `low` is the insertion point of `key` among the starts. Only the
    // block just before it can still reach `key`.
    let candidate = if low == 0 {
        &ranges[0]
    } else if low == len {
        &ranges[len - 1]
    } else {
        &ranges[low - 1]
    };

    if candidate.contains(addr) {
        Some(candidate)
    } else {
        None
    }
}

/// Check whether any range contains `addr`.
///
/// Same preconditions as [`find`].
///
/// # Examples
/// ```
/// use iprange::{contains, parse_ipv4_ranges};
///
/// let mut ranges = parse_ipv4_ranges("192.168.0.0/16\n10.0.0.0/8\n");
/// ranges.sort_by_key(|r| r.start());
///
/// assert!(contains(&ranges, "10.20.30.40".parse().unwrap()));
/// assert!(!contains(&ranges, "8.8.8.8".parse().unwrap()));
/// ```
#[inline]
pub fn contains<F: AddressFamily>(ranges: &[Range<F>], addr: F::Addr) -> bool {
    find(ranges, addr).is_some()
}

/// Ranges sorted ascending by start.
///
/// The only way to build one is through a sort, so searching it never
/// violates the ordering precondition. It is immutable; to change the
/// ranges build a new value (see [`SharedRanges`](crate::SharedRanges)
/// for swapping it under live readers).
#[derive(Clone)]
pub struct SortedRanges<F: AddressFamily> {
    ranges: Vec<Range<F>>,
}

/// Sorted IPv4 ranges.
pub type Ipv4Ranges = SortedRanges<V4>;

/// Sorted IPv6 ranges.
pub type Ipv6Ranges = SortedRanges<V6>;

impl<F: AddressFamily> SortedRanges<F> {
    /// Sort `ranges` by start.
    pub fn new(mut ranges: Vec<Range<F>>) -> Self {
        ranges.sort_unstable_by_key(|r| r.start());
        Self { ranges }
    }

    /// An empty collection.
    pub fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Check whether any range contains `addr`.
    #[inline]
    pub fn contains(&self, addr: F::Addr) -> bool {
        contains(&self.ranges, addr)
    }

    /// Find the range containing `addr`.
    #[inline]
    pub fn find(&self, addr: F::Addr) -> Option<&Range<F>> {
        find(&self.ranges, addr)
    }

    /// Check whether any two ranges share an address.
    ///
    /// Search results are only reliable when this returns `false`.
    pub fn has_overlaps(&self) -> bool {
        self.ranges.windows(2).any(|w| w[0].overlaps(&w[1]))
    }

    /// Get the ranges as a slice.
    pub fn as_slice(&self) -> &[Range<F>] {
        &self.ranges
    }

    /// Take back the sorted vector.
    pub fn into_inner(self) -> Vec<Range<F>> {
        self.ranges
    }
}

impl<F: AddressFamily> Default for SortedRanges<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: AddressFamily> Deref for SortedRanges<F> {
    type Target = [Range<F>];

    fn deref(&self) -> &[Range<F>] {
        &self.ranges
    }
}

impl<F: AddressFamily> From<Vec<Range<F>>> for SortedRanges<F> {
    fn from(ranges: Vec<Range<F>>) -> Self {
        Self::new(ranges)
    }
}

impl<F: AddressFamily> FromIterator<Range<F>> for SortedRanges<F> {
    fn from_iter<I: IntoIterator<Item = Range<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F: AddressFamily> std::fmt::Debug for SortedRanges<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortedRanges")
            .field("family", &F::NAME)
            .field("len", &self.ranges.len())
            .finish()
    }
}
