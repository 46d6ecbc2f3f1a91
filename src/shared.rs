//! Shared range collection with hot reload support.
//!
//! Readers take lock-free snapshots through [`ArcSwap`]. A reload builds a
//! complete new [`SortedRanges`] and swaps it in; in-flight queries finish
//! against the snapshot they started with.

use arc_swap::{ArcSwap, Guard};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::ParseOptions;
use crate::family::AddressFamily;
use crate::parse::{parse_file_with, parse_str_with};
use crate::range::Range;
use crate::search::SortedRanges;
use crate::Result;

/// Range collection that can be replaced while being queried.
///
/// # Example
///
/// ```
/// use iprange::{SharedRanges, V4};
///
/// let shared = SharedRanges::<V4>::from_str("10.0.0.0/8");
/// assert!(shared.contains("10.1.2.3".parse().unwrap()));
///
/// shared.reload_from_str("192.168.0.0/16");
/// assert!(!shared.contains("10.1.2.3".parse().unwrap()));
/// assert_eq!(shared.generation(), 1);
/// ```
#[derive(Debug)]
pub struct SharedRanges<F: AddressFamily> {
    /// Current collection, replaced atomically on reload.
    inner: ArcSwap<SortedRanges<F>>,
    /// Options used by the reload helpers.
    options: ParseOptions,
    /// Number of completed reloads.
    generation: AtomicU64,
}

impl<F: AddressFamily> SharedRanges<F> {
    /// Wrap an existing collection.
    pub fn new(ranges: SortedRanges<F>) -> Self {
        Self::with_options(ranges, ParseOptions::default())
    }

    /// Wrap an existing collection, using `options` for later reloads.
    pub fn with_options(ranges: SortedRanges<F>, options: ParseOptions) -> Self {
        Self {
            inner: ArcSwap::from_pointee(ranges),
            options,
            generation: AtomicU64::new(0),
        }
    }

    /// Build from range text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::new(SortedRanges::new(parse_str_with(text, &ParseOptions::default())))
    }

    /// Build from a range file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Build from a range file with custom options.
    pub fn open_with_options(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let ranges = SortedRanges::new(parse_file_with(path, &options)?);
        Ok(Self::with_options(ranges, options))
    }

    /// Get a snapshot of the current collection.
    pub fn load(&self) -> Guard<Arc<SortedRanges<F>>> {
        self.inner.load()
    }

    /// Get an owned handle to the current collection.
    pub fn load_full(&self) -> Arc<SortedRanges<F>> {
        self.inner.load_full()
    }

    /// Check whether the current collection contains `addr`.
    pub fn contains(&self, addr: F::Addr) -> bool {
        self.inner.load().contains(addr)
    }

    /// Find the range containing `addr` in the current collection.
    pub fn find(&self, addr: F::Addr) -> Option<Range<F>> {
        self.inner.load().find(addr).copied()
    }

    /// Number of ranges in the current collection.
    pub fn len(&self) -> usize {
        self.inner.load().len()
    }

    /// Check whether the current collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of reloads performed so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Replace the collection.
    pub fn store(&self, ranges: SortedRanges<F>) {
        let count = ranges.len();
        self.inner.store(Arc::new(ranges));
        self.generation.fetch_add(1, Ordering::SeqCst);
        log::debug!("Swapped in {} {} ranges", count, F::NAME);
    }

    /// Hot reload from range text.
    ///
    /// Returns the number of ranges now loaded.
    pub fn reload_from_str(&self, text: &str) -> usize {
        let ranges = SortedRanges::new(parse_str_with(text, &self.options));
        let count = ranges.len();
        self.store(ranges);
        log::info!("Hot reloaded {} {} ranges from text", count, F::NAME);
        count
    }

    /// Hot reload from a range file.
    ///
    /// On error the current collection stays in place. Returns the number
    /// of ranges now loaded.
    pub fn reload_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let ranges = SortedRanges::new(parse_file_with(path, &self.options)?);
        let count = ranges.len();
        self.store(ranges);
        log::info!("Hot reloaded {} {} ranges from {:?}", count, F::NAME, path);
        Ok(count)
    }
}

impl<F: AddressFamily> Default for SharedRanges<F> {
    fn default() -> Self {
        Self::new(SortedRanges::empty())
    }
}

impl<F: AddressFamily> From<SortedRanges<F>> for SharedRanges<F> {
    fn from(ranges: SortedRanges<F>) -> Self {
        Self::new(ranges)
    }
}
