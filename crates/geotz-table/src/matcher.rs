use std::cmp::Ordering;
use std::ops::Range;


/// A three-way predicate which drives the binary searches of an [`OrderedTable`].
///
/// [`compare`] returns the ordering of the probed entry *relative to the sought entry*:
///
/// - [`Ordering::Less`]: the probed entry is before the sought entry; search higher.
/// - [`Ordering::Equal`]: the probed entry is a sought entry.
/// - [`Ordering::Greater`]: the probed entry is after the sought entry; search lower.
///
/// This is the same convention as the closure of [`slice::binary_search_by`].
///
/// # Correctness
/// A matcher must be partitioned with respect to the table it is used on: walking the table in
/// key order, every `Less` entry must come before every `Equal` entry, and every `Equal` entry
/// must come before every `Greater` entry. The `Equal` run may be empty.
///
/// Nothing checks this. A matcher that is not partitioned makes search results unspecified, but
/// never causes a panic.
///
/// [`OrderedTable`]: crate::OrderedTable
/// [`compare`]: EntryMatcher::compare
pub trait EntryMatcher {
    #[must_use]
    fn compare(&self, key: u32, value: i64) -> Ordering;
}

impl<F> EntryMatcher for F
where
    F: Fn(u32, i64) -> Ordering,
{
    #[inline]
    fn compare(&self, key: u32, value: i64) -> Ordering {
        self(key, value)
    }
}

/// Matches entries whose value is exactly the given value.
///
/// Only partitioned for tables whose values are non-decreasing in key order, such as tables of
/// boundary offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactValue(pub i64);

impl EntryMatcher for ExactValue {
    #[inline]
    fn compare(&self, _key: u32, value: i64) -> Ordering {
        value.cmp(&self.0)
    }
}

/// Matches entries whose value lies in the half-open range `start..end`.
///
/// Values below `start` compare [`Less`], and values at or above `end` compare [`Greater`].
/// An empty range matches nothing.
///
/// Like [`ExactValue`], this is only partitioned for tables with non-decreasing values.
///
/// [`Less`]: Ordering::Less
/// [`Greater`]: Ordering::Greater
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub start: i64,
    pub end:   i64,
}

impl ValueRange {
    #[inline]
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl From<Range<i64>> for ValueRange {
    #[inline]
    fn from(range: Range<i64>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl EntryMatcher for ValueRange {
    fn compare(&self, _key: u32, value: i64) -> Ordering {
        if value < self.start {
            Ordering::Less
        } else if value < self.end {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}
