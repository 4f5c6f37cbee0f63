mod slice_table;
mod packed_table;


use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::iter::FusedIterator;

use crate::{entry::TableEntry, matcher::EntryMatcher, option_structs::NearbySearchOptions};
use crate::{row::Row, search};


pub use self::{
    packed_table::{KEY_WIDTH, MAX_VALUE_WIDTH, PackedTable},
    slice_table::SliceTable,
};


/// An immutable sequence of rows, sorted by strictly ascending key, searched with
/// [`EntryMatcher`]s rather than exact keys.
///
/// Implementors provide only positional access; every search is a provided method.
///
/// # Correctness
/// Implementors must uphold these, and searches assume them without checking:
/// - `row(index)` is `Some` for every `index < len()` and `None` otherwise;
/// - keys are strictly ascending by position (so there are no duplicate keys);
/// - nothing about the rows changes while the table is borrowed.
///
/// An implementation which violates them causes unspecified search results, but searches will
/// not panic. In particular, a missing row ends a search as though nothing matched.
pub trait OrderedTable {
    /// The number of rows in the table.
    #[must_use]
    fn len(&self) -> usize;

    /// The row at the given 0-based position, or `None` if `index >= self.len()`.
    #[must_use]
    fn row(&self, index: usize) -> Option<Row>;

    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The options used by [`TableEntry::find_nearby_entry`] for entries of this table.
    #[inline]
    #[must_use]
    fn nearby_options(&self) -> NearbySearchOptions {
        NearbySearchOptions::default()
    }

    #[inline]
    #[must_use]
    fn entry(&self, index: usize) -> Option<TableEntry<'_, Self>> {
        let row = self.row(index)?;
        Some(TableEntry::new(self, index, row))
    }

    #[inline]
    #[must_use]
    fn first_entry(&self) -> Option<TableEntry<'_, Self>> {
        self.entry(0)
    }

    #[inline]
    #[must_use]
    fn last_entry(&self) -> Option<TableEntry<'_, Self>> {
        self.entry(self.len().checked_sub(1)?)
    }

    /// Iterate over every entry, in ascending key order.
    #[inline]
    fn entries(&self) -> Entries<'_, Self> {
        Entries {
            table: self,
            front: 0,
            back:  self.len(),
        }
    }

    /// Find an entry for which `matcher` returns [`Ordering::Equal`], by binary search over the
    /// whole table. Returns `None` if no entry matches.
    ///
    /// # Ties
    /// **If multiple entries match, an arbitrary one of them is returned.** It is neither
    /// guaranteed to be the first nor the last of the matching run, and callers must not depend
    /// on which is chosen. It is, however, always one for which `matcher` returns `Equal`.
    ///
    /// # Speed
    /// Makes `O(log n)` calls to `matcher`.
    ///
    /// # Correctness
    /// `matcher` must be partitioned with respect to this table; see [`EntryMatcher`].
    ///
    /// [`Ordering::Equal`]: std::cmp::Ordering::Equal
    #[must_use]
    fn find_entry<M>(&self, matcher: &M) -> Option<TableEntry<'_, Self>>
    where
        M: EntryMatcher + ?Sized,
    {
        let (index, row) = search::binary_search(self, matcher, 0, self.len())?;
        Some(TableEntry::new(self, index, row))
    }

    /// Find the entry with the greatest key less than or equal to `key`, if there is one.
    ///
    /// This is the entry which covers `key` in a table of range boundaries. `key` itself need
    /// not be present in the table.
    #[must_use]
    fn find_floor_entry(&self, key: u32) -> Option<TableEntry<'_, Self>> {
        let (index, row) = search::floor_search(self, key)?;
        Some(TableEntry::new(self, index, row))
    }
}

/// An iterator over the entries of an [`OrderedTable`], returned by [`OrderedTable::entries`].
pub struct Entries<'a, T: ?Sized> {
    table: &'a T,
    /// The next position yielded from the front.
    front: usize,
    /// One past the next position yielded from the back.
    back:  usize,
}

impl<'a, T: OrderedTable + ?Sized> Iterator for Entries<'a, T> {
    type Item = TableEntry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let entry = self.table.entry(self.front);
        self.front += 1;
        entry
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back.saturating_sub(self.front)))
    }
}

impl<T: OrderedTable + ?Sized> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.table.entry(self.back)
    }
}

impl<T: OrderedTable + ?Sized> FusedIterator for Entries<'_, T> {}

impl<T: ?Sized> Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Entries")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}
