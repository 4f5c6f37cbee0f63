use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

use crate::{matcher::EntryMatcher, option_structs::NearbySearchOptions, row::Row, search};
use crate::table::OrderedTable;


/// A handle to one row of an [`OrderedTable`] of kind `T`.
///
/// Entries are cheap views produced on demand. Two entries are equal if they have the same key
/// and the same value; their positions and the identity of their tables are not compared. Only
/// entries of the same table kind can be compared at all.
///
/// The [`Display`] form is `TableEntry{key=<key>, value=<value>}`, intended for diagnostics.
pub struct TableEntry<'a, T: ?Sized> {
    table: &'a T,
    index: usize,
    row:   Row,
}

impl<'a, T: OrderedTable + ?Sized> TableEntry<'a, T> {
    /// `row` must be the row at `index` in `table`.
    #[inline]
    #[must_use]
    pub(crate) const fn new(table: &'a T, index: usize, row: Row) -> Self {
        Self { table, index, row }
    }

    #[inline]
    #[must_use]
    pub const fn key(&self) -> u32 {
        self.row.key
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.row.value
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> Row {
        self.row
    }

    /// The entry's 0-based position in its table.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> &'a T {
        self.table
    }

    /// The entry one position later in the table, if any.
    #[inline]
    #[must_use]
    pub fn next_entry(&self) -> Option<Self> {
        self.table.entry(self.index.checked_add(1)?)
    }

    /// The entry one position earlier in the table, if any.
    #[inline]
    #[must_use]
    pub fn previous_entry(&self) -> Option<Self> {
        self.table.entry(self.index.checked_sub(1)?)
    }

    /// Like [`OrderedTable::find_entry`], but starts searching from this entry, which makes
    /// repeated lookups along a path through the table cheap.
    ///
    /// The result has exactly the semantics of [`OrderedTable::find_entry`] on this entry's
    /// table: `None` if nothing matches, and otherwise **an arbitrary matching entry**, which
    /// need not be the same one `find_entry` would return. This entry's key and value need not
    /// have anything to do with `matcher`.
    ///
    /// Uses the table's [`nearby_options`].
    ///
    /// # Speed
    /// This entry is compared first. The search then probes outward, in the direction `matcher`
    /// indicates, at distances `1, 2, 4, ...` until it brackets the matching entries, and binary
    /// searches the bracketed window. If the match is `d` positions away, that costs
    /// `O(log d)` calls to `matcher`.
    ///
    /// After [`max_gallop_steps`] probes without bracketing the match, the rest of the table in
    /// that direction is binary searched instead, so a distant match costs at most a constant
    /// factor more than [`OrderedTable::find_entry`].
    ///
    /// # Correctness
    /// `matcher` must be partitioned with respect to the table; see [`EntryMatcher`].
    ///
    /// [`nearby_options`]: OrderedTable::nearby_options
    /// [`max_gallop_steps`]: NearbySearchOptions::max_gallop_steps
    #[must_use]
    pub fn find_nearby_entry<M>(&self, matcher: &M) -> Option<Self>
    where
        M: EntryMatcher + ?Sized,
    {
        self.find_nearby_entry_with(matcher, self.table.nearby_options())
    }

    /// [`find_nearby_entry`] with explicitly provided options.
    ///
    /// [`find_nearby_entry`]: TableEntry::find_nearby_entry
    #[must_use]
    pub fn find_nearby_entry_with<M>(
        &self,
        matcher: &M,
        options: NearbySearchOptions,
    ) -> Option<Self>
    where
        M: EntryMatcher + ?Sized,
    {
        let (index, row) = search::gallop_search(self.table, matcher, self.index, options)?;
        Some(Self::new(self.table, index, row))
    }
}

#[allow(
    clippy::expl_impl_clone_on_copy,
    reason = "deriving would needlessly require `T: Clone`",
)]
impl<T: ?Sized> Clone for TableEntry<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TableEntry<'_, T> {}

impl<'b, T: ?Sized> PartialEq<TableEntry<'b, T>> for TableEntry<'_, T> {
    #[inline]
    fn eq(&self, other: &TableEntry<'b, T>) -> bool {
        self.row == other.row
    }
}

impl<T: ?Sized> Eq for TableEntry<'_, T> {}

impl<T: ?Sized> Hash for TableEntry<'_, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
    }
}

impl<T: ?Sized> Display for TableEntry<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "TableEntry{{key={}, value={}}}", self.row.key, self.row.value)
    }
}

impl<T: ?Sized> Debug for TableEntry<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TableEntry")
            .field("index", &self.index)
            .field("key", &self.row.key)
            .field("value", &self.row.value)
            .finish_non_exhaustive()
    }
}
