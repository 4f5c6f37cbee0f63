//! Read-only ordered tables of `(key, value)` rows, searched by caller-supplied three-way
//! matchers instead of exact keys.
//!
//! A table is an immutable sequence of [`Row`]s with strictly ascending `u32` keys and
//! arbitrary `i64` values. [`OrderedTable::find_entry`] binary searches the whole table for an
//! entry that an [`EntryMatcher`] accepts, and [`TableEntry::find_nearby_entry`] performs the
//! same search starting from an entry already in hand, which is much cheaper when successive
//! lookups land close to each other (as when walking along a path of cells).
//!
//! When several entries match, either search returns an arbitrary one of them.

mod row;
mod matcher;
mod option_structs;
mod error;

mod search;
mod entry;
mod table;


pub use self::{
    entry::TableEntry,
    error::TableError,
    matcher::{EntryMatcher, ExactValue, ValueRange},
    option_structs::NearbySearchOptions,
    row::Row,
    table::{Entries, OrderedTable},
};

pub mod tables {
    pub use crate::table::{KEY_WIDTH, MAX_VALUE_WIDTH, PackedTable, SliceTable};
}


// Used by the randomized tests and the `serde` tests; this silences an "unused dependency" lint
// for unit tests.
#[cfg(test)]
use oorandom as _;
#[cfg(test)]
use serde_json as _;
