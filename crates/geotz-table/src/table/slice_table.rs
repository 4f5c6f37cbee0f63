use std::borrow::Borrow;

use tracing::Level as LogLevel;

use crate::{error::TableError, option_structs::NearbySearchOptions};
use crate::row::{first_unordered_key, Row};
use super::OrderedTable;


/// An [`OrderedTable`] over rows which have already been materialized, held in any container
/// that can lend out a `[Row]` slice (such as `Vec<Row>`, `Arc<[Row]>`, or `&[Row]`).
#[derive(Debug, Clone)]
pub struct SliceTable<Rows> {
    rows:           Rows,
    nearby_options: NearbySearchOptions,
}

impl<Rows: Borrow<[Row]>> SliceTable<Rows> {
    /// Checks that the keys of `rows` are strictly ascending.
    pub fn new(rows: Rows) -> Result<Self, TableError> {
        let unordered = first_unordered_key(rows.borrow().iter().map(|row| row.key));

        if let Some((index, previous, key)) = unordered {
            let error = TableError::KeysNotAscending { index, previous, key };
            tracing::event!(LogLevel::DEBUG, "rejected rows of a slice table: {error}");
            return Err(error);
        }

        Ok(Self {
            rows,
            nearby_options: NearbySearchOptions::default(),
        })
    }

    /// Skips checking that the keys of `rows` are strictly ascending, except in debug builds.
    ///
    /// # Correctness
    /// If the keys are not strictly ascending, searches of the table give unspecified results.
    ///
    /// # Panics
    /// With debug assertions enabled, panics if the keys are not strictly ascending.
    #[must_use]
    pub fn new_unchecked(rows: Rows) -> Self {
        debug_assert!(
            first_unordered_key(rows.borrow().iter().map(|row| row.key)).is_none(),
            "the keys of a `SliceTable` must be strictly ascending",
        );

        Self {
            rows,
            nearby_options: NearbySearchOptions::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_nearby_options(mut self, nearby_options: NearbySearchOptions) -> Self {
        self.nearby_options = nearby_options;
        self
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        self.rows.borrow()
    }

    #[inline]
    #[must_use]
    pub fn into_rows(self) -> Rows {
        self.rows
    }
}

impl<Rows: Borrow<[Row]>> OrderedTable for SliceTable<Rows> {
    #[inline]
    fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    #[inline]
    fn row(&self, index: usize) -> Option<Row> {
        self.rows.borrow().get(index).copied()
    }

    #[inline]
    fn nearby_options(&self) -> NearbySearchOptions {
        self.nearby_options
    }
}
