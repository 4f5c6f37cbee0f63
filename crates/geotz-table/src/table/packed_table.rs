use std::borrow::Borrow;

use tracing::Level as LogLevel;

use crate::{error::TableError, option_structs::NearbySearchOptions};
use crate::row::{first_unordered_key, Row};
use super::OrderedTable;


/// The number of bytes of a [`PackedTable`] record's key.
pub const KEY_WIDTH: usize = 4;
/// The maximum number of bytes of a [`PackedTable`] record's value.
pub const MAX_VALUE_WIDTH: u8 = 8;


/// An [`OrderedTable`] read directly from fixed-width records, held in any container that can
/// lend out a `[u8]` slice.
///
/// Each record is a little-endian `u32` key, followed by a little-endian two's-complement value
/// of `value_width` bytes, which is sign-extended to an `i64`. Records are packed back to back
/// with no header or padding. Rows are decoded on demand, so searches read only the records
/// they probe.
#[derive(Debug, Clone)]
pub struct PackedTable<Bytes> {
    bytes:          Bytes,
    /// In `1..=MAX_VALUE_WIDTH`.
    value_width:    u8,
    /// The number of whole records in `bytes`.
    len:            usize,
    nearby_options: NearbySearchOptions,
}

impl<Bytes: Borrow<[u8]>> PackedTable<Bytes> {
    /// Checks the record layout and that the keys are strictly ascending.
    pub fn new(bytes: Bytes, value_width: u8) -> Result<Self, TableError> {
        let table = Self::with_layout(bytes, value_width)?;

        if let Some((index, previous, key)) = table.first_unordered_key() {
            let error = TableError::KeysNotAscending { index, previous, key };
            tracing::event!(LogLevel::DEBUG, "rejected records of a packed table: {error}");
            return Err(error);
        }

        Ok(table)
    }

    /// Checks the record layout, but skips checking that the keys are strictly ascending,
    /// except in debug builds.
    ///
    /// # Correctness
    /// If the keys are not strictly ascending, searches of the table give unspecified results.
    ///
    /// # Panics
    /// With debug assertions enabled, panics if the keys are not strictly ascending.
    pub fn new_unchecked(bytes: Bytes, value_width: u8) -> Result<Self, TableError> {
        let table = Self::with_layout(bytes, value_width)?;

        debug_assert!(
            table.first_unordered_key().is_none(),
            "the keys of a `PackedTable` must be strictly ascending",
        );

        Ok(table)
    }

    fn with_layout(bytes: Bytes, value_width: u8) -> Result<Self, TableError> {
        if value_width == 0 || value_width > MAX_VALUE_WIDTH {
            let error = TableError::InvalidValueWidth { width: value_width };
            tracing::event!(LogLevel::DEBUG, "rejected a packed table: {error}");
            return Err(error);
        }

        let record_len = KEY_WIDTH + usize::from(value_width);
        let byte_len = bytes.borrow().len();
        if byte_len % record_len != 0 {
            let error = TableError::TruncatedRecords { len: byte_len, record_len };
            tracing::event!(LogLevel::DEBUG, "rejected a packed table: {error}");
            return Err(error);
        }

        Ok(Self {
            bytes,
            value_width,
            len: byte_len / record_len,
            nearby_options: NearbySearchOptions::default(),
        })
    }

    fn first_unordered_key(&self) -> Option<(usize, u32, u32)> {
        first_unordered_key((0..self.len).filter_map(|index| self.row(index).map(|row| row.key)))
    }

    #[inline]
    #[must_use]
    pub fn with_nearby_options(mut self, nearby_options: NearbySearchOptions) -> Self {
        self.nearby_options = nearby_options;
        self
    }

    #[inline]
    #[must_use]
    pub const fn value_width(&self) -> u8 {
        self.value_width
    }

    /// The length in bytes of each record.
    #[inline]
    #[must_use]
    pub fn record_len(&self) -> usize {
        KEY_WIDTH + usize::from(self.value_width)
    }

    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.bytes.borrow()
    }

    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl<Bytes: Borrow<[u8]>> OrderedTable for PackedTable<Bytes> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn row(&self, index: usize) -> Option<Row> {
        if index >= self.len {
            return None;
        }

        let record_len = self.record_len();
        let start = index.checked_mul(record_len)?;
        let record = self.bytes.borrow().get(start..start.checked_add(record_len)?)?;
        let (key, value) = record.split_at_checked(KEY_WIDTH)?;

        let key = u32::from_le_bytes(key.try_into().ok()?);
        Some(Row::new(key, sign_extend(value)))
    }

    #[inline]
    fn nearby_options(&self) -> NearbySearchOptions {
        self.nearby_options
    }
}

/// Interpret up to 8 little-endian bytes as a two's-complement integer of that width.
fn sign_extend(bytes: &[u8]) -> i64 {
    let negative = bytes.last().is_some_and(|&high| high & 0x80 != 0);
    let mut extended = if negative { [u8::MAX; 8] } else { [0; 8] };

    for (dst, &src) in extended.iter_mut().zip(bytes) {
        *dst = src;
    }

    i64::from_le_bytes(extended)
}
