use std::cmp::Ordering;

use oorandom::Rand32;

use geotz_table::{EntryMatcher, Row};


/// Matches the rows whose keys are in `start..end`, which is partitioned for every table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunMatcher {
    start: u32,
    end:   u32,
}

impl RunMatcher {
    pub(crate) fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl EntryMatcher for RunMatcher {
    fn compare(&self, key: u32, _value: i64) -> Ordering {
        if key < self.start {
            Ordering::Less
        } else if key < self.end {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

/// Rows with strictly ascending keys and non-decreasing, often repeated, small values.
/// Has up to `max_len` rows, and may be empty.
pub(crate) fn random_offsets(rng: &mut Rand32, max_len: u32) -> Vec<Row> {
    let len = rng.rand_range(0..max_len + 1);
    let mut key = rng.rand_range(0..10);
    let mut value = i64::from(rng.rand_range(0..10));

    (0..len)
        .map(|_| {
            let row = Row::new(key, value);
            key += rng.rand_range(1..4);
            value += i64::from(rng.rand_range(0..3));
            row
        })
        .collect()
}

/// Packs `rows` as `PackedTable` records with `value_width`-byte values.
/// The values must fit in that width.
pub(crate) fn pack(rows: &[Row], value_width: u8) -> Vec<u8> {
    let mut bytes = Vec::new();
    for row in rows {
        bytes.extend(row.key.to_le_bytes());
        bytes.extend(&row.value.to_le_bytes()[..usize::from(value_width)]);
    }
    bytes
}
