//! The binary searches shared by every [`OrderedTable`].
//!
//! Each function returns the position and contents of the row it settles on. A row that a table
//! fails to produce, despite being below `table.len()`, ends the search with `None`.

use std::cmp::Ordering;

use tracing::Level as LogLevel;

use crate::{matcher::EntryMatcher, option_structs::NearbySearchOptions, row::Row};
use crate::table::OrderedTable;


#[inline]
fn probe<T, M>(table: &T, matcher: &M, index: usize) -> Option<(Row, Ordering)>
where
    T: OrderedTable + ?Sized,
    M: EntryMatcher + ?Sized,
{
    let row = table.row(index)?;
    Some((row, matcher.compare(row.key, row.value)))
}

/// Binary search within the positions `lower..upper`.
///
/// The first `Equal` midpoint is returned, so when several rows match, which one is found
/// depends only on the bounds and the length of the matching run.
pub(crate) fn binary_search<T, M>(
    table:     &T,
    matcher:   &M,
    mut lower: usize,
    mut upper: usize,
) -> Option<(usize, Row)>
where
    T: OrderedTable + ?Sized,
    M: EntryMatcher + ?Sized,
{
    while lower < upper {
        // `lower <= middle < upper`
        let middle = lower.midpoint(upper);

        match probe(table, matcher, middle)? {
            // Too small -> look more rightwards
            (_, Ordering::Less)      => lower = middle + 1,
            // Too great -> look more leftwards
            (_, Ordering::Greater)   => upper = middle,
            (row, Ordering::Equal)   => return Some((middle, row)),
        }
    }

    None
}

/// Galloping search outward from `anchor`, followed by a binary search of the bracketed window.
///
/// See [`NearbySearchOptions::max_gallop_steps`] for what happens when the sought rows are far
/// from the anchor.
pub(crate) fn gallop_search<T, M>(
    table:   &T,
    matcher: &M,
    anchor:  usize,
    options: NearbySearchOptions,
) -> Option<(usize, Row)>
where
    T: OrderedTable + ?Sized,
    M: EntryMatcher + ?Sized,
{
    let len = table.len();
    if anchor >= len {
        return binary_search(table, matcher, 0, len);
    }

    match probe(table, matcher, anchor)? {
        (row, Ordering::Equal)   => Some((anchor, row)),
        (_, Ordering::Less)      => gallop_up(table, matcher, anchor, len, options),
        (_, Ordering::Greater)   => gallop_down(table, matcher, anchor, options),
    }
}

/// Everything at or before `anchor` is known to compare `Less`.
fn gallop_up<T, M>(
    table:   &T,
    matcher: &M,
    anchor:  usize,
    len:     usize,
    options: NearbySearchOptions,
) -> Option<(usize, Row)>
where
    T: OrderedTable + ?Sized,
    M: EntryMatcher + ?Sized,
{
    let mut lower = anchor + 1;
    let mut distance: usize = 1;
    let mut steps = 0_u32;

    let upper = loop {
        let Some(index) = anchor.checked_add(distance).filter(|&index| index < len) else {
            break len;
        };
        if steps >= options.max_gallop_steps {
            tracing::event!(
                LogLevel::TRACE,
                "nearby search from row {anchor} stopped galloping upwards at row {lower}",
            );
            break len;
        }
        steps += 1;

        match probe(table, matcher, index)? {
            (_, Ordering::Less) => {
                lower = index + 1;
                distance = distance.saturating_mul(2);
            }
            (row, Ordering::Equal)   => return Some((index, row)),
            (_, Ordering::Greater)   => break index,
        }
    };

    binary_search(table, matcher, lower, upper)
}

/// Everything at or after `anchor` is known to compare `Greater`.
fn gallop_down<T, M>(
    table:   &T,
    matcher: &M,
    anchor:  usize,
    options: NearbySearchOptions,
) -> Option<(usize, Row)>
where
    T: OrderedTable + ?Sized,
    M: EntryMatcher + ?Sized,
{
    let mut upper = anchor;
    let mut distance: usize = 1;
    let mut steps = 0_u32;

    let lower = loop {
        let Some(index) = anchor.checked_sub(distance) else {
            break 0;
        };
        if steps >= options.max_gallop_steps {
            tracing::event!(
                LogLevel::TRACE,
                "nearby search from row {anchor} stopped galloping downwards at row {upper}",
            );
            break 0;
        }
        steps += 1;

        match probe(table, matcher, index)? {
            (_, Ordering::Greater) => {
                upper = index;
                distance = distance.saturating_mul(2);
            }
            (row, Ordering::Equal)   => return Some((index, row)),
            (_, Ordering::Less)      => break index + 1,
        }
    };

    binary_search(table, matcher, lower, upper)
}

/// Find the last position whose key is at most `key`.
pub(crate) fn floor_search<T>(table: &T, key: u32) -> Option<(usize, Row)>
where
    T: OrderedTable + ?Sized,
{
    let mut lower = 0;
    let mut upper = table.len();

    // Invariant: keys before `lower` are `<= key`, keys at or after `upper` are `> key`.
    while lower < upper {
        let middle = lower.midpoint(upper);
        if table.row(middle)?.key <= key {
            lower = middle + 1;
        } else {
            upper = middle;
        }
    }

    let index = lower.checked_sub(1)?;
    Some((index, table.row(index)?))
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::table::SliceTable;
    use super::*;


    fn offsets(len: u32) -> SliceTable<Vec<Row>> {
        SliceTable::new_unchecked((0..len).map(|key| Row::new(key, i64::from(key) * 10)).collect())
    }

    /// Matches rows whose value is exactly `target`, counting how often it is invoked.
    fn counting(target: i64, calls: &Cell<u32>) -> impl Fn(u32, i64) -> Ordering + '_ {
        move |_key, value| {
            calls.set(calls.get() + 1);
            value.cmp(&target)
        }
    }

    #[test]
    fn binary_search_within_bounds() {
        let table = offsets(100);
        let calls = Cell::new(0);
        let matcher = counting(420, &calls);

        assert_eq!(binary_search(&table, &matcher, 0, 100).map(|(idx, _)| idx), Some(42));
        assert!(calls.get() <= 7, "{} calls", calls.get());

        // The matching row lies outside these bounds.
        assert_eq!(binary_search(&table, &matcher, 50, 100), None);
        assert_eq!(binary_search(&table, &matcher, 0, 42), None);
        assert_eq!(binary_search(&table, &matcher, 42, 42), None);
    }

    #[test]
    fn gallop_finds_neighbours_cheaply() {
        let table = offsets(1 << 16);
        let options = NearbySearchOptions::default();

        for distance in [1_usize, 2, 3, 7, 30] {
            let calls = Cell::new(0);
            let above = i64::try_from(30_000 + distance).unwrap() * 10;
            let matcher = counting(above, &calls);
            let found = gallop_search(&table, &matcher, 30_000, options);
            assert_eq!(found.map(|(idx, _)| idx), Some(30_000 + distance));
            // One anchor probe, then roughly two logarithms of the distance.
            assert!(calls.get() <= 12, "distance {distance} took {} calls", calls.get());

            let calls = Cell::new(0);
            let below = i64::try_from(30_000 - distance).unwrap() * 10;
            let matcher = counting(below, &calls);
            let found = gallop_search(&table, &matcher, 30_000, options);
            assert_eq!(found.map(|(idx, _)| idx), Some(30_000 - distance));
            assert!(calls.get() <= 12, "distance {distance} took {} calls", calls.get());
        }
    }

    #[test]
    fn gallop_budget_exhausted() {
        let table = offsets(1000);

        for max_gallop_steps in [0, 1, 2, 3] {
            let options = NearbySearchOptions::new(max_gallop_steps);
            assert_eq!(
                gallop_search(&table, &|_: u32, value: i64| value.cmp(&9990), 0, options),
                Some((999, Row::new(999, 9990))),
            );
            assert_eq!(
                gallop_search(&table, &|_: u32, value: i64| value.cmp(&0), 999, options),
                Some((0, Row::new(0, 0))),
            );
            assert_eq!(
                gallop_search(&table, &|_: u32, value: i64| value.cmp(&5), 500, options),
                None,
            );
        }
    }

    #[test]
    fn gallop_past_the_edges() {
        let table = offsets(10);
        let options = NearbySearchOptions::default();

        assert_eq!(gallop_search(&table, &|_: u32, _: i64| Ordering::Less, 3, options), None);
        assert_eq!(gallop_search(&table, &|_: u32, _: i64| Ordering::Greater, 3, options), None);
        // Anchors beyond the table fall back to a full search.
        assert_eq!(
            gallop_search(&table, &|_: u32, value: i64| value.cmp(&70), 25, options),
            Some((7, Row::new(7, 70))),
        );
    }

    #[test]
    fn floor_of_sparse_keys() {
        let table = SliceTable::new_unchecked(vec![
            Row::new(10, 1),
            Row::new(20, 2),
            Row::new(40, 3),
        ]);

        assert_eq!(floor_search(&table, 0), None);
        assert_eq!(floor_search(&table, 9), None);
        assert_eq!(floor_search(&table, 10), Some((0, Row::new(10, 1))));
        assert_eq!(floor_search(&table, 39), Some((1, Row::new(20, 2))));
        assert_eq!(floor_search(&table, 40), Some((2, Row::new(40, 3))));
        assert_eq!(floor_search(&table, u32::MAX), Some((2, Row::new(40, 3))));

        let empty = SliceTable::new_unchecked(Vec::<Row>::new());
        assert_eq!(floor_search(&empty, 5), None);
    }
}
