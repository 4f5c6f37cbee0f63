/// One row of an ordered table.
///
/// Within a table, `key`s are strictly ascending by position. Nothing is required of `value`s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row {
    pub key:   u32,
    pub value: i64,
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn new(key: u32, value: i64) -> Self {
        Self { key, value }
    }
}

impl From<(u32, i64)> for Row {
    #[inline]
    fn from((key, value): (u32, i64)) -> Self {
        Self { key, value }
    }
}

/// Returns the position of the first row whose key does not strictly exceed the key before it,
/// along with the two offending keys.
#[must_use]
pub(crate) fn first_unordered_key(
    keys: impl IntoIterator<Item = u32>,
) -> Option<(usize, u32, u32)> {
    let mut keys = keys.into_iter();
    let mut previous = keys.next()?;

    for (offset, key) in keys.enumerate() {
        if key <= previous {
            return Some((offset + 1, previous, key));
        }
        previous = key;
    }

    None
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn ascending_keys_are_ordered() {
        assert_eq!(first_unordered_key(Vec::<u32>::new()), None);
        assert_eq!(first_unordered_key([7_u32]), None);
        assert_eq!(first_unordered_key([0_u32, 1, 5, 9, u32::MAX]), None);
    }

    #[test]
    fn duplicate_and_descending_keys() {
        assert_eq!(first_unordered_key([0_u32, 1, 1, 2]), Some((2, 1, 1)));
        assert_eq!(first_unordered_key([3_u32, 2]), Some((1, 3, 2)));
        assert_eq!(first_unordered_key([0_u32, 4, 8, 6, 5]), Some((3, 8, 6)));
    }
}
