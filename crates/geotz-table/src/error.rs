use thiserror::Error;


/// The reasons a validating table constructor can reject its input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The row at `index` has a key which does not strictly exceed the key before it.
    #[error("table keys must be strictly ascending, but row {index} has key {key} after key {previous}")]
    KeysNotAscending {
        index:    usize,
        previous: u32,
        key:      u32,
    },
    /// A packed table's value width was not in `1..=8` bytes.
    #[error("packed value width must be between 1 and 8 bytes, not {width}")]
    InvalidValueWidth {
        width: u8,
    },
    /// A packed table's length in bytes is not a whole number of records.
    #[error("packed table of {len} bytes is not a whole number of {record_len}-byte records")]
    TruncatedRecords {
        len:        usize,
        record_len: usize,
    },
}
