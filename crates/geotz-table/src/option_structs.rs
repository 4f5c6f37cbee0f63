#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Tuning for [`TableEntry::find_nearby_entry`].
///
/// [`TableEntry::find_nearby_entry`]: crate::TableEntry::find_nearby_entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NearbySearchOptions {
    /// The maximum number of outward probes made from the anchor, at distances `1, 2, 4, ...`,
    /// while trying to bracket the sought entries.
    ///
    /// Once exceeded, the search stops galloping and binary searches the remainder of the table
    /// in the direction it was heading. With `0`, the anchor is compared once and then the whole
    /// side of the table beyond it is binary searched.
    pub max_gallop_steps: u32,
}

impl NearbySearchOptions {
    pub const DEFAULT_MAX_GALLOP_STEPS: u32 = 16;

    #[inline]
    #[must_use]
    pub const fn new(max_gallop_steps: u32) -> Self {
        Self { max_gallop_steps }
    }
}

impl Default for NearbySearchOptions {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_GALLOP_STEPS)
    }
}
