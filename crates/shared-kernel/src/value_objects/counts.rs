// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Link count shown in the long listing.
///
/// Directories report the number of names found inside them, everything
/// else reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkCount(usize);

impl LinkCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn single() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for LinkCount {
    fn default() -> Self {
        Self::single()
    }
}

impl From<usize> for LinkCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<LinkCount> for usize {
    fn from(count: LinkCount) -> Self {
        count.value()
    }
}

impl PartialEq<usize> for LinkCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LinkCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
