// crates/shared-kernel/src/value_objects/frequency.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Share of a work's countable units that fell into one category.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativeFrequency(f64);

impl RelativeFrequency {
    pub const ZERO: Self = Self(0.0);

    /// `occurrence / total`, or `None` when `total` is zero.
    #[inline]
    pub fn ratio(occurrence: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(Self(occurrence as f64 / total as f64))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Value expressed as a percentage.
    #[inline]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl From<RelativeFrequency> for f64 {
    fn from(value: RelativeFrequency) -> Self {
        value.0
    }
}

impl fmt::Display for RelativeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.0),
            None => write!(f, "{:.6}", self.0),
        }
    }
}
