use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A monetary amount in minor currency units.
///
/// Prices are carried through unchanged; nothing here adds, discounts or rounds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Price(pub u64);

impl Price {
    pub fn minor_units(self) -> u64 {
        self.0
    }
}

impl From<u64> for Price {
    fn from(minor_units: u64) -> Self {
        Self(minor_units)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
