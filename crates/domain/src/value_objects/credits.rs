//! Credits value object for prices and balances

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A non-negative amount of in-game currency, in whole credits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Credits(u64);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Subtract `price`, or `None` if the balance does not cover it.
    pub fn checked_sub(self, price: Credits) -> Option<Credits> {
        self.0.checked_sub(price.0).map(Credits)
    }

    pub fn covers(&self, price: Credits) -> bool {
        self.0 >= price.0
    }
}

impl Add for Credits {
    type Output = Credits;

    fn add(self, rhs: Credits) -> Credits {
        Credits(self.0.saturating_add(rhs.0))
    }
}

impl From<u64> for Credits {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cr", self.0)
    }
}
