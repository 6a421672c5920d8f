//! Strongly typed road coordinate.

use std::fmt;

/// A 1-based integer coordinate along the road.
///
/// Valid positions satisfy `0 < position < road.length()`; the bound is
/// enforced when a [`Road`](crate::Road) is built, not here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Position(pub u32);

impl Position {
    /// The coordinate as a float, for neighborhood arithmetic.
    #[inline(always)]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Position> for u32 {
    #[inline(always)]
    fn from(p: Position) -> u32 {
        p.0
    }
}
