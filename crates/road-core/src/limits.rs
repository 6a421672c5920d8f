//! Bounds applied while loading a road.
//!
//! The defaults are the classic problem limits: a road of length
//! `3..=1_000_000` carrying `2..=10_000` cities.  Callers may tighten or
//! relax them, but a limit set must stay internally consistent (see
//! [`RoadLimits::new`]).

use crate::{Location, Position, RoadError, RoadResult};

/// Inclusive bounds on road length and city count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadLimits {
    pub min_length: u32,
    pub max_length: u32,
    pub min_cities: u32,
    pub max_cities: u32,
}

impl Default for RoadLimits {
    fn default() -> Self {
        Self {
            min_length: Self::MIN_LENGTH,
            max_length: Self::MAX_LENGTH,
            min_cities: Self::MIN_CITIES,
            max_cities: Self::MAX_CITIES,
        }
    }
}

impl RoadLimits {
    pub const MIN_LENGTH: u32 = 3;
    pub const MAX_LENGTH: u32 = 1_000_000;
    pub const MIN_CITIES: u32 = 2;
    pub const MAX_CITIES: u32 = 10_000;

    /// Build a limit set, rejecting empty ranges.
    ///
    /// A road needs room for at least one interior position, so
    /// `min_length >= 2`, and at least one city, so `min_cities >= 1`.
    pub fn new(min_length: u32, max_length: u32, min_cities: u32, max_cities: u32) -> RoadResult<Self> {
        if min_length < 2 {
            return Err(RoadError::InvalidLimits(format!("min_length {min_length} < 2")));
        }
        if min_cities < 1 {
            return Err(RoadError::InvalidLimits("min_cities must be at least 1".into()));
        }
        if min_length > max_length {
            return Err(RoadError::InvalidLimits(format!(
                "min_length {min_length} > max_length {max_length}"
            )));
        }
        if min_cities > max_cities {
            return Err(RoadError::InvalidLimits(format!(
                "min_cities {min_cities} > max_cities {max_cities}"
            )));
        }
        Ok(Self { min_length, max_length, min_cities, max_cities })
    }

    /// Re-run the [`new`](Self::new) consistency checks on a value built by
    /// struct literal.
    pub fn validate(&self) -> RoadResult<()> {
        Self::new(self.min_length, self.max_length, self.min_cities, self.max_cities).map(|_| ())
    }

    pub(crate) fn check_length(&self, value: i64, at: Location) -> RoadResult<u32> {
        check_inclusive("road length", value, self.min_length, self.max_length, at)
    }

    pub(crate) fn check_city_count(&self, value: i64, at: Location) -> RoadResult<u32> {
        check_inclusive("city count", value, self.min_cities, self.max_cities, at)
    }
}

/// Check `0 < value < length`.
pub(crate) fn check_position(value: i64, length: u32, at: Location) -> RoadResult<Position> {
    if value <= 0 || value >= i64::from(length) {
        return Err(RoadError::Range {
            field:    "position",
            value,
            expected: format!("(0, {length})"),
            at,
        });
    }
    // In range of (0, u32::MAX) by the check above.
    Ok(Position(value as u32))
}

fn check_inclusive(field: &'static str, value: i64, min: u32, max: u32, at: Location) -> RoadResult<u32> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(RoadError::Range {
            field,
            value,
            expected: format!("[{min}, {max}]"),
            at,
        });
    }
    Ok(value as u32)
}
