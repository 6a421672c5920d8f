//! The road model: a fixed-length line segment holding named cities.
//!
//! A [`Road`] is built all-or-nothing, either by the loader or by
//! [`Road::new`].  Once built it is immutable; cities stay in the order they
//! were supplied (file order).  Ordering by position is the job of
//! `road-analysis`, which consumes the road via [`Road::into_parts`].

use log::debug;

use crate::limits::check_position;
use crate::{Location, Position, RoadError, RoadLimits, RoadResult};

#[cfg(feature = "fx-hash")]
pub(crate) type PositionIndex = rustc_hash::FxHashMap<Position, Location>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type PositionIndex = std::collections::HashMap<Position, Location>;

pub(crate) fn position_index(capacity: usize) -> PositionIndex {
    PositionIndex::with_capacity_and_hasher(capacity, Default::default())
}

/// A name must have visible text and no line break (`\r` included).
pub(crate) fn check_name(name: &str, position: Position, at: Location) -> RoadResult<()> {
    if name.trim().is_empty() {
        return Err(RoadError::format(at, format!("empty name for city at position {position}")));
    }
    if name.contains(['\n', '\r']) {
        return Err(RoadError::format(at, format!("name of city at position {position} spans several lines")));
    }
    Ok(())
}

// ── City ──────────────────────────────────────────────────────────────────────

/// A named point on the road.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub position: Position,
    /// Single-line, non-empty label.
    pub name: String,
}

impl City {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Self { position, name: name.into() }
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// A validated road.
///
/// Invariants (checked on construction):
/// - `length` and `cities.len()` are within the [`RoadLimits`] used to build it;
/// - every position satisfies `0 < position < length`;
/// - no two cities share a position;
/// - every name is non-empty and contains no line break.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Road {
    length: u32,
    cities: Vec<City>,
}

impl Road {
    /// Validate and build a road from in-memory parts.
    ///
    /// Errors use [`Location::Record`] with the index into `cities`.  Checks
    /// run per city in the same order as the file loader: range, duplicate,
    /// then name.
    pub fn new(length: u32, cities: Vec<City>, limits: &RoadLimits) -> RoadResult<Self> {
        limits.validate()?;
        limits.check_length(i64::from(length), Location::Road)?;
        // usize → i64 saturates; anything that large is out of range anyway.
        let count = i64::try_from(cities.len()).unwrap_or(i64::MAX);
        limits.check_city_count(count, Location::Road)?;

        let mut seen = position_index(cities.len());
        for (i, city) in cities.iter().enumerate() {
            let at = Location::Record(i);
            check_position(i64::from(city.position.0), length, at)?;
            if let Some(&first) = seen.get(&city.position) {
                return Err(RoadError::DuplicatePosition { position: city.position, at, first });
            }
            seen.insert(city.position, at);
            check_name(&city.name, city.position, at)?;
        }

        debug!("built road of length {length} with {} cities", cities.len());
        Ok(Self { length, cities })
    }

    /// Build from parts the loader has already checked.
    pub(crate) fn from_checked(length: u32, cities: Vec<City>) -> Self {
        debug_assert!(cities.iter().all(|c| c.position.0 > 0 && c.position.0 < length));
        Self { length, cities }
    }

    /// Total road length `T`.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Cities in the order they were supplied.
    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    #[inline]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Give up ownership of the length and city list.
    pub fn into_parts(self) -> (u32, Vec<City>) {
        (self.length, self.cities)
    }
}
