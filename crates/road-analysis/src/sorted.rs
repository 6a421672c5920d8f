//! Position ordering.
//!
//! Sorting is expressed as a type transition: a [`Road`] (file order) is
//! consumed and a [`SortedRoad`] comes out.  Everything in
//! [`neighborhood`](crate::neighborhood) takes a `SortedRoad`, so the
//! analysis can never run on an unsorted city list.

use log::debug;

use road_core::{City, Position, Road};

/// Sort cities ascending by position.
///
/// Unstable (pattern-defeating quicksort, O(N log N) worst case); positions
/// in a validated road are unique, so stability would change nothing.
pub fn sort_by_position(cities: &mut [City]) {
    cities.sort_unstable_by_key(|c| c.position);
}

/// A road whose cities are strictly ascending by position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortedRoad {
    length: u32,
    cities: Vec<City>,
}

impl SortedRoad {
    /// Total road length `T`.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Cities, ascending by position.
    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    #[inline]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub(crate) fn position(&self, i: usize) -> Position {
        self.cities[i].position
    }
}

impl From<Road> for SortedRoad {
    fn from(road: Road) -> Self {
        let (length, mut cities) = road.into_parts();
        sort_by_position(&mut cities);
        debug_assert!(cities.windows(2).all(|w| w[0].position < w[1].position));
        debug!("sorted {} cities by position", cities.len());
        Self { length, cities }
    }
}

/// Extension for the `road.into_sorted()` spelling.
pub trait IntoSorted {
    fn into_sorted(self) -> SortedRoad;
}

impl IntoSorted for Road {
    fn into_sorted(self) -> SortedRoad {
        SortedRoad::from(self)
    }
}
