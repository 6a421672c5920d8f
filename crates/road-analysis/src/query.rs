//! File-level queries.
//!
//! [`smallest_neighborhood_value`] and [`city_with_smallest_neighborhood`]
//! each load, sort, and scan their own copy of the file; nothing is shared
//! between calls.  [`analyze_file`] does the same work once and answers both
//! questions, with identical results.

use std::path::Path;

use road_core::{City, Road, RoadLimits, RoadResult, load_road, load_road_with};

use crate::neighborhood::{neighborhood_sizes, smallest_of};
use crate::{Smallest, SortedRoad};

/// Smallest neighborhood size of the road stored at `path`.
pub fn smallest_neighborhood_value(path: impl AsRef<Path>) -> RoadResult<f64> {
    let road = SortedRoad::from(load_road(path)?);
    Ok(crate::smallest(&road).value)
}

/// Name of the city with the smallest neighborhood on the road stored at
/// `path` (the leftmost one on ties).
pub fn city_with_smallest_neighborhood(path: impl AsRef<Path>) -> RoadResult<String> {
    let road = SortedRoad::from(load_road(path)?);
    let best = crate::smallest(&road);
    Ok(road.cities()[best.index].name.clone())
}

/// Load `path` once and compute every neighborhood plus the minimum.
pub fn analyze_file(path: impl AsRef<Path>, limits: &RoadLimits) -> RoadResult<Analysis> {
    Ok(analyze(load_road_with(path, limits)?))
}

/// Sort `road` and compute every neighborhood plus the minimum.
pub fn analyze(road: Road) -> Analysis {
    let road = SortedRoad::from(road);
    let sizes = neighborhood_sizes(&road);
    let smallest = smallest_of(&sizes, road.length());
    Analysis { road, sizes, smallest }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Result of [`analyze`]: the sorted road, every city's neighborhood, and
/// the smallest one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    road:     SortedRoad,
    sizes:    Vec<f64>,
    smallest: Smallest,
}

impl Analysis {
    pub fn road(&self) -> &SortedRoad {
        &self.road
    }

    /// Neighborhood sizes, parallel to `road().cities()`.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn smallest(&self) -> Smallest {
        self.smallest
    }

    /// The smallest neighborhood size.
    pub fn value(&self) -> f64 {
        self.smallest.value
    }

    /// The city owning the smallest neighborhood.
    pub fn city(&self) -> &City {
        &self.road.cities()[self.smallest.index]
    }

    pub fn name(&self) -> &str {
        &self.city().name
    }

    /// Cities zipped with their neighborhood sizes, in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&City, f64)> + '_ {
        self.road.cities().iter().zip(self.sizes.iter().copied())
    }
}
