//! Per-city neighborhood sizes and the smallest one.

use log::debug;

use crate::SortedRoad;

/// Neighborhood size of the `i`-th city (in position order).
///
/// Half the gap to each adjacent city; a boundary city instead takes the
/// whole distance to its end of the road.  A lone city owns the entire road.
///
/// # Panics
///
/// Panics if `i >= road.city_count()`.
pub fn neighborhood_at(road: &SortedRoad, i: usize) -> f64 {
    let n = road.city_count();
    assert!(i < n, "city index {i} out of range for {n} cities");

    if n == 1 {
        return f64::from(road.length());
    }

    let half_gap = |a: usize, b: usize| (road.position(b).as_f64() - road.position(a).as_f64()) / 2.0;

    if i == 0 {
        half_gap(0, 1) + road.position(0).as_f64()
    } else if i == n - 1 {
        half_gap(i - 1, i) + (f64::from(road.length()) - road.position(i).as_f64())
    } else {
        half_gap(i - 1, i) + half_gap(i, i + 1)
    }
}

/// Neighborhood size of every city, in position order.
pub fn neighborhood_sizes(road: &SortedRoad) -> Vec<f64> {
    (0..road.city_count()).map(|i| neighborhood_at(road, i)).collect()
}

/// The smallest neighborhood and the index (in position order) of the city
/// that owns it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Smallest {
    pub index: usize,
    pub value: f64,
}

/// Scan left to right for the smallest neighborhood.
///
/// The running minimum starts at the road length `T`, which no city on a
/// road with two or more cities can reach, and only a strictly smaller
/// value replaces it, so the leftmost of several equal minima is kept.
pub fn smallest(road: &SortedRoad) -> Smallest {
    smallest_of(&neighborhood_sizes(road), road.length())
}

pub(crate) fn smallest_of(sizes: &[f64], length: u32) -> Smallest {
    // Index 0 stands for the degenerate single-city road, whose only
    // neighborhood equals the sentinel.
    let mut best = Smallest { index: 0, value: f64::from(length) };
    for (i, &size) in sizes.iter().enumerate() {
        if size < best.value {
            best = Smallest { index: i, value: size };
        }
    }
    debug!("smallest neighborhood {:.2} at sorted index {}", best.value, best.index);
    best
}
