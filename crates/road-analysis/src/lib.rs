//! `road-analysis` — sort a road's cities and measure their neighborhoods.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`sorted`]       | `SortedRoad`, `IntoSorted`, `sort_by_position`            |
//! | [`neighborhood`] | `neighborhood_at`, `neighborhood_sizes`, `Smallest`, `smallest` |
//! | [`query`]        | `Analysis`, `analyze_file`, and the two single-answer file queries |
//!
//! # Neighborhood model (summary)
//!
//! With cities sorted by position `p[0] < … < p[N-1]` on a road of length `T`:
//!
//! ```text
//! first   : (p[1] - p[0]) / 2 + p[0]
//! last    : (p[i] - p[i-1]) / 2 + (T - p[i])
//! middle  : (p[i] - p[i-1]) / 2 + (p[i+1] - p[i]) / 2
//! ```
//!
//! The smallest neighborhood is found by a left-to-right scan starting from
//! `T`; on ties the leftmost city wins.

pub mod neighborhood;
pub mod query;
pub mod sorted;


pub use neighborhood::{Smallest, neighborhood_at, neighborhood_sizes, smallest};
pub use query::{Analysis, analyze, analyze_file, city_with_smallest_neighborhood, smallest_neighborhood_value};
pub use sorted::{IntoSorted, SortedRoad, sort_by_position};
