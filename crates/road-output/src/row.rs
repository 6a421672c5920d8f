//! Plain data rows written by report backends.

use road_analysis::Analysis;

/// One city's line in the neighborhood report.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodRow {
    pub position:     u32,
    pub name:         String,
    pub neighborhood: f64,
    /// `true` for exactly one row: the city reported as the minimum.
    pub smallest:     bool,
}

/// One row per city, in position order.
pub fn rows_from_analysis(analysis: &Analysis) -> Vec<NeighborhoodRow> {
    let best = analysis.smallest().index;
    analysis
        .iter()
        .enumerate()
        .map(|(i, (city, size))| NeighborhoodRow {
            position:     city.position.0,
            name:         city.name.clone(),
            neighborhood: size,
            smallest:     i == best,
        })
        .collect()
}
