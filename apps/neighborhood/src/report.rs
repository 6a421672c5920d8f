//! Console rendering of an analysis.

use std::io::Write;

use serde::Serialize;

use road_analysis::Analysis;
use road_core::{City, Position};

/// `"<position> <name>"`, one city per line, in the order given.
pub fn write_listing(out: &mut impl Write, cities: &[City]) -> std::io::Result<()> {
    for city in cities {
        writeln!(out, "{} {}", city.position, city.name)?;
    }
    Ok(())
}

pub fn write_summary(out: &mut impl Write, analysis: &Analysis) -> std::io::Result<()> {
    writeln!(out, "Smallest neighborhood: {:.2}", analysis.value())?;
    writeln!(out, "City with the smallest neighborhood: {}", analysis.name())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    length:   u32,
    cities:   &'a [City],
    smallest: JsonSmallest<'a>,
}

#[derive(Serialize)]
struct JsonSmallest<'a> {
    value:    f64,
    position: Position,
    name:     &'a str,
}

/// The whole result as one pretty-printed JSON document.
pub fn write_json(out: &mut impl Write, cities: &[City], analysis: &Analysis) -> serde_json::Result<()> {
    let report = JsonReport {
        length: analysis.road().length(),
        cities,
        smallest: JsonSmallest {
            value:    analysis.value(),
            position: analysis.city().position,
            name:     analysis.name(),
        },
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
