//! CSV report backend.
//!
//! Columns: `position,name,neighborhood,smallest`.  Neighborhoods are
//! written with two decimals, the same precision the driver prints.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{NeighborhoodRow, OutputResult};

const HEADER: [&str; 4] = ["position", "name", "neighborhood", "smallest"];

/// Writes neighborhood rows as CSV to any `Write` sink.
pub struct CsvReportWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvReportWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvReportWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and hand back the sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_rows(&mut self, rows: &[NeighborhoodRow]) -> OutputResult<()> {
        for row in rows {
            self.inner.write_record(&[
                row.position.to_string(),
                row.name.clone(),
                format!("{:.2}", row.neighborhood),
                (row.smallest as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
