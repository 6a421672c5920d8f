//! Sink for per-city neighborhood rows.

use crate::{NeighborhoodRow, OutputResult};

/// Destination for a neighborhood report.
pub trait ReportWriter {
    /// Append rows in the order given (normally position order).
    fn write_rows(&mut self, rows: &[NeighborhoodRow]) -> OutputResult<()>;

    /// Flush buffered rows.  Calls after the first are no-ops.
    fn finish(&mut self) -> OutputResult<()>;
}
