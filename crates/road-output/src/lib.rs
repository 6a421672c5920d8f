//! `road-output` — neighborhood report writers.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`row`]    | `NeighborhoodRow`, `rows_from_analysis`         |
//! | [`writer`] | `ReportWriter` trait                            |
//! | [`csv`]    | `CsvReportWriter`                               |
//! | [`error`]  | `OutputError`, `OutputResult<T>`                |
//!
//! # Usage
//!
//! ```rust,ignore
//! use road_output::{CsvReportWriter, ReportWriter, rows_from_analysis};
//!
//! let mut w = CsvReportWriter::create(Path::new("neighborhoods.csv"))?;
//! w.write_rows(&rows_from_analysis(&analysis))?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use crate::csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use row::{NeighborhoodRow, rows_from_analysis};
pub use writer::ReportWriter;
