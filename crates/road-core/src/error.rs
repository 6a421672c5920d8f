//! Road loading error type.
//!
//! Every failure the loader can report belongs to one of four abstract kinds
//! (see [`ErrorKind`]).  The concrete [`RoadError`] variants carry enough
//! context (path, line, offending value) to produce a useful message.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::Position;

// ── Location ──────────────────────────────────────────────────────────────────

/// Where in the input an error was detected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// 1-based line of a text input.
    Line(usize),
    /// 0-based index of a city handed to [`Road::new`](crate::Road::new).
    Record(usize),
    /// Not tied to a particular record (e.g. the road length itself).
    Road,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line(n)   => write!(f, "line {n}"),
            Location::Record(i) => write!(f, "record {i}"),
            Location::Road      => f.write_str("road"),
        }
    }
}

// ── RoadError ─────────────────────────────────────────────────────────────────

/// Errors produced while building a [`Road`](crate::Road).
#[derive(Debug, Error)]
pub enum RoadError {
    #[error("cannot open {}: {source}", path.display())]
    FileUnavailable {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("invalid format at {at}: {message}")]
    InvalidFormat { at: Location, message: String },

    #[error("{field} {value} at {at} is outside {expected}")]
    Range {
        field:    &'static str,
        value:    i64,
        expected: String,
        at:       Location,
    },

    #[error("duplicate position {position} at {at} (first seen at {first})")]
    DuplicatePosition {
        position: Position,
        at:       Location,
        first:    Location,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid limits: {0}")]
    InvalidLimits(String),
}

impl RoadError {
    pub(crate) fn format(at: Location, message: impl Into<String>) -> Self {
        RoadError::InvalidFormat { at, message: message.into() }
    }

    /// The abstract failure kind, independent of the message details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoadError::FileUnavailable { .. } | RoadError::Read(_) => ErrorKind::FileUnavailable,
            RoadError::InvalidFormat { .. }     => ErrorKind::InvalidFormat,
            RoadError::Range { .. }             => ErrorKind::Range,
            RoadError::DuplicatePosition { .. } => ErrorKind::DuplicatePosition,
            RoadError::InvalidLimits(_)         => ErrorKind::Config,
        }
    }
}

// ── ErrorKind ─────────────────────────────────────────────────────────────────

/// Coarse classification of a [`RoadError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileUnavailable,
    InvalidFormat,
    Range,
    DuplicatePosition,
    /// The caller supplied inconsistent [`RoadLimits`](crate::RoadLimits).
    Config,
}

impl ErrorKind {
    /// Process exit code used by the command-line driver.  Distinct per kind
    /// and never 0 or 1 (1 is reserved for failures outside the loader).
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::FileUnavailable   => 2,
            ErrorKind::InvalidFormat     => 3,
            ErrorKind::Range             => 4,
            ErrorKind::DuplicatePosition => 5,
            ErrorKind::Config            => 6,
        }
    }
}

/// Shorthand result type for all `road-*` crates.
pub type RoadResult<T> = Result<T, RoadError>;
