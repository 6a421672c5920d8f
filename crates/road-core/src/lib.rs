//! `road-core` — the road model and its text-file loader.
//!
//! This crate is a dependency of every other `road-*` crate.  It owns the
//! data model and everything needed to turn an input file into a validated
//! [`Road`]; sorting and neighborhood analysis live in `road-analysis`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`position`]    | `Position`                                            |
//! | [`road`]        | `City`, `Road`                                        |
//! | [`limits`]      | `RoadLimits` (length and city-count bounds)           |
//! | [`loader`]      | `load_road`, `load_road_with`, `load_road_reader`, `load_road_str` |
//! | [`error`]       | `RoadError`, `ErrorKind`, `Location`, `RoadResult`    |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | FxHash instead of SipHash for duplicate detection.       |

pub mod error;
pub mod limits;
pub mod loader;
pub mod position;
pub mod road;

mod scanner;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ErrorKind, Location, RoadError, RoadResult};
pub use limits::RoadLimits;
pub use loader::{load_road, load_road_reader, load_road_str, load_road_with};
pub use position::Position;
pub use road::{City, Road};
