//! Road file loader.
//!
//! # File format
//!
//! Whitespace-delimited integers, then one city per line:
//!
//! ```text
//! 10          road length T, 3..=1_000_000
//! 2           city count N, 2..=10_000
//! 3 Lisbon    position (0 < p < T) followed by the name
//! 7 Porto Alegre
//! ```
//!
//! The name is the rest of the position's line, trimmed; it may contain
//! spaces.  A position alone on its line takes the next non-blank line as
//! its name.  Bytes that are not UTF-8 are replaced with U+FFFD rather than
//! rejected.  Anything after the N-th city is ignored.
//!
//! Construction is all-or-nothing: the first violation aborts the load and
//! nothing partially built escapes.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::limits::check_position;
use crate::road::{check_name, position_index};
use crate::scanner::Scanner;
use crate::{City, Location, Road, RoadError, RoadLimits, RoadResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road from `path` using the default [`RoadLimits`].
pub fn load_road(path: impl AsRef<Path>) -> RoadResult<Road> {
    load_road_with(path, &RoadLimits::default())
}

/// Load a road from `path`, enforcing `limits`.
pub fn load_road_with(path: impl AsRef<Path>, limits: &RoadLimits) -> RoadResult<Road> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| RoadError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    load_road_bytes(bytes, limits)
}

/// Like [`load_road_with`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_road_reader<R: Read>(mut reader: R, limits: &RoadLimits) -> RoadResult<Road> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_road_bytes(bytes, limits)
}

/// Parse a road from in-memory text.
pub fn load_road_str(text: &str, limits: &RoadLimits) -> RoadResult<Road> {
    limits.validate()?;
    let mut sc = Scanner::new(text);

    // ── Header ────────────────────────────────────────────────────────────
    let (raw, line) = sc.next_int("road length")?;
    let length = limits.check_length(raw, Location::Line(line))?;

    let (raw, line) = sc.next_int("city count")?;
    let count = limits.check_city_count(raw, Location::Line(line))? as usize;
    debug!("header: length {length}, {count} cities");

    // ── City records ──────────────────────────────────────────────────────
    let mut cities = Vec::with_capacity(count);
    let mut seen = position_index(count);

    for i in 0..count {
        let (raw, line) = sc.next_int("city position")?;
        let at = Location::Line(line);
        let position = check_position(raw, length, at)?;

        if let Some(&first) = seen.get(&position) {
            return Err(RoadError::DuplicatePosition { position, at, first });
        }
        seen.insert(position, at);

        let Some((name, name_line)) = sc.next_name() else {
            return Err(RoadError::format(
                at,
                format!("missing name for city {} of {count} (position {position})", i + 1),
            ));
        };
        check_name(name, position, Location::Line(name_line))?;
        cities.push(City::new(position, name));
    }

    if sc.has_remaining() {
        warn!("ignoring trailing content after city {count} (last record on line {})", sc.line());
    }

    Ok(Road::from_checked(length, cities))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_road_bytes(bytes: Vec<u8>, limits: &RoadLimits) -> RoadResult<Road> {
    // Names are free text (often Latin-1); a bad byte in a number still
    // fails the integer parse.
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!("input is not valid UTF-8; undecodable bytes replaced");
    }
    load_road_str(&text, limits)
}
