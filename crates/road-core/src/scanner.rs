//! Whitespace-token scanner over the road file text.
//!
//! Integers are read as whitespace-delimited tokens that may span line
//! breaks; a city name is the rest of the current line, or the next
//! non-blank line when nothing follows the position.  The scanner tracks
//! the 1-based line number of every token it hands out.

use std::num::IntErrorKind;

use crate::{Location, RoadError, RoadResult};

pub(crate) struct Scanner<'a> {
    src:  &'a str,
    pos:  usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        // A leading BOM is not part of the first token.
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        Self { src, pos: 0, line: 1 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        let skipped = &rest[..rest.len() - trimmed.len()];
        self.line += skipped.matches('\n').count();
        self.pos += skipped.len();
    }

    /// Next whitespace-delimited token and the line it starts on.
    pub(crate) fn next_token(&mut self) -> Option<(&'a str, usize)> {
        self.skip_whitespace();
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += end;
        Some((&rest[..end], self.line))
    }

    /// Read a signed decimal integer.
    ///
    /// A missing or malformed token is `InvalidFormat`; a well-formed integer
    /// too large for `i64` is a `Range` error reported with the saturated
    /// value, since it is certainly outside any limit.
    pub(crate) fn next_int(&mut self, what: &'static str) -> RoadResult<(i64, usize)> {
        let Some((token, line)) = self.next_token() else {
            return Err(RoadError::format(
                Location::Line(self.line),
                format!("expected {what}, found end of input"),
            ));
        };
        match token.parse::<i64>() {
            Ok(v) => Ok((v, line)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(RoadError::Range {
                    field:    what,
                    value:    if token.starts_with('-') { i64::MIN } else { i64::MAX },
                    expected: "a 64-bit integer".into(),
                    at:       Location::Line(line),
                }),
                _ => Err(RoadError::format(
                    Location::Line(line),
                    format!("expected {what}, found {token:?}"),
                )),
            },
        }
    }

    /// The remainder of the current line with surrounding blanks removed.
    ///
    /// Does not consume the line break, so an empty result means the line
    /// ended (or input ran out) before any text.
    pub(crate) fn rest_of_line(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find('\n').unwrap_or(rest.len());
        self.pos += end;
        rest[..end].trim()
    }

    /// Read a city name and the line it sits on.
    ///
    /// Normally the rest of the current line.  If that is blank, blank lines
    /// are skipped and the next non-blank line is the name.  `None` only at
    /// end of input.
    pub(crate) fn next_name(&mut self) -> Option<(&'a str, usize)> {
        let same_line = self.rest_of_line();
        if !same_line.is_empty() {
            return Some((same_line, self.line));
        }
        self.skip_whitespace();
        if self.rest().is_empty() {
            return None;
        }
        let line = self.line;
        Some((self.rest_of_line(), line))
    }

    /// `true` if anything other than whitespace remains.
    pub(crate) fn has_remaining(&self) -> bool {
        !self.rest().trim_start().is_empty()
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }
}
