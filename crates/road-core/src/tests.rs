//! Unit tests for road-core.

use crate::{ErrorKind, Location, Position, RoadError, RoadLimits, load_road_str};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load(text: &str) -> Result<crate::Road, RoadError> {
    load_road_str(text, &RoadLimits::default())
}

fn kind_of(text: &str) -> ErrorKind {
    load(text).expect_err("input should be rejected").kind()
}

// ── Scanner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scanner {
    use crate::scanner::Scanner;
    use crate::{Location, RoadError};

    #[test]
    fn tokens_span_lines_and_track_line_numbers() {
        let mut sc = Scanner::new("  12\n\n 7 x");
        assert_eq!(sc.next_token(), Some(("12", 1)));
        assert_eq!(sc.next_token(), Some(("7", 3)));
        assert_eq!(sc.next_token(), Some(("x", 3)));
        assert_eq!(sc.next_token(), None);
    }

    #[test]
    fn rest_of_line_stops_at_newline_and_trims() {
        let mut sc = Scanner::new("4   Rio de Janeiro  \r\n5 B");
        assert_eq!(sc.next_int("position").unwrap(), (4, 1));
        assert_eq!(sc.rest_of_line(), "Rio de Janeiro");
        assert_eq!(sc.next_int("position").unwrap(), (5, 2));
        assert_eq!(sc.rest_of_line(), "B");
        assert!(!sc.has_remaining());
    }

    #[test]
    fn rest_of_line_is_empty_when_line_ends() {
        let mut sc = Scanner::new("4\nNatal");
        sc.next_int("position").unwrap();
        assert_eq!(sc.rest_of_line(), "");
    }

    #[test]
    fn signed_integers_parse() {
        let mut sc = Scanner::new("-3 +8");
        assert_eq!(sc.next_int("a").unwrap().0, -3);
        assert_eq!(sc.next_int("b").unwrap().0, 8);
    }

    #[test]
    fn malformed_integer_is_format_error() {
        let mut sc = Scanner::new("12abc");
        match sc.next_int("road length") {
            Err(RoadError::InvalidFormat { at, .. }) => assert_eq!(at, Location::Line(1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn overflowing_integer_is_range_error() {
        let mut sc = Scanner::new("99999999999999999999");
        match sc.next_int("road length") {
            Err(RoadError::Range { value, .. }) => assert_eq!(value, i64::MAX),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn end_of_input_is_format_error() {
        let mut sc = Scanner::new("   \n");
        assert!(matches!(sc.next_int("x"), Err(RoadError::InvalidFormat { .. })));
    }

    #[test]
    fn leading_bom_is_skipped() {
        let mut sc = Scanner::new("\u{feff}10");
        assert_eq!(sc.next_int("road length").unwrap().0, 10);
    }
}

// ── RoadLimits ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod limits {
    use crate::{ErrorKind, RoadLimits};

    #[test]
    fn defaults() {
        let l = RoadLimits::default();
        assert_eq!((l.min_length, l.max_length), (3, 1_000_000));
        assert_eq!((l.min_cities, l.max_cities), (2, 10_000));
        assert!(l.validate().is_ok());
    }

    #[test]
    fn inverted_ranges_rejected() {
        assert_eq!(RoadLimits::new(10, 5, 2, 3).unwrap_err().kind(), ErrorKind::Config);
        assert_eq!(RoadLimits::new(3, 10, 4, 3).unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn degenerate_minimums_rejected() {
        assert!(RoadLimits::new(1, 10, 2, 3).is_err());
        assert!(RoadLimits::new(3, 10, 0, 3).is_err());
        assert!(RoadLimits::new(2, 10, 1, 3).is_ok());
    }
}

// ── Road::new ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod road {
    use crate::{City, ErrorKind, Location, Position, Road, RoadError, RoadLimits};

    fn city(p: u32, name: &str) -> City {
        City::new(Position(p), name)
    }

    #[test]
    fn keeps_supplied_order() {
        let road = Road::new(20, vec![city(9, "b"), city(2, "a")], &RoadLimits::default()).unwrap();
        assert_eq!(road.length(), 20);
        assert_eq!(road.city_count(), 2);
        assert_eq!(road.cities()[0].name, "b");
    }

    #[test]
    fn duplicate_reports_both_records() {
        let err = Road::new(20, vec![city(4, "a"), city(9, "b"), city(4, "c")], &RoadLimits::default())
            .unwrap_err();
        match err {
            RoadError::DuplicatePosition { position, at, first } => {
                assert_eq!(position, Position(4));
                assert_eq!(at, Location::Record(2));
                assert_eq!(first, Location::Record(0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn position_bounds_are_exclusive() {
        let limits = RoadLimits::default();
        let at_end = Road::new(10, vec![city(3, "a"), city(10, "b")], &limits).unwrap_err();
        assert_eq!(at_end.kind(), ErrorKind::Range);
        let at_zero = Road::new(10, vec![city(0, "a"), city(3, "b")], &limits).unwrap_err();
        assert_eq!(at_zero.kind(), ErrorKind::Range);
    }

    #[test]
    fn names_must_be_single_line_and_non_empty() {
        let limits = RoadLimits::default();
        let blank = Road::new(10, vec![city(3, "  "), city(5, "b")], &limits).unwrap_err();
        assert_eq!(blank.kind(), ErrorKind::InvalidFormat);
        let multi = Road::new(10, vec![city(3, "a\nb"), city(5, "b")], &limits).unwrap_err();
        assert_eq!(multi.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn too_few_cities() {
        let err = Road::new(10, vec![city(3, "a")], &RoadLimits::default()).unwrap_err();
        assert!(matches!(err, RoadError::Range { field: "city count", value: 1, .. }));
    }

    #[test]
    fn into_parts_returns_ownership() {
        let road = Road::new(10, vec![city(3, "a"), city(5, "b")], &RoadLimits::default()).unwrap();
        let (length, cities) = road.into_parts();
        assert_eq!(length, 10);
        assert_eq!(cities.len(), 2);
    }
}

// ── Loader: valid input ───────────────────────────────────────────────────────

#[cfg(test)]
mod load_ok {
    use super::*;

    #[test]
    fn basic_file_in_file_order() {
        let road = load("10\n2\n7 Porto\n3 Lisboa\n").unwrap();
        assert_eq!(road.length(), 10);
        let got: Vec<(u32, &str)> = road.cities().iter().map(|c| (c.position.0, c.name.as_str())).collect();
        assert_eq!(got, vec![(7, "Porto"), (3, "Lisboa")]);
    }

    #[test]
    fn names_keep_inner_spaces() {
        let road = load("20 3\n2   Belo Horizonte\n10 Sao Paulo\n18 Rio de Janeiro").unwrap();
        assert_eq!(road.cities()[0].name, "Belo Horizonte");
        assert_eq!(road.cities()[2].name, "Rio de Janeiro");
    }

    #[test]
    fn name_on_following_line() {
        let road = load("10\n2\n3\nAlpha\n7 Beta\n").unwrap();
        let got: Vec<(u32, &str)> = road.cities().iter().map(|c| (c.position.0, c.name.as_str())).collect();
        assert_eq!(got, vec![(3, "Alpha"), (7, "Beta")]);
    }

    #[test]
    fn blank_lines_before_name_are_skipped() {
        let road = load("10\n2\n3   \r\n\n\t\n  Alpha Centauri \n7 Beta").unwrap();
        assert_eq!(road.cities()[0].name, "Alpha Centauri");
    }

    #[test]
    fn crlf_line_endings() {
        let road = load("10\r\n2\r\n3 A\r\n7 B\r\n").unwrap();
        assert_eq!(road.cities()[0].name, "A");
        assert_eq!(road.cities()[1].name, "B");
    }

    #[test]
    fn trailing_content_is_ignored() {
        let road = load("10\n2\n3 A\n7 B\n9 C\ngarbage\n").unwrap();
        assert_eq!(road.city_count(), 2);
    }

    #[test]
    fn boundary_limits_accepted() {
        assert!(load("3\n2\n1 a\n2 b\n").is_ok());
        assert!(load("1000000\n2\n1 a\n999999 b\n").is_ok());
    }

    #[test]
    fn maximum_city_count_accepted() {
        let mut text = String::from("20000\n10000\n");
        for p in 1..=10_000 {
            text.push_str(&format!("{p} c{p}\n"));
        }
        assert_eq!(load(&text).unwrap().city_count(), 10_000);
    }

    #[test]
    fn repeated_loads_are_identical() {
        let text = "20\n3\n18 c\n2 a\n10 b\n";
        assert_eq!(load(text).unwrap(), load(text).unwrap());
    }

    #[test]
    fn custom_limits() {
        let limits = RoadLimits::new(3, 50, 2, 3).unwrap();
        assert!(load_road_str("50 2\n1 a\n2 b", &limits).is_ok());
        let err = load_road_str("51 2\n1 a\n2 b", &limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}

// ── Loader: malformed input ───────────────────────────────────────────────────

#[cfg(test)]
mod load_err {
    use super::*;

    #[test]
    fn length_below_minimum() {
        let err = load("2\n2\n1 a\n2 b\n").unwrap_err();
        match err {
            RoadError::Range { field, value, at, .. } => {
                assert_eq!(field, "road length");
                assert_eq!(value, 2);
                assert_eq!(at, Location::Line(1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn length_above_maximum() {
        assert_eq!(kind_of("1000001\n2\n1 a\n2 b\n"), ErrorKind::Range);
    }

    #[test]
    fn city_count_out_of_range() {
        assert_eq!(kind_of("10\n1\n3 a\n"), ErrorKind::Range);
        assert_eq!(kind_of("10\n10001\n3 a\n"), ErrorKind::Range);
        assert_eq!(kind_of("10\n-2\n3 a\n"), ErrorKind::Range);
    }

    #[test]
    fn position_out_of_range() {
        assert_eq!(kind_of("10\n2\n0 a\n3 b\n"), ErrorKind::Range);
        assert_eq!(kind_of("10\n2\n3 a\n10 b\n"), ErrorKind::Range);
        assert_eq!(kind_of("10\n2\n-4 a\n3 b\n"), ErrorKind::Range);
    }

    #[test]
    fn repeated_position() {
        let err = load("10\n3\n3 A\n5 B\n3 C\n").unwrap_err();
        match err {
            RoadError::DuplicatePosition { position, at, first } => {
                assert_eq!(position, Position(3));
                assert_eq!(at, Location::Line(5));
                assert_eq!(first, Location::Line(3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn duplicate_checked_before_name() {
        // Second record repeats position 3 and has no name: duplicate wins.
        assert_eq!(kind_of("10\n2\n3 A\n3"), ErrorKind::DuplicatePosition);
    }

    #[test]
    fn missing_name_on_last_record() {
        let err = load("10\n2\n3 A\n7").unwrap_err();
        match err {
            RoadError::InvalidFormat { at, .. } => assert_eq!(at, Location::Line(4)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn name_only_line_then_end_of_input() {
        // The position's line is blank and nothing follows it.
        assert_eq!(kind_of("10\n2\n3 A\n7 \n\n  \n"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn carriage_return_inside_name() {
        let err = load("10\n2\n3 A\rB\n7 C\n").unwrap_err();
        match err {
            RoadError::InvalidFormat { at, message } => {
                assert_eq!(at, Location::Line(3));
                assert!(message.contains("several lines"), "got {message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn loader_and_road_new_agree_on_names() {
        let parts = vec![crate::City::new(Position(3), "A\rB"), crate::City::new(Position(7), "C")];
        let direct = crate::Road::new(10, parts, &RoadLimits::default()).unwrap_err();
        assert_eq!(direct.kind(), kind_of("10\n2\n3 A\rB\n7 C\n"));
    }

    #[test]
    fn undecodable_byte_in_number_is_format_error() {
        let bytes: Vec<u8> = b"10\n2\n3\xff a\n7 b\n".to_vec();
        let err = crate::load_road_reader(std::io::Cursor::new(bytes), &RoadLimits::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn non_numeric_tokens() {
        assert_eq!(kind_of("ten\n2\n3 a\n7 b\n"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("10\ntwo\n3 a\n7 b\n"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("10\n2\nx a\n7 b\n"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn truncated_inputs() {
        assert_eq!(kind_of(""), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("10\n"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("10\n3\n3 a\n7 b\n"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn huge_length_is_range_error() {
        assert_eq!(kind_of("123456789012345678901234567890\n2\n"), ErrorKind::Range);
    }

    #[test]
    fn error_messages_name_the_line() {
        let msg = load("10\n2\n3 A\n12 B\n").unwrap_err().to_string();
        assert!(msg.contains("line 4"), "got {msg}");
        assert!(msg.contains("(0, 10)"), "got {msg}");
    }
}

// ── Loader: files and readers ─────────────────────────────────────────────────

#[cfg(test)]
mod load_io {
    use std::io::{Cursor, Write};

    use crate::{ErrorKind, RoadLimits, load_road, load_road_reader};

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "20\n3\n2 a\n10 b\n18 c\n").unwrap();
        let road = load_road(file.path()).unwrap();
        assert_eq!(road.city_count(), 3);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_road(dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileUnavailable);
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn directory_is_unavailable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert_eq!(load_road(dir.path()).unwrap_err().kind(), ErrorKind::FileUnavailable);
    }

    #[test]
    fn loads_from_reader() {
        let road = load_road_reader(Cursor::new("10 2 3 a\n7 b"), &RoadLimits::default()).unwrap();
        assert_eq!(road.cities()[1].name, "b");
    }

    #[test]
    fn latin1_name_is_accepted() {
        let bytes: Vec<u8> = b"10\n2\n3 S\xe3o Paulo\n7 B\n".to_vec();
        let road = load_road_reader(Cursor::new(bytes), &RoadLimits::default()).unwrap();
        assert_eq!(road.cities()[0].name, "S\u{fffd}o Paulo");
        assert_eq!(road.cities()[1].name, "B");
    }

    #[test]
    fn latin1_name_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"20\n2\n4 Bel\xe9m\n9 Macei\xf3\n").unwrap();
        let road = load_road(file.path()).unwrap();
        assert_eq!(road.city_count(), 2);
        assert!(road.cities()[0].name.starts_with("Bel"));
    }
}

// ── ErrorKind ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinds {
    use std::collections::HashSet;

    use crate::ErrorKind;

    #[test]
    fn exit_codes_distinct_and_nonzero() {
        let kinds = [
            ErrorKind::FileUnavailable,
            ErrorKind::InvalidFormat,
            ErrorKind::Range,
            ErrorKind::DuplicatePosition,
            ErrorKind::Config,
        ];
        let codes: HashSet<u8> = kinds.iter().map(|k| k.exit_code()).collect();
        assert_eq!(codes.len(), kinds.len());
        assert!(codes.iter().all(|&c| c > 1));
    }
}
