use wayfarer::pattern::{PatternError, Segment, parse_pattern};

#[test]
fn parses_literal_and_parameter_segments() {
    let segments = parse_pattern("/users/:id").expect("pattern should parse");
    assert_eq!(
        segments.as_slice(),
        [
            Segment::Literal("users".to_string()),
            Segment::Param("id".to_string()),
        ]
    );
}

#[test]
fn parses_trailing_wildcard() {
    let segments = parse_pattern("/files/*").expect("pattern should parse");
    assert_eq!(
        segments.as_slice(),
        [Segment::Literal("files".to_string()), Segment::Wildcard]
    );
}

#[test]
fn root_pattern_has_zero_segments() {
    let segments = parse_pattern("/").expect("root pattern should parse");
    assert!(segments.is_empty());
}

#[test]
fn rejects_empty_pattern() {
    let err = parse_pattern("").expect_err("empty pattern should fail");
    assert_eq!(err, PatternError::EmptyPattern);
}

#[test]
fn rejects_empty_segment() {
    let err = parse_pattern("/users//profile").expect_err("empty segment should fail");
    match err {
        PatternError::EmptySegment { pattern } => assert_eq!(pattern, "/users//profile"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_wildcard_before_final_segment() {
    let err = parse_pattern("/files/*/meta").expect_err("expected wildcard position error");
    match err {
        PatternError::WildcardNotTerminal {
            segment_index,
            pattern,
        } => {
            assert_eq!(segment_index, 1);
            assert_eq!(pattern, "/files/*/meta");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_wildcard_mixed_with_literal_text() {
    let err = parse_pattern("/files/*.png").expect_err("expected mixed wildcard error");
    match err {
        PatternError::MixedWildcardLiteral { segment } => assert_eq!(segment, "*.png"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_parameter_mixed_with_literal_text() {
    let err = parse_pattern("/users/user:id").expect_err("expected mixed parameter error");
    match err {
        PatternError::MixedParameterLiteral { segment } => assert_eq!(segment, "user:id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_parameter_without_a_name() {
    let err = parse_pattern("/users/:").expect_err("expected missing name error");
    match err {
        PatternError::ParameterMissingName { segment } => assert_eq!(segment, ":"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_parameter_name_starting_with_digit() {
    let err = parse_pattern("/:1id").expect_err("expected invalid start error");
    match err {
        PatternError::ParameterInvalidStart { name, found } => {
            assert_eq!(name, "1id");
            assert_eq!(found, '1');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_parameter_name_with_invalid_character() {
    let err = parse_pattern("/:id-raw").expect_err("expected invalid character error");
    match err {
        PatternError::ParameterInvalidCharacter { name, invalid } => {
            assert_eq!(name, "id-raw");
            assert_eq!(invalid, '-');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_duplicate_parameter_names() {
    let err = parse_pattern("/:id/:id").expect_err("expected duplicate parameter error");
    match err {
        PatternError::DuplicateParameterName { param, .. } => assert_eq!(param, "id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn underscore_is_a_valid_parameter_start() {
    let segments = parse_pattern("/:_private").expect("underscore start should parse");
    assert_eq!(segments.as_slice(), [Segment::Param("_private".to_string())]);
}
