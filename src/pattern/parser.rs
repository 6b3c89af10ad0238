use smallvec::SmallVec;

use crate::path::split_segments;
use crate::pattern::error::{PatternError, PatternResult};
use crate::pattern::segment::Segment;

pub type SegmentVec = SmallVec<[Segment; 8]>;

/// Parses a route pattern into whole segments, failing fast on malformed
/// input. `"/"` is a valid pattern with zero segments (the root route).
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<SegmentVec> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let raw = split_segments(pattern);
    let mut segments = SegmentVec::with_capacity(raw.len());
    let mut seen_params: SmallVec<[&str; 4]> = SmallVec::new();

    for (index, seg) in raw.iter().enumerate() {
        if seg.is_empty() {
            return Err(PatternError::EmptySegment {
                pattern: pattern.to_string(),
            });
        }

        if seg.contains('*') {
            if *seg != "*" {
                return Err(PatternError::MixedWildcardLiteral {
                    segment: seg.to_string(),
                });
            }
            if index + 1 != raw.len() {
                return Err(PatternError::WildcardNotTerminal {
                    pattern: pattern.to_string(),
                    segment_index: index,
                });
            }
            segments.push(Segment::Wildcard);
            continue;
        }

        if let Some(name) = seg.strip_prefix(':') {
            validate_param_name(seg, name)?;
            if seen_params.contains(&name) {
                return Err(PatternError::DuplicateParameterName {
                    pattern: pattern.to_string(),
                    param: name.to_string(),
                });
            }
            seen_params.push(name);
            segments.push(Segment::Param(name.to_string()));
            continue;
        }

        if seg.contains(':') {
            return Err(PatternError::MixedParameterLiteral {
                segment: seg.to_string(),
            });
        }

        segments.push(Segment::Literal(seg.to_string()));
    }

    Ok(segments)
}

fn validate_param_name(segment: &str, name: &str) -> PatternResult<()> {
    let bytes = name.as_bytes();

    let Some(&first) = bytes.first() else {
        return Err(PatternError::ParameterMissingName {
            segment: segment.to_string(),
        });
    };

    if !(first.is_ascii_alphabetic() || first == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            name: name.to_string(),
            found: first as char,
        });
    }

    for &c in &bytes[1..] {
        if !(c.is_ascii_alphanumeric() || c == b'_') {
            return Err(PatternError::ParameterInvalidCharacter {
                name: name.to_string(),
                invalid: c as char,
            });
        }
    }

    Ok(())
}
