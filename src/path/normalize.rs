use memchr::memchr;
use smallvec::SmallVec;

use crate::path::{PathError, PathResult};

/// Segments of a path, split on `/` with at most one leading and one
/// trailing slash ignored.
pub type SegmentList<'a> = SmallVec<[&'a str; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    pub allow_duplicate_slash: bool,
    pub strict_trailing_slash: bool,
    pub case_sensitive: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            allow_duplicate_slash: false,
            strict_trailing_slash: false,
            case_sensitive: true,
        }
    }
}

/// Produces the canonical form of a candidate path before matching:
/// collapses duplicate slashes, trims a single trailing slash (unless
/// `strict_trailing_slash`), and lowercases ASCII when matching is
/// case-insensitive.
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str, options: &NormalizationOptions) -> PathResult<String> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let mut output = Vec::with_capacity(path.len());
    let mut prev_was_slash = false;

    for &byte in path.as_bytes() {
        if byte == b'/' {
            if !options.allow_duplicate_slash && prev_was_slash {
                continue;
            }
            output.push(b'/');
            prev_was_slash = true;
            continue;
        }

        if byte <= 0x20 {
            return Err(PathError::ControlOrWhitespace {
                input: path.to_string(),
                byte,
            });
        }

        let mut value = byte;
        if !options.case_sensitive && value.is_ascii_uppercase() {
            value = value.to_ascii_lowercase();
        }

        output.push(value);
        prev_was_slash = false;
    }

    if !options.strict_trailing_slash && output.len() > 1 && output.last() == Some(&b'/') {
        output.pop();
    }

    if output.is_empty() {
        return Err(PathError::Empty);
    }

    Ok(String::from_utf8(output).expect("normalization only rewrites ASCII bytes"))
}

/// Splits a path or pattern into `/`-delimited segments. A single leading
/// and a single trailing slash carry no meaning; `""` and `"/"` both yield
/// zero segments.
pub fn split_segments(path: &str) -> SegmentList<'_> {
    let mut rest = path.strip_prefix('/').unwrap_or(path);
    rest = rest.strip_suffix('/').unwrap_or(rest);

    let mut segments = SegmentList::new();
    if rest.is_empty() {
        return segments;
    }

    let bytes = rest.as_bytes();
    let mut start = 0usize;
    while let Some(pos) = memchr(b'/', &bytes[start..]) {
        segments.push(&rest[start..start + pos]);
        start += pos + 1;
    }
    segments.push(&rest[start..]);
    segments
}
