use std::collections::HashMap;

use crate::path::split_segments;
use crate::pattern::error::PatternResult;
use crate::pattern::parser::{SegmentVec, parse_pattern};
use crate::pattern::segment::Segment;

/// Reserved key under which a trailing wildcard binds the joined remainder
/// of the candidate path.
pub const WILDCARD_KEY: &str = "*";

pub type RouteParams = HashMap<String, String>;

/// Outcome of testing a path against a compiled pattern. Parameters are
/// present exactly when the path matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    matched: bool,
    params: Option<RouteParams>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            params: None,
        }
    }

    pub(crate) fn with_params(params: RouteParams) -> Self {
        Self {
            matched: true,
            params: Some(params),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn params(&self) -> Option<&RouteParams> {
        self.params.as_ref()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.as_ref()?.get(name).map(String::as_str)
    }

    pub fn into_params(self) -> Option<RouteParams> {
        self.params
    }
}

/// A route pattern compiled for repeated matching. Immutable once built and
/// safe to share across consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: Box<str>,
    segments: SegmentVec,
    has_wildcard: bool,
    case_sensitive: bool,
}

impl CompiledPattern {
    pub fn compile(pattern: &str, case_sensitive: bool) -> PatternResult<Self> {
        let segments = parse_pattern(pattern)?;
        let has_wildcard = segments.last().is_some_and(Segment::is_wildcard);

        Ok(Self {
            source: Box::from(pattern),
            segments,
            has_wildcard,
            case_sensitive,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    /// Tests a candidate path. Pure and deterministic; literal segments
    /// compare case-sensitively unless the pattern was compiled otherwise.
    #[tracing::instrument(level = "trace", skip(self), fields(pattern = %self.source, path = %path))]
    pub fn matches(&self, path: &str) -> MatchResult {
        let candidate = split_segments(path);
        let fixed = self.segments.len() - usize::from(self.has_wildcard);

        if self.has_wildcard {
            if candidate.len() < fixed {
                return MatchResult::no_match();
            }
        } else if candidate.len() != self.segments.len() {
            return MatchResult::no_match();
        }

        let mut params = RouteParams::with_capacity(self.param_capacity());

        for (segment, value) in self.segments[..fixed].iter().zip(candidate.iter()) {
            match segment {
                Segment::Literal(lit) => {
                    let equal = if self.case_sensitive {
                        *value == lit.as_str()
                    } else {
                        value.eq_ignore_ascii_case(lit)
                    };
                    if !equal {
                        return MatchResult::no_match();
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return MatchResult::no_match();
                    }
                    params.insert(name.clone(), (*value).to_string());
                }
                // the parser only admits a wildcard in final position
                Segment::Wildcard => return MatchResult::no_match(),
            }
        }

        if self.has_wildcard {
            params.insert(WILDCARD_KEY.to_string(), candidate[fixed..].join("/"));
        }

        MatchResult::with_params(params)
    }

    fn param_capacity(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| !matches!(segment, Segment::Literal(_)))
            .count()
    }
}
