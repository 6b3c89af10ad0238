use thiserror::Error;

/// Malformed-pattern errors. Raised at compile time only; matching a
/// compiled pattern never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern '{pattern}' contains an empty segment")]
    EmptySegment { pattern: String },
    #[error(
        "wildcard in segment {segment_index} of '{pattern}' must be the final segment"
    )]
    WildcardNotTerminal {
        pattern: String,
        segment_index: usize,
    },
    #[error("segment '{segment}' mixes wildcard and literal syntax")]
    MixedWildcardLiteral { segment: String },
    #[error("segment '{segment}' mixes parameter and literal syntax")]
    MixedParameterLiteral { segment: String },
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterMissingName { segment: String },
    #[error(
        "parameter name '{name}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart { name: String, found: char },
    #[error("parameter name '{name}' contains invalid character '{invalid}'")]
    ParameterInvalidCharacter { name: String, invalid: char },
    #[error("parameter name '{param}' appears more than once in '{pattern}'")]
    DuplicateParameterName { pattern: String, param: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
