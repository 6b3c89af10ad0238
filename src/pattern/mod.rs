mod cache;
mod compiled;
mod error;
mod parser;
mod segment;

pub use cache::PatternCache;
pub use compiled::{CompiledPattern, MatchResult, RouteParams, WILDCARD_KEY};
pub use error::{PatternError, PatternResult};
pub use parser::parse_pattern;
pub use segment::Segment;
