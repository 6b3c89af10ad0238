/// One whole segment of a route pattern. Parameters and wildcards occupy
/// an entire segment; suffix-style tokens are rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
    Wildcard,
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}
