use serde::{Deserialize, Serialize};

use crate::path::NormalizationOptions;

/// Matching policy for one router. Fixed for the router's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterOptions {
    /// Literal segments compare case-sensitively. Default: true.
    pub case_sensitive: bool,
    /// A trailing slash is significant: pattern and candidate path must
    /// agree on its presence. Default: false.
    pub strict_trailing_slash: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strict_trailing_slash: false,
        }
    }
}

impl RouterOptions {
    pub(crate) fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            case_sensitive: self.case_sensitive,
            strict_trailing_slash: self.strict_trailing_slash,
            ..Default::default()
        }
    }
}
