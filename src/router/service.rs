use std::fmt;
use std::sync::Arc;

use crate::location::{LocationCallback, LocationSource, NavigateOptions, Subscription};
use crate::path::{NormalizationOptions, normalize_path};
use crate::pattern::{MatchResult, PatternCache, PatternResult};
use crate::router::deferred::DeferredNavigations;
use crate::router::options::RouterOptions;

/// Binds one location source and one pattern cache as the shared routing
/// object for a scope. Holds no other state; all matching is a pure
/// delegation to the compiled patterns.
pub struct Router {
    source: Arc<dyn LocationSource>,
    patterns: PatternCache,
    normalization: NormalizationOptions,
    deferred: DeferredNavigations,
}

impl Router {
    pub fn new(source: Arc<dyn LocationSource>, options: RouterOptions) -> Self {
        Self {
            source,
            patterns: PatternCache::new(options.case_sensitive),
            normalization: options.normalization(),
            deferred: DeferredNavigations::default(),
        }
    }

    pub fn with_defaults(source: Arc<dyn LocationSource>) -> Self {
        Self::new(source, RouterOptions::default())
    }

    /// Compiles `pattern` if needed and tests it against `path`. A path that
    /// cannot be normalized matches nothing; only a malformed pattern is an
    /// error. Under `strict_trailing_slash`, the pattern and the candidate
    /// path must agree on the presence of a trailing slash.
    pub fn match_pattern(&self, pattern: &str, path: &str) -> PatternResult<MatchResult> {
        let compiled = self.patterns.compile(pattern)?;

        let normalized = match normalize_path(path, &self.normalization) {
            Ok(normalized) => normalized,
            Err(err) => {
                tracing::trace!(%err, path, "candidate path failed normalization");
                return Ok(MatchResult::no_match());
            }
        };

        if self.normalization.strict_trailing_slash
            && has_trailing_slash(&normalized) != has_trailing_slash(pattern)
        {
            return Ok(MatchResult::no_match());
        }

        Ok(compiled.matches(&normalized))
    }

    /// Tests `pattern` against the current location.
    pub fn route(&self, pattern: &str) -> PatternResult<MatchResult> {
        self.match_pattern(pattern, &self.source.path())
    }

    /// Like [`Router::route`], but an explicit match override always wins
    /// over the computed match.
    pub fn route_with_override(
        &self,
        pattern: &str,
        override_match: Option<MatchResult>,
    ) -> PatternResult<MatchResult> {
        match override_match {
            Some(result) => Ok(result),
            None => self.route(pattern),
        }
    }

    /// Current path and the navigation handle, as an ordered pair. The order
    /// is part of the contract; consumers destructure positionally.
    pub fn location(&self) -> (String, Navigator) {
        (self.source.path(), self.navigator())
    }

    pub fn navigator(&self) -> Navigator {
        Navigator {
            source: self.source.clone(),
        }
    }

    pub fn subscribe(&self, callback: LocationCallback) -> Subscription {
        self.source.subscribe(callback)
    }

    /// First-match-wins resolution over patterns in declaration order. Stops
    /// consuming the iterator as soon as one pattern matches; later patterns
    /// are never compiled or evaluated.
    pub fn resolve_first<'p, I>(&self, patterns: I, path: &str) -> PatternResult<Option<ResolvedRoute>>
    where
        I: IntoIterator<Item = &'p str>,
    {
        for (index, pattern) in patterns.into_iter().enumerate() {
            let result = self.match_pattern(pattern, path)?;
            if result.is_match() {
                return Ok(Some(ResolvedRoute {
                    index,
                    pattern: pattern.to_string(),
                    result,
                }));
            }
        }
        Ok(None)
    }

    /// Queues a navigation to run when the host commits, instead of during
    /// the current resolution pass.
    pub fn schedule_navigate(&self, path: &str, options: NavigateOptions) {
        self.deferred.push(path, options);
    }

    /// Executes queued navigations in request order. Called by the host
    /// after a unit of work commits; each request runs exactly once.
    pub fn settle(&self) {
        for pending in self.deferred.drain() {
            self.source.navigate(&pending.path, pending.options);
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("patterns", &self.patterns)
            .field("normalization", &self.normalization)
            .finish_non_exhaustive()
    }
}

// The root path's slash is a separator, not a trailing slash.
fn has_trailing_slash(path: &str) -> bool {
    path.len() > 1 && path.ends_with('/')
}

/// Winning route of a first-match-wins resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub index: usize,
    pub pattern: String,
    pub result: MatchResult,
}

/// Cloneable navigation handle over the router's location source. Stable
/// across re-renders: clones share the same source.
#[derive(Clone)]
pub struct Navigator {
    source: Arc<dyn LocationSource>,
}

impl Navigator {
    pub fn navigate(&self, path: &str, options: NavigateOptions) {
        self.source.navigate(path, options);
    }

    pub fn push(&self, path: &str) {
        self.navigate(path, NavigateOptions::default());
    }

    pub fn replace(&self, path: &str) {
        self.navigate(path, NavigateOptions::replacing());
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}
