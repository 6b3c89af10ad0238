use serde::{Deserialize, Serialize};

use crate::location::subscribers::Subscription;

/// Options for a navigation request. `replace` overwrites the current
/// history entry instead of pushing a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigateOptions {
    #[serde(default)]
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replacing() -> Self {
        Self { replace: true }
    }
}

/// Callback invoked with the new path after a location change settles.
pub type LocationCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Single source of truth for "where are we now", pluggable to different
/// navigation back-ends (in-memory, history-stack, hash-based).
///
/// Contract:
/// - `path` is synchronous and never blocks.
/// - `navigate` updates what `path` returns before any subscriber is
///   notified. A navigation to the already-current path does not notify.
/// - every subscriber registered at notification time observes the settled
///   path; intermediate values of a coalesced burst may be skipped.
pub trait LocationSource: Send + Sync {
    fn path(&self) -> String;

    fn navigate(&self, path: &str, options: NavigateOptions);

    fn subscribe(&self, callback: LocationCallback) -> Subscription;
}
